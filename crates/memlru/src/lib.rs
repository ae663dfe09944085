//! # memlru
//!
//! Fixed-capacity least-recently-used cache.
//!
//! ## Architecture
//! - **Index**: AHash map from key to list handle (O(1) lookup)
//! - **Recency list**: `memstruct` doubly linked list, head = most recent,
//!   tail = next to evict (O(1) promote and evict)
//! - **Shared wrapper**: one `parking_lot` lock around the whole cache plus
//!   hit/miss counters
//!
//! ```
//! use memlru::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.set("a", 1);
//! cache.set("b", 2);
//! cache.set("c", 3);
//!
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.get(&"c"), Some(&3));
//! # Ok::<(), memlru::Error>(())
//! ```

#![warn(missing_docs)]

mod config;
mod lru;
mod shared;
mod stats;

pub use config::{CacheConfig, DEFAULT_LIMIT};
pub use lru::LruCache;
pub use memstruct::{Error, Result};
pub use shared::SharedLruCache;
pub use stats::{CacheStats, StatsSnapshot};
