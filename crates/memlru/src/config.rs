//! Cache construction settings

use memstruct::{Error, Result};

/// Capacity used when none is given
pub const DEFAULT_LIMIT: usize = 10;

/// Settings for building an [`LruCache`](crate::LruCache) or
/// [`SharedLruCache`](crate::SharedLruCache)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries held at once
    pub limit: usize,

    /// Whether the shared cache updates its hit/miss counters
    pub record_stats: bool,
}

impl CacheConfig {
    /// Config with the given limit and statistics enabled
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Replace the entry limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Turn statistics recording on or off
    pub fn with_stats(mut self, record_stats: bool) -> Self {
        self.record_stats = record_stats;
        self
    }

    /// Reject settings no cache can be built from
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` - limit is 0
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(Error::InvalidCapacity(self.limit));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            record_stats: true,
        }
    }
}
