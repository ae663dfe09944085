//! SharedLruCache: coarse-locked LRU cache that can be cloned across threads

use std::hash::Hash;
use std::sync::Arc;

use memstruct::Result;
use parking_lot::RwLock;

use crate::config::CacheConfig;
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Thread-safe handle to one [`LruCache`]
///
/// Every operation takes a single lock covering the whole cache. Lookups take
/// it exclusively as well, since a hit reorders the recency list.
pub struct SharedLruCache<K, V> {
    /// Cache guarded as a whole
    cache: Arc<RwLock<LruCache<K, V>>>,

    /// Usage counters
    stats: Arc<CacheStats>,

    record_stats: bool,
}

impl<K, V> SharedLruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a shared cache holding at most `limit` entries
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` - limit is 0
    pub fn new(limit: usize) -> Result<Self> {
        Self::with_config(&CacheConfig::new(limit))
    }

    /// Create a shared cache from a [`CacheConfig`]
    pub fn with_config(config: &CacheConfig) -> Result<Self> {
        let cache = LruCache::with_config(config)?;

        Ok(Self {
            cache: Arc::new(RwLock::new(cache)),
            stats: Arc::new(CacheStats::new()),
            record_stats: config.record_stats,
        })
    }

    /// Look up `key`, marking it most recently used, and clone its value out
    pub fn get(&self, key: &K) -> Option<V> {
        let value = self.cache.write().get(key).cloned();

        if self.record_stats {
            match value {
                Some(_) => self.stats.record_hit(),
                None => self.stats.record_miss(),
            }
        }
        value
    }

    /// Insert or overwrite `key`, evicting the least recently used entry when full
    pub fn set(&self, key: K, value: V) {
        let (existed, evicted) = {
            let mut cache = self.cache.write();
            let existed = cache.contains_key(&key);
            (existed, cache.push(key, value).is_some())
        };

        if self.record_stats {
            if existed {
                self.stats.record_update();
            } else {
                self.stats.record_insert();
            }
            if evicted {
                self.stats.record_eviction();
            }
        }
    }

    /// Check for `key` without touching its recency
    pub fn contains_key(&self, key: &K) -> bool {
        self.cache.read().contains_key(key)
    }

    /// Run `f` with the cache locked, for compound operations that must not
    /// interleave with other threads. Statistics are not updated.
    pub fn with_cache<R>(&self, f: impl FnOnce(&mut LruCache<K, V>) -> R) -> R {
        let mut cache = self.cache.write();
        f(&mut cache)
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get current cache size
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Get cache capacity
    pub fn limit(&self) -> usize {
        self.cache.read().limit()
    }
}

impl<K, V> Clone for SharedLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            stats: Arc::clone(&self.stats),
            record_stats: self.record_stats,
        }
    }
}
