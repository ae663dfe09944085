//! LRU (Least Recently Used) cache implementation
//!
//! A key index points at nodes of a [`LinkedList`] holding `(key, value)`
//! pairs. The list head is the most recently used entry and the tail the
//! least recently used, so lookup, promotion and eviction are all O(1).

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use memstruct::{Error, LinkedList, NodeHandle, Result};
use tracing::{debug, trace};

use crate::config::{CacheConfig, DEFAULT_LIMIT};

/// Upper bound on storage reserved up front; larger caches grow on demand
const MAX_PREALLOC: usize = 4096;

/// LRU cache with fixed capacity
#[derive(Debug)]
pub struct LruCache<K, V> {
    index: HashMap<K, NodeHandle, RandomState>,
    list: LinkedList<(K, V)>,
    limit: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache holding at most `limit` entries
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` - limit is 0
    pub fn new(limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(Error::InvalidCapacity(limit));
        }
        debug!(limit, "creating LRU cache");
        Ok(Self::build(limit))
    }

    /// Create a cache from a [`CacheConfig`]
    pub fn with_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.limit)
    }

    fn build(limit: usize) -> Self {
        let reserve = limit.min(MAX_PREALLOC);
        Self {
            index: HashMap::with_capacity_and_hasher(reserve, RandomState::new()),
            list: LinkedList::with_capacity(reserve),
            limit,
        }
    }

    /// Look up `key` and mark it most recently used
    ///
    /// A miss returns `None`.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let Some(&handle) = self.index.get(key) else {
            trace!("cache miss");
            return None;
        };

        trace!("cache hit");
        self.promote(handle);
        self.list.get(handle).map(|(_, value)| value)
    }

    /// Look up `key` without touching its recency
    pub fn peek(&self, key: &K) -> Option<&V> {
        let handle = *self.index.get(key)?;
        self.list.get(handle).map(|(_, value)| value)
    }

    /// Check for `key` without touching its recency
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or overwrite `key`, making it the most recently used entry
    ///
    /// When a new key arrives at a full cache the least recently used entry
    /// is evicted after the new one is linked.
    pub fn set(&mut self, key: K, value: V) {
        self.push(key, value);
    }

    /// Same as [`set`](Self::set), returning the evicted entry if any
    pub fn push(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&handle) = self.index.get(&key) {
            if let Some(entry) = self.list.get_mut(handle) {
                entry.1 = value;
            }
            trace!("overwrote existing entry");
            self.promote(handle);
            return None;
        }

        let handle = self.list.add_to_head((key.clone(), value));
        self.index.insert(key, handle);

        if self.list.len() <= self.limit {
            return None;
        }

        let (old_key, old_value) = self.list.remove_from_tail().ok()?;
        self.index.remove(&old_key);
        debug!(
            limit = self.limit,
            len = self.index.len(),
            "evicted least recently used entry"
        );
        Some((old_key, old_value))
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Iterate entries from most to least recently used
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.list.iter().map(|(key, value)| (key, value))
    }

    /// Panic if the index and the list disagree
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.list.debug_validate_invariants();
        assert_eq!(self.index.len(), self.list.len(), "index/list size drift");
        assert!(self.len() <= self.limit, "cache over limit");
        for (key, &handle) in &self.index {
            let stored = self.list.get(handle).map(|(node_key, _)| node_key);
            assert!(stored == Some(key), "index entry points at wrong node");
        }
    }

    fn promote(&mut self, handle: NodeHandle) {
        let moved = self.list.move_to_front(handle);
        debug_assert!(moved.is_ok(), "indexed node missing from list");
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::build(DEFAULT_LIMIT)
    }
}
