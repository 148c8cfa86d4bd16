//! LRU (Least Recently Used) cache implementation
//!
//! Entries live in a slot arena linked into a doubly-linked recency list
//! (head = most recently used, tail = least recently used). The hash index
//! maps each key to its slot, so lookup, move-to-front and eviction are all
//! O(1).
//!
//! There is no removal operation: a slot is only ever vacated by eviction,
//! and the insert that caused the eviction reuses it straight away. The
//! arena therefore never has holes and `nodes.len() == map.len()`.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::error::Result;
use crate::report::{HitRateReporter, TracingReporter};
use crate::stats::CacheStats;

/// Upper bound on slots reserved at construction; the rest grow on demand
const MAX_PREALLOC: usize = 4096;

/// Node in the LRU doubly-linked list
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// LRU cache with fixed capacity and hit-rate reporting
///
/// ```
/// use lrucache::LruCache;
///
/// let mut cache = LruCache::new(2)?;
/// cache.set("a", 1);
/// cache.set("b", 2);
/// cache.get(&"a");
/// cache.set("c", 3); // evicts "b"
///
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.get(&"a"), Some(&1));
/// assert_eq!(cache.stats().hits(), 2);
/// # Ok::<(), lrucache::Error>(())
/// ```
pub struct LruCache<K, V, R = TracingReporter> {
    map: HashMap<K, usize, RandomState>,
    nodes: Vec<Node<K, V>>,
    head: Option<usize>,
    tail: Option<usize>,
    config: CacheConfig,
    stats: CacheStats,
    reporter: R,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the given capacity
    ///
    /// Reports the hit rate through `tracing` every
    /// [`DEFAULT_REPORT_INTERVAL`](crate::DEFAULT_REPORT_INTERVAL) requests.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(&CacheConfig::new(capacity))
    }

    /// Create a cache from a config, reporting through `tracing`
    pub fn with_config(config: &CacheConfig) -> Result<Self> {
        Self::with_reporter(config, TracingReporter)
    }
}

impl<K, V, R> LruCache<K, V, R>
where
    K: Hash + Eq + Clone,
    R: HitRateReporter,
{
    /// Create a cache that hands hit-rate observations to `reporter`
    pub fn with_reporter(config: &CacheConfig, reporter: R) -> Result<Self> {
        config.validate()?;
        debug!(
            capacity = config.capacity,
            report_interval = config.report_interval,
            "created lru cache"
        );

        let prealloc = config.capacity.min(MAX_PREALLOC);
        Ok(Self {
            map: HashMap::with_capacity_and_hasher(prealloc, RandomState::new()),
            nodes: Vec::with_capacity(prealloc),
            head: None,
            tail: None,
            config: *config,
            stats: CacheStats::new(),
            reporter,
        })
    }

    /// Look up a key, counting the request
    ///
    /// A hit moves the key to the most recently used position. A miss
    /// changes nothing but the request counter.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.map.get(key).copied();
        self.record_request(idx.is_some());

        let idx = idx?;
        self.move_to_front(idx);
        Some(&self.nodes[idx].value)
    }

    /// Insert or overwrite a key, making it the most recently used
    ///
    /// Inserting a new key into a full cache evicts the least recently used
    /// entry first. Overwriting never evicts.
    pub fn set(&mut self, key: K, value: V) {
        if let Some(&idx) = self.map.get(&key) {
            self.nodes[idx].value = value;
            self.move_to_front(idx);
        } else {
            self.insert_new(key, value);
        }
    }

    /// Return the cached value for `key`, computing and storing it on a miss
    ///
    /// Counts as one request, exactly like [`get`](Self::get). On a miss the
    /// computed value is inserted as by [`set`](Self::set).
    pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> &V
    where
        F: FnOnce() -> V,
    {
        let idx = self.map.get(&key).copied();
        self.record_request(idx.is_some());

        let idx = match idx {
            Some(idx) => {
                self.move_to_front(idx);
                idx
            }
            None => self.insert_new(key, f()),
        };
        &self.nodes[idx].value
    }

    /// Read a value without counting a request or touching recency
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).map(|&idx| &self.nodes[idx].value)
    }

    /// Check for a key without counting a request or touching recency
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Keys from least to most recently used
    pub fn keys_lru(&self) -> impl Iterator<Item = &K> + '_ {
        std::iter::successors(self.tail, move |&idx| self.nodes[idx].prev)
            .map(move |idx| &self.nodes[idx].key)
    }

    /// Get the current size of the cache
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Configuration the cache was built with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Get the hit-rate reporter
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Get the hit-rate reporter mutably
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    fn record_request(&mut self, hit: bool) {
        let advanced = if hit {
            self.stats.record_hit()
        } else {
            self.stats.record_miss()
        };

        // A saturated counter stays on the same value, report it only once
        if advanced && self.config.is_report_point(self.stats.requests()) {
            self.reporter.report(&self.stats);
        }
    }

    /// Insert a key known to be absent, returning its slot
    fn insert_new(&mut self, key: K, value: V) -> usize {
        let node = Node {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        };

        let idx = match self.evict() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        self.push_front(idx);
        self.map.insert(key, idx);
        idx
    }

    /// Unlink the tail if the cache is full, returning the freed slot
    fn evict(&mut self) -> Option<usize> {
        if self.map.len() < self.config.capacity {
            return None;
        }

        let tail_idx = self.tail?;
        self.unlink(tail_idx);
        self.map.remove(&self.nodes[tail_idx].key);
        trace!(slot = tail_idx, "evicted least recently used entry");
        Some(tail_idx)
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return; // Already at front
        }

        self.unlink(idx);
        self.push_front(idx);
    }

    fn push_front(&mut self, idx: usize) {
        let node = &mut self.nodes[idx];
        node.prev = None;
        node.next = self.head;

        if let Some(head_idx) = self.head {
            self.nodes[head_idx].prev = Some(idx);
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let node = &self.nodes[idx];
            (node.prev, node.next)
        };

        match prev {
            Some(prev_idx) => self.nodes[prev_idx].next = next,
            None => self.head = next,
        }

        match next {
            Some(next_idx) => self.nodes[next_idx].prev = prev,
            None => self.tail = prev,
        }
    }
}
