//! # lrucache
//!
//! Fixed-capacity key-value cache with least-recently-used eviction.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to arena slot (O(1))
//! - **LRU List**: Doubly-linked list over the slot arena for recency (O(1))
//! - **Stats**: per-instance request/hit counters
//! - **Reporting**: pluggable [`HitRateReporter`], `tracing` by default
//!
//! The cache is a single-owner structure: every mutating call takes
//! `&mut self`. Wrap it in a lock to share it between threads.
//!
//! ```
//! use lrucache::{CacheConfig, LruCache};
//!
//! let config = CacheConfig::from_toml_str("capacity = 2")?;
//! let mut cache = LruCache::with_config(&config)?;
//!
//! cache.set(1, "one");
//! assert_eq!(cache.get(&1), Some(&"one"));
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.stats().to_string(), "1/2");
//! # Ok::<(), lrucache::Error>(())
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod lru;
mod report;
mod stats;

pub use config::{CacheConfig, DEFAULT_REPORT_INTERVAL};
pub use error::{Error, Result};
pub use lru::LruCache;
pub use report::{HitRateReporter, NoopReporter, TracingReporter};
pub use stats::CacheStats;
