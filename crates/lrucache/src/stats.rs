//! Cache statistics tracking

use std::fmt;

use serde::Serialize;

/// Request and hit counters for a single cache instance
///
/// Both counters start at zero, only ever grow, and saturate at `u64::MAX`.
/// `hits <= requests` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    requests: u64,
    hits: u64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_counts(requests: u64, hits: u64) -> Self {
        Self { requests, hits }
    }

    /// Record a lookup that found its key
    ///
    /// Returns `false` once `requests` has saturated.
    pub(crate) fn record_hit(&mut self) -> bool {
        let advanced = self.record_miss();
        // Kept below `requests` once it saturates
        self.hits = self.hits.saturating_add(1).min(self.requests);
        advanced
    }

    /// Record a lookup that missed
    ///
    /// Returns `false` once `requests` has saturated.
    pub(crate) fn record_miss(&mut self) -> bool {
        match self.requests.checked_add(1) {
            Some(requests) => {
                self.requests = requests;
                true
            }
            None => false,
        }
    }

    /// Total lookups
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Lookups that found their key
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that missed
    pub fn misses(&self) -> u64 {
        self.requests - self.hits
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.hits as f64 / self.requests as f64
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.hits, self.requests)
    }
}
