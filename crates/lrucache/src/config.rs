//! Cache configuration
//!
//! A [`CacheConfig`] can be built in code or embedded in a host's TOML
//! config file:
//!
//! ```toml
//! capacity = 4096
//! report_interval = 1000000   # optional, 0 disables reporting
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of `get` requests between two hit-rate reports
pub const DEFAULT_REPORT_INTERVAL: u64 = 1_000_000;

fn default_report_interval() -> u64 {
    DEFAULT_REPORT_INTERVAL
}

/// Settings for an [`LruCache`](crate::LruCache)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries (must be > 0)
    pub capacity: usize,

    /// Report the hit rate every time the request count reaches a multiple
    /// of this value. `0` turns reporting off.
    #[serde(default = "default_report_interval")]
    pub report_interval: u64,
}

impl CacheConfig {
    /// Config with the given capacity and the default report interval
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }

    /// Override the report interval
    pub fn with_report_interval(mut self, report_interval: u64) -> Self {
        self.report_interval = report_interval;
        self
    }

    /// Check the config can back a cache
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: CacheConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Whether `requests` lands on a reporting boundary
    pub(crate) fn is_report_point(&self, requests: u64) -> bool {
        self.report_interval != 0 && requests % self.report_interval == 0
    }
}
