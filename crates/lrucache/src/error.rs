//! Error types for lrucache

use thiserror::Error;

/// Result type alias for lrucache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a cache or loading its configuration
#[derive(Debug, Error)]
pub enum Error {
    /// Capacity must be at least one entry
    #[error("invalid capacity: {capacity} (must be greater than 0)")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },

    /// Configuration document could not be parsed
    #[error("invalid cache configuration: {0}")]
    Config(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_capacity_message() {
        let err = Error::InvalidCapacity { capacity: 0 };
        assert_eq!(
            err.to_string(),
            "invalid capacity: 0 (must be greater than 0)"
        );
    }

    #[test]
    fn test_config_error_has_source() {
        let parse_err = toml::from_str::<toml::Value>("capacity = ").unwrap_err();
        let err = Error::from(parse_err);
        assert!(err.to_string().starts_with("invalid cache configuration"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
