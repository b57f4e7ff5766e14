//! Error types for loading feeds and configuration
//!
//! The filter engine itself never fails: unknown values simply match nothing.
//! Everything in here belongs to the edges of the crate, where a feed file or
//! a configuration file is read and turned into typed records.

use thiserror::Error;

/// Errors raised while reading feeds, configuration, or serialising views
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Feed rows could not be decoded
    #[error("Feed parse error: {0}")]
    Feed(#[from] csv::Error),

    /// Configuration text is not valid TOML or has the wrong shape
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but holds a value outside its allowed range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// View could not be rendered as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = CoreError::InvalidConfig("tag_depth must be between 1 and 3".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: tag_depth must be between 1 and 3"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
