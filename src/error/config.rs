//! Configuration errors.
//!
//! Any of these aborts startup: the application never runs with a partially
//! valid configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for the expected schema.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A field parsed fine but its value is outside the legal range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            field: "grid.cell_spacing",
            reason: "must be positive, got -1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("grid.cell_spacing"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = ConfigError::Io {
            path: PathBuf::from("/nowhere/config.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/nowhere/config.json"));
    }
}
