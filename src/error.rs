//! Error types for newschat
//!
//! This module defines the error types used throughout the crate, using
//! `thiserror` for ergonomic error handling. Failures inside a running
//! conversation are absorbed by the session engine (see `session`);
//! these types cover the fallible plumbing around it: configuration,
//! the HTTP answer client, and the CLI.

use thiserror::Error;

/// Main error type for newschat operations
#[derive(Error, Debug)]
pub enum NewschatError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Answer service errors (unexpected status, malformed payload)
    #[error("Service error: {0}")]
    Service(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for newschat operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = NewschatError::Config("missing base URL".to_string());
        assert_eq!(error.to_string(), "Configuration error: missing base URL");
    }

    #[test]
    fn test_service_error_display() {
        let error = NewschatError::Service("unexpected status 502".to_string());
        assert_eq!(error.to_string(), "Service error: unexpected status 502");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: NewschatError = io_error.into();
        assert!(matches!(error, NewschatError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let error: NewschatError = json_error.into();
        assert!(matches!(error, NewschatError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: NewschatError = yaml_error.into();
        assert!(matches!(error, NewschatError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NewschatError>();
    }
}
