//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Proxy address could not be parsed or used
    #[error("Invalid proxy URL: {message}")]
    InvalidProxy {
        /// Parser or transport message
        message: String,
    },

    /// Outbound request could not be assembled
    #[error("Failed to create request: {message}")]
    RequestBuild {
        /// Builder message
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// Parser message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<::config::ConfigError> for TranslationError {
    fn from(err: ::config::ConfigError) -> Self {
        TranslationError::ConfigError {
            message: err.to_string(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TranslationError::InvalidProxy {
            message: "relative URL without a base".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid proxy URL: relative URL without a base");

        let err = TranslationError::ConfigError {
            message: "timeout_ms must be greater than 0".to_string(),
        };
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: TranslationError = parse.into();
        assert!(matches!(err, TranslationError::JsonError(_)));
    }
}
