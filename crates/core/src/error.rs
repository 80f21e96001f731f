//! Error types for PolicyQA.
//!
//! This module defines a unified error enum that covers the error categories
//! shared across crates: configuration, I/O, transport, gateway, console
//! and serialization errors.

use thiserror::Error;

/// Unified error type for PolicyQA.
///
/// Functions outside the request lifecycle return `Result<T, AppError>`.
/// Failures inside an ask are folded into the console state instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and terminal errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The outbound HTTP call did not complete
    #[error("Transport error: {0}")]
    Transport(String),

    /// Gateway server errors (bind, serve)
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Console lifecycle errors (failed asks surfaced to the CLI)
    #[error("{0}")]
    Console(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_error_displays_message_verbatim() {
        let err = AppError::Console("Question is required".to_string());
        assert_eq!(err.to_string(), "Question is required");
    }

    #[test]
    fn test_serde_error_conversion() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
