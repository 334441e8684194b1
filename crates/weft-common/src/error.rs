//! Error types and utilities for Weft

use thiserror::Error;

/// Result type alias for Weft operations
pub type Result<T> = std::result::Result<T, WeftError>;

/// Main error type for Weft operations
#[derive(Error, Debug)]
pub enum WeftError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internationalization and localization errors
    #[error("Localization error: {message}")]
    Localization {
        message: String,
        lang: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl WeftError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>, lang: Option<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            lang,
            source: None,
        }
    }

    /// Create a new localization error with source
    pub fn localization_with_source(
        msg: impl Into<String>,
        lang: Option<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Localization {
            message: msg.into(),
            lang,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>, field: Option<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localization_error_displays_message() {
        let err = WeftError::localization("missing bundle", Some("es".to_string()));
        assert_eq!(err.to_string(), "Localization error: missing bundle");
    }

    #[test]
    fn validation_error_keeps_field() {
        let err = WeftError::validation("must not be empty", Some("username".to_string()));
        match err {
            WeftError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("username"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = WeftError::from(io);
        assert!(matches!(err, WeftError::Io(_)));
    }
}
