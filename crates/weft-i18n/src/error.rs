//! Error types for internationalization operations

use thiserror::Error;
use weft_common::WeftError;

/// Errors that can occur during internationalization operations
///
/// This layer never produces lookup failures itself; the variants are the
/// currency spoken by [`I18nService`](crate::I18nService) and
/// [`I18nLoader`](crate::I18nLoader) implementations and travel through the
/// context unchanged.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Translation key not present for any candidate language
    #[error("Message not found: {key}")]
    MessageNotFound { key: String },

    /// Requested language is not served by the translation source
    #[error("Unsupported language: {lang}")]
    UnsupportedLanguage { lang: String },

    /// Loader failed to produce translation data
    #[error("Loader error: {message}")]
    Loader {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Translation service failed outside of a key lookup
    #[error("Service error: {message}")]
    Service {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error occurred
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for WeftError {
    fn from(err: I18nError) -> Self {
        let lang = match &err {
            I18nError::UnsupportedLanguage { lang } => Some(lang.clone()),
            _ => None,
        };
        WeftError::Localization {
            message: err.to_string(),
            lang,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_into_the_framework_localization_variant() {
        let err: WeftError = I18nError::UnsupportedLanguage {
            lang: "tlh".to_string(),
        }
        .into();
        match err {
            WeftError::Localization { lang, message, .. } => {
                assert_eq!(lang.as_deref(), Some("tlh"));
                assert!(message.contains("tlh"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn lookup_errors_carry_the_key() {
        let err = I18nError::MessageNotFound {
            key: "errors.not-found".to_string(),
        };
        assert_eq!(err.to_string(), "Message not found: errors.not-found");
    }
}
