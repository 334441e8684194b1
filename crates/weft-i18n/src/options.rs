//! Lookup options shared by translate and validate calls

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A resolved translation.
///
/// Depending on the shape of the underlying translation data a lookup may
/// resolve to a single string, a nested object, or an array; call sites that
/// cannot know the shape ahead of time treat the value as a plain string.
pub type TranslationValue = Value;

/// Recognized options for a single translate or validate call.
///
/// Only `lang` carries meaning at this layer: an activated
/// [`I18nContext`](crate::I18nContext) fills it in when the caller leaves it
/// unset, and a caller-supplied value always wins. Every other field is
/// passed through to the translation service untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateOptions {
    /// Language to resolve in, overriding the active context's tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Interpolation arguments forwarded to the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Map<String, Value>>,
    /// Value to fall back to when the key is missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Ask the service to emit lookup diagnostics
    pub debug: bool,
}

impl TranslateOptions {
    /// Create an empty options bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lookup language
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Replace the interpolation arguments
    pub fn with_args(mut self, args: Map<String, Value>) -> Self {
        self.args = Some(args);
        self
    }

    /// Add a single interpolation argument
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the fallback value for missing keys
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Toggle service-side lookup diagnostics
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
