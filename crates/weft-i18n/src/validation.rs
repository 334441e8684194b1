//! Validation error shape surfaced by the translation service

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single localized validation failure.
///
/// Mirrors the nested property/constraints shape produced by the framework's
/// validation pipeline: `constraints` maps a constraint name to its localized
/// message, and failures on nested properties hang off `children`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nValidationError {
    /// Property the failure is attached to
    pub property: String,
    /// The offending value, when capturable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Constraint name to localized message
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub constraints: HashMap<String, String>,
    /// Failures on nested properties
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<I18nValidationError>,
}

impl I18nValidationError {
    /// Failure for `property` carrying a single named constraint message
    pub fn new(
        property: impl Into<String>,
        constraint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut constraints = HashMap::new();
        constraints.insert(constraint.into(), message.into());
        Self {
            property: property.into(),
            value: None,
            constraints,
            children: Vec::new(),
        }
    }

    /// Attach the offending value
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Attach a nested failure
    pub fn with_child(mut self, child: I18nValidationError) -> Self {
        self.children.push(child);
        self
    }
}
