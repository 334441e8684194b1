//! Translator capability contract

use async_trait::async_trait;

use crate::context::I18nContext;
use crate::error::I18nResult;
use crate::options::{TranslateOptions, TranslationValue};
use crate::validation::I18nValidationError;

/// Minimum surface of "something that can translate".
///
/// Code that only needs translation and validation takes a
/// `&dyn I18nTranslator` instead of the concrete [`I18nContext`], which keeps
/// test doubles and alternative context sources pluggable.
#[async_trait]
pub trait I18nTranslator: Send + Sync {
    /// Resolve `key` with this translator's language policy applied.
    fn translate(&self, key: &str, options: TranslateOptions) -> I18nResult<TranslationValue>;

    /// Shorthand for [`translate`](Self::translate).
    fn t(&self, key: &str, options: TranslateOptions) -> I18nResult<TranslationValue> {
        self.translate(key, options)
    }

    /// Validate `value` with this translator's language policy applied.
    async fn validate(
        &self,
        value: &TranslationValue,
        options: TranslateOptions,
    ) -> I18nResult<Vec<I18nValidationError>>;
}

#[async_trait]
impl I18nTranslator for I18nContext {
    fn translate(&self, key: &str, options: TranslateOptions) -> I18nResult<TranslationValue> {
        I18nContext::translate(self, key, options)
    }

    async fn validate(
        &self,
        value: &TranslationValue,
        options: TranslateOptions,
    ) -> I18nResult<Vec<I18nValidationError>> {
        I18nContext::validate(self, value, options).await
    }
}
