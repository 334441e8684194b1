//! Translation service boundary

use async_trait::async_trait;

use crate::error::I18nResult;
use crate::options::{TranslateOptions, TranslationValue};
use crate::validation::I18nValidationError;

/// The shared translation service an [`I18nContext`](crate::I18nContext)
/// delegates to.
///
/// The service owns key resolution, interpolation, and fallback behavior;
/// this crate only routes calls to it with the active language merged into
/// the options. Implementations are shared across every in-flight request
/// and must not rely on exclusive access.
#[async_trait]
pub trait I18nService: Send + Sync {
    /// Resolve `key` to a translation value.
    ///
    /// `options.lang` is always set by the time a context-mediated call
    /// arrives here. Failures (unknown key, unavailable source) are the
    /// implementation's to classify; the context propagates them unchanged.
    fn translate(&self, key: &str, options: TranslateOptions) -> I18nResult<TranslationValue>;

    /// Validate `value`, localizing constraint messages per `options`.
    ///
    /// An empty list means the value passed validation.
    async fn validate(
        &self,
        value: &TranslationValue,
        options: TranslateOptions,
    ) -> I18nResult<Vec<I18nValidationError>>;
}
