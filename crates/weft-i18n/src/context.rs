//! Request-scoped translation context
//!
//! One [`I18nContext`] is created per unit of work (an incoming request, a
//! job run) and activated around the downstream handler with
//! [`I18nContext::scope`]. Anything executing under that handler, across
//! awaits included, can retrieve it again with [`I18nContext::current`] and
//! translate without the language being threaded through call signatures.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::warn;

use crate::error::I18nResult;
use crate::options::{TranslateOptions, TranslationValue};
use crate::service::I18nService;
use crate::validation::I18nValidationError;

/// Process-wide identity source. Starts at 1, never reused, never reset.
static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

tokio::task_local! {
    /// Context activated for the current task tree, if any.
    static ACTIVE_CONTEXT: Arc<I18nContext>;
}

/// Fallback source for a context stored on an external request handle.
///
/// Execution paths that bypass task-local propagation can stash the context
/// on the request object instead; [`I18nContext::current_or`] consults such a
/// handle after the ambient lookup comes up empty.
pub trait I18nContextSource {
    /// Context previously stored for the current request, if any.
    fn i18n_context(&self) -> Option<Arc<I18nContext>>;
}

/// Per-request translation context.
///
/// Pairs a language tag with the shared translation service. Immutable after
/// construction; cheap to share via `Arc`. The context holds the service, it
/// never owns it: the service outlives every individual context.
pub struct I18nContext {
    id: u64,
    lang: String,
    service: Arc<dyn I18nService>,
}

impl std::fmt::Debug for I18nContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18nContext")
            .field("id", &self.id)
            .field("lang", &self.lang)
            .finish_non_exhaustive()
    }
}

impl I18nContext {
    /// Create a context bound to `lang` and the shared translation service.
    ///
    /// Construction never fails. The language tag is not validated here;
    /// problems with it surface from the service on the first lookup.
    pub fn new(lang: impl Into<String>, service: Arc<dyn I18nService>) -> Self {
        Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            lang: lang.into(),
            service,
        }
    }

    /// Identity assigned at construction, unique within the process.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Language this context resolves translations in by default.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// The shared translation service behind this context.
    pub fn service(&self) -> Arc<dyn I18nService> {
        Arc::clone(&self.service)
    }

    // Caller-supplied fields win; the context only fills in the language.
    fn merge_options(&self, mut options: TranslateOptions) -> TranslateOptions {
        options.lang.get_or_insert_with(|| self.lang.clone());
        options
    }

    /// Resolve `key` through the service, defaulting the lookup language to
    /// this context's tag.
    ///
    /// No caching happens here; every call reaches the service, and service
    /// failures propagate unchanged.
    pub fn translate(&self, key: &str, options: TranslateOptions) -> I18nResult<TranslationValue> {
        self.service.translate(key, self.merge_options(options))
    }

    /// Shorthand for [`translate`](Self::translate).
    pub fn t(&self, key: &str, options: TranslateOptions) -> I18nResult<TranslationValue> {
        self.translate(key, options)
    }

    /// Validate `value` through the service with the same language-defaulting
    /// policy as [`translate`](Self::translate).
    ///
    /// An empty list means the value passed validation.
    pub async fn validate(
        &self,
        value: &TranslationValue,
        options: TranslateOptions,
    ) -> I18nResult<Vec<I18nValidationError>> {
        self.service
            .validate(value, self.merge_options(options))
            .await
    }

    /// Run `f` with `ctx` installed as the ambient context for `f`'s
    /// synchronous extent, restoring the previous one afterwards.
    ///
    /// Nested activations shadow the outer context for their own extent only.
    pub fn sync_scope<T>(ctx: Arc<Self>, f: impl FnOnce() -> T) -> T {
        ACTIVE_CONTEXT.sync_scope(ctx, f)
    }

    /// Run `future` to completion with `ctx` installed as the ambient context
    /// for its whole dynamic extent, awaits included, and return its output.
    ///
    /// Concurrently scoped tasks never observe each other's context. A task
    /// handed to `tokio::spawn` is a new extent: activate the context again
    /// on the spawned future when it needs one.
    pub async fn scope<F: Future>(ctx: Arc<Self>, future: F) -> F::Output {
        ACTIVE_CONTEXT.scope(ctx, future).await
    }

    /// The context activated for the current task, if any.
    ///
    /// Equivalent to [`current_or`](Self::current_or) without a fallback
    /// handle, including the diagnostic warning on absence.
    pub fn current() -> Option<Arc<Self>> {
        Self::current_or(None)
    }

    /// Two-stage context lookup: the ambient task-local slot first, then one
    /// stored on an external request handle.
    ///
    /// Absence is an expected, checkable condition rather than an error. When
    /// neither stage yields a context this logs a single warning and returns
    /// `None`; callers fall back to the translation service directly.
    pub fn current_or(fallback: Option<&dyn I18nContextSource>) -> Option<Arc<Self>> {
        let found = ACTIVE_CONTEXT
            .try_with(Arc::clone)
            .ok()
            .or_else(|| fallback.and_then(|source| source.i18n_context()));
        if found.is_none() {
            warn!(
                "i18n context not found; was this call triggered by a processor \
                 or cronjob? Use the I18nService directly instead"
            );
        }
        found
    }
}
