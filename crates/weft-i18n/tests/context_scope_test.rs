//! Tests for task-scoped context activation and lookup

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing_subscriber::layer::SubscriberExt;
use weft_i18n::{
    I18nContext, I18nContextSource, I18nResult, I18nService, I18nValidationError,
    TranslateOptions, TranslationValue,
};

/// Minimal service echoing the lookup language back into the value
struct EchoService;

#[async_trait]
impl I18nService for EchoService {
    fn translate(&self, key: &str, options: TranslateOptions) -> I18nResult<TranslationValue> {
        let lang = options.lang.as_deref().unwrap_or("?");
        Ok(TranslationValue::String(format!("{lang}:{key}")))
    }

    async fn validate(
        &self,
        _value: &TranslationValue,
        _options: TranslateOptions,
    ) -> I18nResult<Vec<I18nValidationError>> {
        Ok(Vec::new())
    }
}

fn context(lang: &str) -> Arc<I18nContext> {
    Arc::new(I18nContext::new(lang, Arc::new(EchoService)))
}

/// Layer counting WARN events emitted while it is installed
#[derive(Clone, Default)]
struct WarnCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if *event.metadata().level() == tracing::Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn ids_strictly_increase_without_duplicates() {
    let ids: Vec<u64> = (0..16).map(|_| context("en").id()).collect();
    for pair in ids.windows(2) {
        assert!(
            pair[1] > pair[0],
            "ids must strictly increase: {} then {}",
            pair[0],
            pair[1]
        );
    }
    assert!(ids[0] >= 1, "ids start at 1");
}

#[test]
fn sync_scope_installs_and_restores() {
    let ctx = context("en");
    let id = ctx.id();

    let seen = I18nContext::sync_scope(ctx, || {
        I18nContext::current().map(|active| active.id())
    });
    assert_eq!(seen, Some(id));

    assert!(I18nContext::current().is_none());
}

#[tokio::test]
async fn scope_spans_awaits_and_nested_blocks() {
    let ctx = context("es");
    let id = ctx.id();

    I18nContext::scope(ctx, async move {
        assert_eq!(I18nContext::current().map(|c| c.id()), Some(id));

        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(I18nContext::current().map(|c| c.id()), Some(id));

        let nested = async {
            tokio::time::sleep(Duration::from_millis(1)).await;
            I18nContext::current().map(|c| c.id())
        }
        .await;
        assert_eq!(nested, Some(id));
    })
    .await;

    assert!(I18nContext::current().is_none());
}

#[tokio::test]
async fn nested_scopes_shadow_and_restore() {
    let outer = context("en");
    let inner = context("fr");
    let outer_id = outer.id();
    let inner_id = inner.id();

    I18nContext::scope(outer, async move {
        assert_eq!(I18nContext::current().map(|c| c.id()), Some(outer_id));

        I18nContext::scope(inner, async move {
            assert_eq!(I18nContext::current().map(|c| c.id()), Some(inner_id));
        })
        .await;

        // inner activation is gone, the outer one is back
        assert_eq!(I18nContext::current().map(|c| c.id()), Some(outer_id));
    })
    .await;

    assert!(I18nContext::current().is_none());
}

#[tokio::test]
async fn concurrent_tasks_never_observe_each_other() {
    let english = async {
        I18nContext::scope(context("en"), async {
            for _ in 0..10 {
                let active = I18nContext::current().expect("activated");
                assert_eq!(active.lang(), "en");
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
        })
        .await;
    };

    let spanish = async {
        I18nContext::scope(context("es"), async {
            for _ in 0..10 {
                let active = I18nContext::current().expect("activated");
                assert_eq!(active.lang(), "es");
                tokio::time::sleep(Duration::from_millis(3)).await;
            }
        })
        .await;
    };

    tokio::join!(english, spanish);
}

#[tokio::test]
async fn spawned_task_is_a_fresh_extent_until_reactivated() {
    let ctx = context("en");
    let id = ctx.id();

    I18nContext::scope(Arc::clone(&ctx), async move {
        // a spawned task does not inherit the ambient context
        let inherited = tokio::spawn(async { I18nContext::current().map(|c| c.id()) })
            .await
            .unwrap();
        assert_eq!(inherited, None);

        // re-activating on the spawned future carries it over
        let reactivated = tokio::spawn(I18nContext::scope(Arc::clone(&ctx), async move {
            I18nContext::current().map(|c| c.id())
        }))
        .await
        .unwrap();
        assert_eq!(reactivated, Some(id));
    })
    .await;
}

#[test]
fn missing_context_warns_exactly_once_per_lookup() {
    let counter = WarnCounter::default();
    let warns = Arc::clone(&counter.0);
    let subscriber = tracing_subscriber::registry().with(counter);

    tracing::subscriber::with_default(subscriber, || {
        assert!(I18nContext::current().is_none());
        assert_eq!(warns.load(Ordering::SeqCst), 1);

        assert!(I18nContext::current_or(None).is_none());
        assert_eq!(warns.load(Ordering::SeqCst), 2);
    });
}

#[test]
fn fallback_source_suppresses_the_warning() {
    struct StashedContext(Arc<I18nContext>);

    impl I18nContextSource for StashedContext {
        fn i18n_context(&self) -> Option<Arc<I18nContext>> {
            Some(Arc::clone(&self.0))
        }
    }

    let ctx = context("de");
    let stash = StashedContext(Arc::clone(&ctx));

    let counter = WarnCounter::default();
    let warns = Arc::clone(&counter.0);
    let subscriber = tracing_subscriber::registry().with(counter);

    tracing::subscriber::with_default(subscriber, || {
        let found = I18nContext::current_or(Some(&stash)).expect("stashed context");
        assert_eq!(found.id(), ctx.id());
        assert_eq!(warns.load(Ordering::SeqCst), 0);
    });
}

#[test]
fn ambient_context_wins_over_the_fallback() {
    struct StashedContext(Arc<I18nContext>);

    impl I18nContextSource for StashedContext {
        fn i18n_context(&self) -> Option<Arc<I18nContext>> {
            Some(Arc::clone(&self.0))
        }
    }

    let ambient = context("en");
    let stashed = context("es");
    let stash = StashedContext(stashed);

    let found = I18nContext::sync_scope(Arc::clone(&ambient), || {
        I18nContext::current_or(Some(&stash)).expect("ambient context")
    });
    assert_eq!(found.id(), ambient.id());
}
