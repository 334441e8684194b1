//! Demonstration of request-scoped translation contexts
//!
//! Two concurrent "requests" each activate their own context and resolve
//! translations through it, without the language appearing in any handler
//! signature. Run with:
//!
//! ```text
//! cargo run -p weft-i18n --example request_scope_demo
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use tracing::info;
use weft_common::init_default_logging;
use weft_i18n::{
    I18nContext, I18nError, I18nResult, I18nService, I18nValidationError, TranslateOptions,
    TranslationValue,
};

/// In-memory service resolving dotted key paths against per-language trees
struct MemoryService {
    translations: HashMap<String, TranslationValue>,
}

impl MemoryService {
    fn new() -> Self {
        let mut translations = HashMap::new();
        translations.insert(
            "en".to_string(),
            json!({
                "greeting": { "hello": "Hello, {name}!" },
                "validation": { "is-not-empty": "must not be empty" }
            }),
        );
        translations.insert(
            "es".to_string(),
            json!({
                "greeting": { "hello": "¡Hola, {name}!" },
                "validation": { "is-not-empty": "no debe estar vacío" }
            }),
        );
        Self { translations }
    }

    fn resolve(&self, key: &str, lang: &str) -> I18nResult<&TranslationValue> {
        let tree = self
            .translations
            .get(lang)
            .ok_or_else(|| I18nError::UnsupportedLanguage {
                lang: lang.to_string(),
            })?;
        let mut node = tree;
        for part in key.split('.') {
            node = node.get(part).ok_or_else(|| I18nError::MessageNotFound {
                key: key.to_string(),
            })?;
        }
        Ok(node)
    }
}

#[async_trait]
impl I18nService for MemoryService {
    fn translate(&self, key: &str, options: TranslateOptions) -> I18nResult<TranslationValue> {
        let lang = options.lang.as_deref().unwrap_or("en");
        let node = self.resolve(key, lang)?;

        // leaf strings get naive {name} interpolation
        if let (TranslationValue::String(template), Some(args)) = (node, options.args.as_ref()) {
            let mut rendered = template.clone();
            for (name, value) in args {
                if let Some(text) = value.as_str() {
                    rendered = rendered.replace(&format!("{{{name}}}"), text);
                }
            }
            return Ok(TranslationValue::String(rendered));
        }
        Ok(node.clone())
    }

    async fn validate(
        &self,
        value: &TranslationValue,
        options: TranslateOptions,
    ) -> I18nResult<Vec<I18nValidationError>> {
        if !value.as_str().is_some_and(str::is_empty) {
            return Ok(Vec::new());
        }
        let message = self
            .translate("validation.is-not-empty", options)?
            .as_str()
            .unwrap_or("must not be empty")
            .to_string();
        Ok(vec![I18nValidationError::new(
            "value",
            "isNotEmpty",
            message,
        )
        .with_value(value.clone())])
    }
}

async fn handle_request(name: &str, lang: &str, service: Arc<dyn I18nService>) -> Result<()> {
    let ctx = Arc::new(I18nContext::new(lang, service));
    info!(request = name, context_id = ctx.id(), "request accepted");

    I18nContext::scope(ctx, async move {
        // simulate downstream work before anything needs a translation
        tokio::time::sleep(Duration::from_millis(10)).await;

        let ctx = I18nContext::current().expect("activated for this request");
        let greeting = ctx.t(
            "greeting.hello",
            TranslateOptions::new().with_arg("name", name),
        )?;
        info!(request = name, lang = ctx.lang(), %greeting, "translated greeting");

        let errors = ctx
            .validate(&TranslationValue::String(String::new()), TranslateOptions::default())
            .await?;
        for error in &errors {
            info!(
                request = name,
                property = %error.property,
                constraints = ?error.constraints,
                "validation failure"
            );
        }
        Ok::<_, anyhow::Error>(())
    })
    .await
}

#[tokio::main]
async fn main() -> Result<()> {
    init_default_logging().map_err(|err| anyhow::anyhow!(err))?;

    let service: Arc<dyn I18nService> = Arc::new(MemoryService::new());

    tokio::try_join!(
        handle_request("alice", "en", Arc::clone(&service)),
        handle_request("benita", "es", Arc::clone(&service)),
    )?;

    // Outside any activated extent the lookup reports absence (with a
    // diagnostic warning) and callers use the service directly.
    assert!(I18nContext::current().is_none());
    info!("no ambient context outside a request, as expected");

    Ok(())
}
