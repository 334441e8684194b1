//! Request-scoped internationalization for the Weft framework
//!
//! This crate binds an active language to the task handling a request, job,
//! or cron invocation, without threading it through every call signature.
//! It includes:
//!
//! - A per-request [`I18nContext`] pairing a language tag with the shared
//!   translation service
//! - Task-local activation so any code under a handler can retrieve the
//!   active context, across awaits
//! - The [`I18nTranslator`] capability trait for code that only needs
//!   "something that can translate"
//! - The [`I18nLoader`] contract concrete translation sources implement
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use weft_i18n::{
//!     I18nContext, I18nResult, I18nService, I18nValidationError, TranslateOptions,
//!     TranslationValue,
//! };
//!
//! struct EchoService;
//!
//! #[async_trait]
//! impl I18nService for EchoService {
//!     fn translate(&self, key: &str, options: TranslateOptions) -> I18nResult<TranslationValue> {
//!         let lang = options.lang.as_deref().unwrap_or("en");
//!         Ok(TranslationValue::String(format!("[{lang}] {key}")))
//!     }
//!
//!     async fn validate(
//!         &self,
//!         _value: &TranslationValue,
//!         _options: TranslateOptions,
//!     ) -> I18nResult<Vec<I18nValidationError>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> I18nResult<()> {
//! let ctx = Arc::new(I18nContext::new("es", Arc::new(EchoService)));
//! let greeting = I18nContext::scope(ctx, async {
//!     let ctx = I18nContext::current().expect("activated above");
//!     ctx.translate("greeting.hello", TranslateOptions::default())
//! })
//! .await?;
//! assert_eq!(greeting, TranslationValue::String("[es] greeting.hello".into()));
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod error;
pub mod loader;
pub mod options;
pub mod service;
pub mod translator;
pub mod validation;

pub use context::{I18nContext, I18nContextSource};
pub use error::{I18nError, I18nResult};
pub use loader::{I18nLoader, LoaderOutput, Translations};
pub use options::{TranslateOptions, TranslationValue};
pub use service::I18nService;
pub use translator::I18nTranslator;
pub use validation::I18nValidationError;
