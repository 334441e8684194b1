//! Loader contract for translation sources

use std::collections::HashMap;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};

use crate::error::I18nResult;
use crate::options::TranslationValue;

/// Full translation mapping: language tag to nested key tree.
pub type Translations = HashMap<String, TranslationValue>;

/// A loader result that is either a settled value or a push-stream of
/// successive values.
///
/// Sources that can change while the process runs (watched directories,
/// remote configuration) surface every update through the stream variant;
/// one-shot sources settle with a single value.
pub enum LoaderOutput<T> {
    /// One settled value
    Value(T),
    /// Successive values, the latest one authoritative
    Stream(BoxStream<'static, T>),
}

impl<T> LoaderOutput<T> {
    /// True when this output settled with a single value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Map the payload, preserving the value/stream shape.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U + Send + 'static) -> LoaderOutput<U>
    where
        T: 'static,
    {
        match self {
            Self::Value(value) => LoaderOutput::Value(f(value)),
            Self::Stream(updates) => LoaderOutput::Stream(updates.map(f).boxed()),
        }
    }

    /// View both shapes as a stream; a settled value becomes a one-item
    /// stream. Useful for consumers that always want to watch for updates.
    pub fn into_stream(self) -> BoxStream<'static, T>
    where
        T: Send + 'static,
    {
        match self {
            Self::Value(value) => stream::once(async move { value }).boxed(),
            Self::Stream(updates) => updates,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LoaderOutput<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Abstract source of translation data.
///
/// Decouples the translation service from where its data lives and from
/// whether that data can change at runtime. Concrete loaders (filesystem,
/// network, database) live outside this crate.
#[async_trait]
pub trait I18nLoader: Send + Sync {
    /// Language tags this source can serve.
    async fn languages(&self) -> I18nResult<LoaderOutput<Vec<String>>>;

    /// The full translation mapping.
    async fn load(&self) -> I18nResult<LoaderOutput<Translations>>;
}
