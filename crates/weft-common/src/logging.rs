//! Structured logging infrastructure for Weft

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "weft_i18n=trace")
    pub level: String,
    /// Whether to emit JSON instead of human-readable lines
    pub json_format: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            include_targets: true,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("info"))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_target(config.include_targets);
        registry.with(layer).try_init()?;
    } else {
        let layer = fmt::layer()
            .with_target(config.include_targets);
        registry.with(layer).try_init()?;
    }

    Ok(())
}

/// Initialize logging with default settings, honoring `RUST_LOG` when set
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    init_logging(LoggingConfig {
        level,
        ..LoggingConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_human_readable_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json_format);
        assert!(config.include_targets);
    }
}
