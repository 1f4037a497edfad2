use anyhow::Result;
use std::env;
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::env::logging as env_vars;

/// Logging configuration for the embedder
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: Level,
    /// Whether to use ANSI colors
    pub use_colors: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_colors: true,
        }
    }
}

impl LoggingConfig {
    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    pub fn from_env_with<F>(env_lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level_str) = env_lookup(env_vars::LOG_LEVEL) {
            config.level = parse_level(&level_str).unwrap_or(Level::INFO);
        }

        if env_lookup(env_vars::NO_COLOR).is_some() {
            config.use_colors = false;
        }

        config
    }
}

/// Parse a level name, case-insensitively
pub fn parse_level(level: &str) -> Option<Level> {
    match level.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Initialize logging with the given configuration.
///
/// Logs go to stderr so stdout stays usable in build pipelines.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.use_colors)
        .with_level(true)
        .with_target(false)
        .with_filter(LevelFilter::from_level(config.level));

    Registry::default().with(layer).try_init()?;

    tracing::debug!(level = ?config.level, use_colors = config.use_colors, "Logging initialized");

    Ok(())
}

/// Log performance metrics; failures carry the error category
pub fn log_performance(operation: &str, duration_ms: u64, failure: Option<&str>) {
    match failure {
        None => tracing::debug!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed"
        ),
        Some(category) => tracing::debug!(
            operation = operation,
            duration_ms = duration_ms,
            category = category,
            "Operation failed"
        ),
    }
}
