//! Logging System
//!
//! Structured logging built on the `tracing` crate. The engine itself only
//! emits events; this module wires up the subscriber for the CLI with
//! configurable level, format, and color.

use crate::error::TreeError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Resolve the effective log level with precedence: CLI flag, RCA_LOG env,
/// config file, default.
pub fn resolve_log_level(cli_level: Option<&str>, config: Option<&LoggingConfig>) -> String {
    if let Some(level) = cli_level {
        if !level.is_empty() {
            return level.to_string();
        }
    }
    if let Ok(level) = std::env::var("RCA_LOG") {
        if !level.is_empty() {
            return level;
        }
    }
    config
        .map(|c| c.level.clone())
        .unwrap_or_else(default_log_level)
}

/// Initialize the logging system.
///
/// Logs go to stderr so CLI output on stdout stays machine-readable.
pub fn init_logging(config: Option<&LoggingConfig>, cli_level: Option<&str>) -> Result<(), TreeError> {
    let disabled = config.map(|c| !c.enabled).unwrap_or(false);
    if disabled {
        Registry::default()
            .with(EnvFilter::new("off"))
            .with(fmt::layer().with_writer(std::io::sink))
            .init();
        return Ok(());
    }

    let level = resolve_log_level(cli_level, config);
    let filter = EnvFilter::try_new(&level)
        .map_err(|e| TreeError::ConfigError(format!("Invalid log level '{}': {}", level, e)))?;
    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base_subscriber = Registry::default().with(filter);
    match format {
        "json" => {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        "text" => {
            base_subscriber
                .with(
                    fmt::layer()
                        .with_ansi(use_color)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        other => {
            return Err(TreeError::ConfigError(format!(
                "Unknown log format '{}', expected 'json' or 'text'",
                other
            )));
        }
    }
    Ok(())
}
