//! Configuration
//!
//! Layered configuration for the CLI: defaults, then an optional config
//! file, then an RCA_*-prefixed environment overlay with `__` as the
//! nested-key separator (e.g. RCA_LOGGING__LEVEL=debug).

use crate::logging::LoggingConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// View defaults used when rendering resolved views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Page size for record-id listings on leaf views.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    20
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RcaConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with precedence: defaults (lowest) -> optional
    /// file -> environment (highest).
    pub fn load(file: Option<&Path>) -> Result<RcaConfig, config::ConfigError> {
        let mut builder: ConfigBuilder<DefaultState> = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }
        builder = builder.add_source(
            Environment::with_prefix("RCA")
                .separator("__")
                .try_parsing(true),
        );
        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = ConfigLoader::load(None).unwrap();
        assert_eq!(config.view.page_size, 20);
        assert!(config.logging.enabled);
    }
}
