//! Configuration management for adventfs
//!
//! Settings are loaded in layers:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file (default: `config/adventfs.toml`,
//!    overridable via the `ADVENTFS_CONFIG` environment variable)
//! 3. Environment variables (highest priority), pattern
//!    `ADVENTFS__<section>__<key>`, e.g. `ADVENTFS__WORLD__ARCHIVE_PATH`

use std::env;
use std::path::PathBuf;

use config::{Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_ENV_VAR: &str = "ADVENTFS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/adventfs.toml";
const ENV_PREFIX: &str = "ADVENTFS";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// World data configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorldConfig {
    #[serde(default = "default_archive_path")]
    pub archive_path: PathBuf,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Default log filter, overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            archive_path: default_archive_path(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn default_archive_path() -> PathBuf {
    PathBuf::from("worlds/demo.toml")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from all sources (file + environment)
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors if file doesn't exist)
        let _ = dotenvy::dotenv();

        let config_path = env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        Self::load_from_path(config_path)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(config_path: PathBuf) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if config_path.exists() {
            tracing::info!("Loading configuration from: {}", config_path.display());
            builder = builder.add_source(File::from(config_path).required(false));
        } else {
            tracing::warn!(
                "Configuration file not found at {}, using defaults and environment overrides",
                config_path.display()
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let merged = builder.build()?;
        let config = merged.try_deserialize()?;
        Ok(config)
    }
}
