//! Configuration module for keywordtree.
//!
//! This module provides a configuration system that can load settings
//! from files (TOML, YAML, JSON) and override them with environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::data_structures::keyword_tree::TreeOptions;
use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

pub mod log;
pub mod tree;

pub use log::LogConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "KEYWORDTREE";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for keywordtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeywordTreeConfig {
    /// Options for trees built from this configuration
    pub tree: TreeOptions,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for KeywordTreeConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.tree.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl KeywordTreeConfig {
    /// Renders the configuration as pretty TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}

/// Configuration loader for keywordtree.
///
/// Sources are layered in order: built-in defaults, then the optional file,
/// then environment variables such as `KEYWORDTREE__TREE__MAX_DEPTH`.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(KeywordTreeConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<KeywordTreeConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&KeywordTreeConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };

            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let loaded: KeywordTreeConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        loaded.validate()?;
        tracing::debug!(
            path = ?self.config_path,
            tokenization = ?loaded.tree.tokenization,
            "configuration loaded"
        );

        Ok(loaded)
    }
}

/// Writes the default configuration to `path` as TOML, creating parent
/// directories as needed.
pub fn write_default_config<P: AsRef<Path>>(path: P) -> crate::error::KeywordTreeResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, KeywordTreeConfig::default().to_toml()?)?;
    tracing::info!("Default configuration written to {:?}", path);
    Ok(())
}

/// Global configuration.
static GLOBAL_CONFIG: OnceCell<Arc<KeywordTreeConfig>> = OnceCell::new();

/// Initialize the global configuration.
///
/// Only the first call takes effect.
pub fn init_global_config(config: KeywordTreeConfig) {
    if GLOBAL_CONFIG.set(Arc::new(config)).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration, if one has been installed.
pub fn global_config() -> Option<Arc<KeywordTreeConfig>> {
    GLOBAL_CONFIG.get().cloned()
}
