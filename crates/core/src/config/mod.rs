//! Configuration system for rMod plugins
//!
//! This module provides a trait-based configuration system that supports:
//! - Type-safe config structs via serde
//! - TOML file format
//! - Auto-generation of default configs
//! - Manual reload capability
//!
//! # Example
//!
//! ```ignore
//! use serde::{Deserialize, Serialize};
//! use rmod_core::PluginConfig;
//!
//! #[derive(Default, Serialize, Deserialize)]
//! pub struct MyPluginConfig {
//!     pub greeting: String,
//! }
//!
//! impl PluginConfig for MyPluginConfig {
//!     const PLUGIN_NAME: &'static str = "my_plugin";
//! }
//!
//! let config = MyPluginConfig::load().unwrap_or_default();
//! ```

mod loader;

use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use loader::{configs_dir, core_config_path, plugin_config_path, rmod_base_dir};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Could not determine config directory from the host location
    #[error("Config directory not available - could not resolve host base path")]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Read a config file, or create it with defaults when missing
fn load_or_create<T>(path: &Path) -> ConfigResult<T>
where
    T: Default + Serialize + DeserializeOwned,
{
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: T = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    } else {
        let default = T::default();
        write_config(&default, path)?;
        tracing::info!("Created default config at {:?}", path);
        Ok(default)
    }
}

/// Write a config file, creating parent directories
fn write_config<T: Serialize>(config: &T, path: &Path) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    tracing::debug!("Saved config to {:?}", path);
    Ok(())
}

/// Trait for plugin configuration types.
///
/// # Requirements
///
/// Your config type must implement:
/// - `Default` - for generating initial config files
/// - `Serialize` - for saving to TOML
/// - `DeserializeOwned` - for loading from TOML
/// - `Send + Sync` - for thread-safe access
///
/// # File Location
///
/// Configs are stored at:
/// `<game dir>/plugins/configs/{PLUGIN_NAME}/{PLUGIN_NAME}.toml`
pub trait PluginConfig: Default + Serialize + DeserializeOwned + Send + Sync {
    /// The plugin name used for config file path resolution.
    const PLUGIN_NAME: &'static str;

    /// Load config from file, creating default if missing.
    fn load() -> ConfigResult<Self> {
        Self::load_from(&plugin_config_path(Self::PLUGIN_NAME)?)
    }

    /// Load config from an explicit path, creating default if missing.
    fn load_from(path: &Path) -> ConfigResult<Self> {
        load_or_create(path)
    }

    /// Save config to file.
    fn save(&self) -> ConfigResult<()> {
        self.save_to(&plugin_config_path(Self::PLUGIN_NAME)?)
    }

    /// Save config to an explicit path.
    fn save_to(&self, path: &Path) -> ConfigResult<()> {
        write_config(self, path)
    }

    /// Reload config from file.
    ///
    /// Updates self with the current file contents.
    fn reload(&mut self) -> ConfigResult<()> {
        let path = plugin_config_path(Self::PLUGIN_NAME)?;
        let content = std::fs::read_to_string(&path)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Reloaded config for {} from {:?}", Self::PLUGIN_NAME, path);
        Ok(())
    }
}

/// Shared framework configuration.
///
/// Controls settings common to every plugin built on this crate, loaded from:
/// `<game dir>/plugins/configs/core.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging
    pub debug: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
        }
    }
}

impl CoreConfig {
    /// Load core config from file, creating default if missing.
    pub fn load() -> ConfigResult<Self> {
        load_or_create(&core_config_path()?)
    }

    /// Save core config to file.
    pub fn save(&self) -> ConfigResult<()> {
        write_config(self, &core_config_path()?)
    }

    /// Default tracing filter directive for this config
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}
