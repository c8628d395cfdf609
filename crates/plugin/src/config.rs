//! Plugin configuration structure
//!
//! Location: `<game dir>/plugins/configs/example_plugin/example_plugin.toml`

use serde::{Deserialize, Serialize};

use rmod_core::PluginConfig;
use rmod_sdk::{d3dcolor_argb, D3dColor};

/// Plugin configuration loaded from TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleConfig {
    /// Enable debug logging
    pub debug: bool,

    /// Color of every console line the plugin writes
    pub color: ConsoleColor,
}

/// ARGB color as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleColor {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ConsoleColor {
    pub fn to_d3d(self) -> D3dColor {
        d3dcolor_argb(self.alpha, self.red, self.green, self.blue)
    }
}

impl Default for ConsoleColor {
    fn default() -> Self {
        Self {
            alpha: 255,
            red: 175,
            green: 255,
            blue: 0,
        }
    }
}

impl PluginConfig for ExampleConfig {
    const PLUGIN_NAME: &'static str = "example_plugin";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color() {
        let config = ExampleConfig::default();
        assert!(!config.debug);
        assert_eq!(config.color.to_d3d(), 0xFFAF_FF00);
    }

    #[test]
    fn test_partial_color_table() {
        let config: ExampleConfig = toml::from_str("[color]\nred = 0\n").unwrap();
        assert_eq!(config.color.red, 0);
        assert_eq!(config.color.alpha, 255);
        assert_eq!(config.color.green, 255);
    }

    #[test]
    fn test_serialize() {
        let toml_str = toml::to_string_pretty(&ExampleConfig::default()).unwrap();
        assert!(toml_str.contains("debug = false"));
        assert!(toml_str.contains("alpha = 255"));
    }
}
