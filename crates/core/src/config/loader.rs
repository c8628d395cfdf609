//! Config path resolution
//!
//! Paths are resolved relative to the game executable that rMod is injected
//! into; plugins live in `<game dir>/plugins/`.

use std::path::PathBuf;

use super::{ConfigError, ConfigResult};

/// Returns the directory containing the host process executable.
pub fn rmod_base_dir() -> ConfigResult<PathBuf> {
    let exe = std::env::current_exe().map_err(ConfigError::IoError)?;

    exe.parent()
        .map(PathBuf::from)
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the base configs directory.
///
/// Path: `<game dir>/plugins/configs/`
pub fn configs_dir() -> ConfigResult<PathBuf> {
    Ok(rmod_base_dir()?.join("plugins").join("configs"))
}

/// Returns the path for a plugin's config file.
///
/// Path: `<game dir>/plugins/configs/{plugin_name}/{plugin_name}.toml`
pub fn plugin_config_path(plugin_name: &str) -> ConfigResult<PathBuf> {
    Ok(configs_dir()?
        .join(plugin_name)
        .join(format!("{}.toml", plugin_name)))
}

/// Returns the core framework config path.
///
/// Path: `<game dir>/plugins/configs/core.toml`
pub fn core_config_path() -> ConfigResult<PathBuf> {
    Ok(configs_dir()?.join("core.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_config_path_format() {
        let path = plugin_config_path("my_plugin").unwrap();
        assert!(path.ends_with("plugins/configs/my_plugin/my_plugin.toml"));
    }

    #[test]
    fn test_core_config_path_format() {
        let path = core_config_path().unwrap();
        assert!(path.ends_with("plugins/configs/core.toml"));
    }
}
