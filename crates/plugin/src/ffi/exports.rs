//! DLL exports looked up by the rMod plugin manager
//!
//! rMod loads the plugin DLL and calls, in order:
//! 1. `GetInterfaceVersion` - stale plugins are rejected here
//! 2. `CreatePluginInfo` - fills a host-owned `plugininfo_t`
//! 3. `CreatePlugin` - returns the `IPlugin` object the host keeps

use rmod_core::{CoreConfig, PluginConfig};
use rmod_sdk::{IPlugin, PluginInfo, HOOK_INTERFACE_VERSION};

use crate::config::ExampleConfig;
use crate::ffi::object::PluginObject;
use crate::logging;
use crate::plugin::{ExamplePlugin, PLUGIN_NAME};

/// Returns the interface version this plugin was compiled against
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn GetInterfaceVersion() -> f64 {
    HOOK_INTERFACE_VERSION
}

/// Fills the plugin information record
///
/// The record belongs to rMod; it is filled in place and never freed here.
///
/// # Safety
/// `info` must be null or point to a writable `plugininfo_t`.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "system" fn CreatePluginInfo(info: *mut PluginInfo) {
    let Some(info) = info.as_mut() else {
        tracing::error!("CreatePluginInfo called with a null record");
        return;
    };

    if let Err(e) = ExamplePlugin::descriptor().write_to(info) {
        tracing::error!("Invalid plugin descriptor: {}", e);
    }
}

/// Creates the plugin instance
///
/// Ownership of the returned object passes to rMod, which destroys it on
/// unload through the object's virtual destructor.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn CreatePlugin() -> *mut IPlugin {
    let core = CoreConfig::load();
    let config = ExampleConfig::load();

    let filter = match (&config, &core) {
        (Ok(config), _) if config.debug => "debug",
        (_, Ok(core)) => core.log_filter(),
        _ => "info",
    };
    logging::init(filter);

    if let Err(e) = &core {
        tracing::warn!("Failed to load core config, using defaults: {}", e);
    }
    let config = config.unwrap_or_else(|e| {
        tracing::warn!("Failed to load {} config, using defaults: {}", PLUGIN_NAME, e);
        ExampleConfig::default()
    });

    tracing::info!("Creating {} instance", PLUGIN_NAME);
    PluginObject::new(Box::new(ExamplePlugin::new(config))).into_raw()
}
