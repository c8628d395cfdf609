//! rMod Example Plugin
//!
//! Demonstrates every extension point rMod offers a plugin: lifecycle,
//! console commands, keyboard/mouse interception and the Direct3D device
//! and frame hooks. Compiles to a DLL exporting `GetInterfaceVersion`,
//! `CreatePluginInfo` and `CreatePlugin`.

pub mod config;
pub mod ffi;
pub mod logging;
pub mod plugin;

pub use config::ExampleConfig;
pub use plugin::ExamplePlugin;
