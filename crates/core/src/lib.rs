//! rMod Rust Plugin - Core Logic
//!
//! This crate contains everything a plugin needs between the raw host
//! boundary and its own behaviour:
//!
//! - [`plugin`] - the [`Plugin`] trait rMod calls into
//! - [`host`] - services the host offers back to a plugin
//! - [`commands`] - console command tokenizing and dispatch
//! - [`input`] - keyboard/mouse hook events
//! - [`device`] - Direct3D device lifecycle tracking
//! - [`config`] - TOML plugin configuration
//!
//! # Re-exports
//!
//! This crate re-exports the SDK and engine crates for convenience:
//! - [`sdk`] - host type definitions and constants
//! - [`engine`] - native host interface wrappers

pub use rmod_engine as engine;
pub use rmod_sdk as sdk;

pub mod commands;
pub mod config;
pub mod descriptor;
pub mod device;
pub mod host;
pub mod input;
pub mod plugin;

// Re-export commonly used items
pub use commands::{command_args, CommandInfo, CommandKey, CommandResult, CommandTable};
pub use config::{ConfigError, ConfigResult, CoreConfig, PluginConfig};
pub use descriptor::{DescriptorError, PluginDescriptor};
pub use device::{DeviceInterest, DeviceRef, PresentArgs, PresentParams};
pub use host::{HostHandle, HostServices, RecordingHost};
pub use input::{filter_unblocked, InputEvent};
pub use plugin::Plugin;
