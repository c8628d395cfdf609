//! rMod SDK - Host Plugin Interface Type Definitions
//!
//! This crate contains the type definitions a plugin needs to talk to the
//! rMod host: opaque host interfaces, the C layout of the plugin information
//! record and the virtual table the host calls through.
//! It has no dependencies and compiles quickly, allowing parallel compilation
//! of dependent crates.
//!
//! # Modules
//!
//! - [`interfaces`] - Opaque host and Direct3D 9 types
//! - [`plugin_info`] - `plugininfo_t` record filled in by the plugin
//! - [`vtable`] - `IPlugin` virtual table layout and host vtable indices
//! - [`color`] - `D3DCOLOR` helpers used by the host console
//! - [`input`] - Win32 key and mouse message constants
//! - [`versions`] - Plugin interface version

pub mod color;
pub mod input;
pub mod interfaces;
pub mod plugin_info;
pub mod versions;
pub mod vtable;

pub use color::{d3dcolor_argb, D3dColor};
pub use interfaces::*;
pub use plugin_info::{PluginInfo, AUTHOR_LEN, NAME_LEN};
pub use versions::HOOK_INTERFACE_VERSION;
pub use vtable::IPluginVtbl;
