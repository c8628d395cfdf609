//! FFI boundary with rMod
//!
//! - [`exports`] - the three functions rMod looks up in the plugin DLL
//! - [`object`] - the C++-compatible `IPlugin` object wrapping a Rust plugin

pub mod exports;
pub mod object;

pub use object::PluginObject;
