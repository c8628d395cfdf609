//! rMod Engine - Host Interface Wrappers
//!
//! This crate handles:
//! - Validating the raw host pointers rMod passes to a plugin
//! - Calling into the host's C++ interfaces through their vtables
//!
//! # Architecture
//!
//! rMod hands the plugin an `IHookCore*` during `Initialize`. It is wrapped
//! once in [`NativeHookCore`]; the console is reached on demand through
//! [`NativeHookCore::console`].
//!
//! # Thread Safety
//!
//! The host objects outlive every plugin instance, so the wrappers are plain
//! non-owning pointers that can be copied between the main and render
//! threads.

pub mod error;
pub mod host;

pub use error::HostError;
pub use host::{NativeConsole, NativeHookCore};
