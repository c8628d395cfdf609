//! Plugin interface version
//!
//! The host compares this against its own value to reject plugins built
//! against an older SDK. Do not change it by hand.

/// `HOOK_INTERFACE_VERSION` from the rMod plugin SDK
pub const HOOK_INTERFACE_VERSION: f64 = 1.0;
