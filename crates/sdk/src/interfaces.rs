//! Host and Direct3D 9 type definitions
//!
//! These are opaque types representing C++ objects owned by rMod or by the
//! game. Plugins never look inside them - they only pass pointers around and
//! call virtual methods through their vtables.

use std::ffi::c_void;

use crate::vtable::IPluginVtbl;

/// Opaque type for IHookCore
/// The rMod core object handed to plugins on Initialize
#[repr(C)]
pub struct IHookCore {
    _opaque: [u8; 0],
}

/// Opaque type for IConsole
/// The rMod in-game console
#[repr(C)]
pub struct IConsole {
    _opaque: [u8; 0],
}

/// Opaque type for IDirect3DDevice9
/// The game's rendering device
#[repr(C)]
pub struct IDirect3DDevice9 {
    _opaque: [u8; 0],
}

/// Opaque type for D3DPRESENT_PARAMETERS
/// Present parameters passed through device reset
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct D3DPRESENT_PARAMETERS {
    _opaque: [u8; 0],
}

/// Opaque type for RGNDATA
/// Dirty region passed to Present
#[allow(clippy::upper_case_acronyms)]
#[repr(C)]
pub struct RGNDATA {
    _opaque: [u8; 0],
}

/// Win32 RECT
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Win32 window handle
#[allow(clippy::upper_case_acronyms)]
pub type HWND = *mut c_void;

/// C++ `IPlugin` object as seen by the host
///
/// The host only knows that the first word of a plugin object is a pointer
/// to its virtual table. Plugin implementations embed this as their first
/// field.
#[repr(C)]
pub struct IPlugin {
    pub vtbl: *const IPluginVtbl,
}
