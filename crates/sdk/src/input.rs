//! Win32 input constants seen by the keyboard and mouse hooks
//!
//! The host forwards WH_KEYBOARD and WH_MOUSE hook arguments untouched, so
//! these are the native Win32 values.

/// Virtual key code for the `L` key
pub const VK_L: usize = 0x4C;

/// Left mouse button pressed
pub const WM_LBUTTONDOWN: usize = 0x0201;

/// Left mouse button released
pub const WM_LBUTTONUP: usize = 0x0202;

/// Right mouse button pressed
pub const WM_RBUTTONDOWN: usize = 0x0204;

/// Mouse moved
pub const WM_MOUSEMOVE: usize = 0x0200;
