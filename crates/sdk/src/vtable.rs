//! Virtual table layouts
//!
//! `IPluginVtbl` mirrors the MSVC x64 layout of the host's `IPlugin` class:
//! the scalar deleting destructor first, then every virtual method in
//! declaration order. On x64 the `this` pointer is simply the first
//! argument, so the `C` ABI matches the C++ member call convention.
//!
//! Methods returning a class by value (`GetPluginInfo`) receive a hidden
//! out-pointer right after `this` and return it.

use std::ffi::c_char;

use crate::interfaces::{
    IDirect3DDevice9, IHookCore, IPlugin, Rect, D3DPRESENT_PARAMETERS, HWND, RGNDATA,
};
use crate::plugin_info::PluginInfo;

/// `IPlugin::GetPluginInfo`
pub type GetPluginInfoFn =
    unsafe extern "C" fn(this: *mut IPlugin, out: *mut PluginInfo) -> *mut PluginInfo;

/// `IPlugin::Initialize`
pub type InitializeFn =
    unsafe extern "C" fn(this: *mut IPlugin, hook_core: *mut IHookCore, plugin_id: u32) -> bool;

/// `IPlugin::HandleCommand`
pub type HandleCommandFn = unsafe extern "C" fn(this: *mut IPlugin, command: *const c_char) -> bool;

/// `IPlugin::HandleKeyboard` / `IPlugin::HandleMouse`
pub type HandleInputFn = unsafe extern "C" fn(
    this: *mut IPlugin,
    n_code: i32,
    w_param: usize,
    l_param: isize,
    blocked: bool,
) -> bool;

/// `IPlugin::Direct3DInitialize`
pub type Direct3DInitializeFn =
    unsafe extern "C" fn(this: *mut IPlugin, device: *mut IDirect3DDevice9) -> bool;

/// `IPlugin::Direct3DPreReset` / `IPlugin::Direct3DPostReset`
pub type Direct3DResetFn =
    unsafe extern "C" fn(this: *mut IPlugin, params: *mut D3DPRESENT_PARAMETERS);

/// `IPlugin::Direct3DPrePresent` / `IPlugin::Direct3DPostPresent`
pub type Direct3DPresentFn = unsafe extern "C" fn(
    this: *mut IPlugin,
    source_rect: *const Rect,
    dest_rect: *const Rect,
    dest_window_override: HWND,
    dirty_region: *const RGNDATA,
);

/// Methods taking no arguments and returning nothing
pub type NotifyFn = unsafe extern "C" fn(this: *mut IPlugin);

/// MSVC scalar deleting destructor; bit 0 of `flags` requests deallocation
pub type DestructorFn = unsafe extern "C" fn(this: *mut IPlugin, flags: u32) -> *mut IPlugin;

/// Virtual table of the host's `IPlugin` interface
#[repr(C)]
pub struct IPluginVtbl {
    pub destructor: DestructorFn,
    pub get_plugin_info: GetPluginInfoFn,
    pub initialize: InitializeFn,
    pub release: NotifyFn,
    pub handle_command: HandleCommandFn,
    pub handle_keyboard: HandleInputFn,
    pub handle_mouse: HandleInputFn,
    pub direct3d_initialize: Direct3DInitializeFn,
    pub direct3d_release: NotifyFn,
    pub direct3d_pre_reset: Direct3DResetFn,
    pub direct3d_post_reset: Direct3DResetFn,
    pub direct3d_begin_scene: NotifyFn,
    pub direct3d_end_scene: NotifyFn,
    pub direct3d_pre_present: Direct3DPresentFn,
    pub direct3d_post_present: Direct3DPresentFn,
}

/// Default vtable indices for host interfaces the plugin calls into
pub mod host_indices {
    /// `IHookCore::GetConsole`
    pub const HOOK_CORE_GET_CONSOLE: usize = 1;
    /// `IConsole::Write(D3DCOLOR, const char*)`
    pub const CONSOLE_WRITE: usize = 0;
}
