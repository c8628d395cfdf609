//! C++-compatible plugin object
//!
//! rMod calls plugins through the `IPlugin` vtable. [`PluginObject`] starts
//! with a pointer to a static [`IPluginVtbl`] whose entries forward to a
//! boxed [`Plugin`]. Panics are caught in every entry so they never unwind
//! into the host.

use std::ffi::{c_char, CStr};
use std::panic::AssertUnwindSafe;
use std::ptr::NonNull;
use std::sync::Arc;

use parking_lot::Mutex;

use rmod_core::{DeviceRef, HostHandle, InputEvent, Plugin, PresentArgs, PresentParams};
use rmod_engine::NativeHookCore;
use rmod_sdk::{
    IDirect3DDevice9, IHookCore, IPlugin, IPluginVtbl, PluginInfo, Rect, D3DPRESENT_PARAMETERS,
    HWND, RGNDATA,
};

/// A Rust plugin laid out as a C++ `IPlugin`
#[repr(C)]
pub struct PluginObject {
    /// Must stay the first field: the host reads the vtable from offset 0
    base: IPlugin,
    plugin: Mutex<Box<dyn Plugin>>,
}

static VTABLE: IPluginVtbl = IPluginVtbl {
    destructor,
    get_plugin_info,
    initialize,
    release,
    handle_command,
    handle_keyboard,
    handle_mouse,
    direct3d_initialize,
    direct3d_release,
    direct3d_pre_reset,
    direct3d_post_reset,
    direct3d_begin_scene,
    direct3d_end_scene,
    direct3d_pre_present,
    direct3d_post_present,
};

impl PluginObject {
    pub fn new(plugin: Box<dyn Plugin>) -> Box<Self> {
        Box::new(Self {
            base: IPlugin { vtbl: &VTABLE },
            plugin: Mutex::new(plugin),
        })
    }

    /// Hand ownership to the host
    ///
    /// The host destroys the object through the vtable destructor.
    pub fn into_raw(self: Box<Self>) -> *mut IPlugin {
        Box::into_raw(self).cast()
    }

    /// # Safety
    /// `this` must be null or a pointer returned by [`PluginObject::into_raw`]
    /// that has not been destroyed.
    unsafe fn from_this<'a>(this: *mut IPlugin) -> Option<&'a PluginObject> {
        (this as *const PluginObject).as_ref()
    }
}

/// Run `f` against the plugin behind `this`, returning `fallback` on a null
/// object or a panic
///
/// # Safety
/// Same contract as [`PluginObject::from_this`].
unsafe fn with_plugin<R>(
    this: *mut IPlugin,
    name: &'static str,
    fallback: R,
    f: impl FnOnce(&mut dyn Plugin) -> R,
) -> R {
    let Some(object) = PluginObject::from_this(this) else {
        tracing::error!("{} called on a null plugin object", name);
        return fallback;
    };

    match std::panic::catch_unwind(AssertUnwindSafe(|| {
        let mut plugin = object.plugin.lock();
        f(&mut **plugin)
    })) {
        Ok(result) => result,
        Err(_) => {
            tracing::error!("Panic in {}", name);
            fallback
        }
    }
}

unsafe extern "C" fn destructor(this: *mut IPlugin, flags: u32) -> *mut IPlugin {
    if this.is_null() {
        return this;
    }

    tracing::debug!("Destroying plugin object {:p}", this);
    let object = this as *mut PluginObject;
    if flags & 1 != 0 {
        drop(Box::from_raw(object));
    } else {
        std::ptr::drop_in_place(object);
    }
    this
}

unsafe extern "C" fn get_plugin_info(this: *mut IPlugin, out: *mut PluginInfo) -> *mut PluginInfo {
    let descriptor = with_plugin(this, "GetPluginInfo", None, |p| Some(p.info()));

    if let (Some(descriptor), Some(info)) = (descriptor, out.as_mut()) {
        *info = PluginInfo::zeroed();
        if let Err(e) = descriptor.write_to(info) {
            tracing::error!("Invalid plugin descriptor: {}", e);
        }
    }
    out
}

unsafe extern "C" fn initialize(
    this: *mut IPlugin,
    hook_core: *mut IHookCore,
    plugin_id: u32,
) -> bool {
    let host: HostHandle = match NativeHookCore::from_raw(hook_core) {
        Ok(core) => Arc::new(core),
        Err(e) => {
            tracing::error!("Initialize rejected: {}", e);
            return false;
        }
    };

    with_plugin(this, "Initialize", false, |p| p.initialize(host, plugin_id))
}

unsafe extern "C" fn release(this: *mut IPlugin) {
    with_plugin(this, "Release", (), |p| p.release())
}

unsafe extern "C" fn handle_command(this: *mut IPlugin, command: *const c_char) -> bool {
    if command.is_null() {
        return false;
    }
    let command = CStr::from_ptr(command).to_string_lossy();

    with_plugin(this, "HandleCommand", false, |p| p.handle_command(&command))
}

unsafe extern "C" fn handle_keyboard(
    this: *mut IPlugin,
    n_code: i32,
    w_param: usize,
    l_param: isize,
    blocked: bool,
) -> bool {
    let event = InputEvent::new(n_code, w_param, l_param);
    with_plugin(this, "HandleKeyboard", blocked, |p| p.handle_keyboard(event, blocked))
}

unsafe extern "C" fn handle_mouse(
    this: *mut IPlugin,
    n_code: i32,
    w_param: usize,
    l_param: isize,
    blocked: bool,
) -> bool {
    let event = InputEvent::new(n_code, w_param, l_param);
    with_plugin(this, "HandleMouse", blocked, |p| p.handle_mouse(event, blocked))
}

unsafe extern "C" fn direct3d_initialize(
    this: *mut IPlugin,
    device: *mut IDirect3DDevice9,
) -> bool {
    let device = DeviceRef::from_raw(device);
    with_plugin(this, "Direct3DInitialize", true, |p| p.device_initialize(device))
}

unsafe extern "C" fn direct3d_release(this: *mut IPlugin) {
    with_plugin(this, "Direct3DRelease", (), |p| p.device_release())
}

unsafe extern "C" fn direct3d_pre_reset(this: *mut IPlugin, params: *mut D3DPRESENT_PARAMETERS) {
    let params = PresentParams::from_raw(params);
    with_plugin(this, "Direct3DPreReset", (), |p| p.device_pre_reset(params))
}

unsafe extern "C" fn direct3d_post_reset(this: *mut IPlugin, params: *mut D3DPRESENT_PARAMETERS) {
    let params = PresentParams::from_raw(params);
    with_plugin(this, "Direct3DPostReset", (), |p| p.device_post_reset(params))
}

unsafe extern "C" fn direct3d_begin_scene(this: *mut IPlugin) {
    with_plugin(this, "Direct3DBeginScene", (), |p| p.begin_scene())
}

unsafe extern "C" fn direct3d_end_scene(this: *mut IPlugin) {
    with_plugin(this, "Direct3DEndScene", (), |p| p.end_scene())
}

/// # Safety
/// Rect pointers must be null or valid for the duration of the call.
unsafe fn present_args<'a>(
    source_rect: *const Rect,
    dest_rect: *const Rect,
    dest_window_override: HWND,
    dirty_region: *const RGNDATA,
) -> PresentArgs<'a> {
    PresentArgs {
        source_rect: source_rect.as_ref(),
        dest_rect: dest_rect.as_ref(),
        dest_window_override,
        dirty_region: NonNull::new(dirty_region as *mut RGNDATA),
    }
}

unsafe extern "C" fn direct3d_pre_present(
    this: *mut IPlugin,
    source_rect: *const Rect,
    dest_rect: *const Rect,
    dest_window_override: HWND,
    dirty_region: *const RGNDATA,
) {
    let present = present_args(source_rect, dest_rect, dest_window_override, dirty_region);
    with_plugin(this, "Direct3DPrePresent", (), |p| p.pre_present(&present))
}

unsafe extern "C" fn direct3d_post_present(
    this: *mut IPlugin,
    source_rect: *const Rect,
    dest_rect: *const Rect,
    dest_window_override: HWND,
    dirty_region: *const RGNDATA,
) {
    let present = present_args(source_rect, dest_rect, dest_window_override, dirty_region);
    with_plugin(this, "Direct3DPostPresent", (), |p| p.post_present(&present))
}
