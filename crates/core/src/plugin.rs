//! The plugin capability interface
//!
//! rMod drives every loaded plugin through the same set of callbacks. This
//! trait lists them all; the FFI layer translates the host's virtual calls
//! into calls on a `Box<dyn Plugin>`.
//!
//! # Callback order
//!
//! ```text
//! info → initialize → { handle_* | device_initialize → frame hooks → device_release }* → release
//! ```
//!
//! Console, command and input callbacks arrive on the host's main thread;
//! the device and frame callbacks on the render thread. The host never
//! calls into one plugin instance concurrently.

use crate::descriptor::PluginDescriptor;
use crate::device::{DeviceRef, PresentArgs, PresentParams};
use crate::host::HostHandle;
use crate::input::InputEvent;

/// A plugin rMod can load
pub trait Plugin: Send {
    /// Static information shown in the host's plugin list
    fn info(&self) -> PluginDescriptor;

    /// Called once after the plugin is loaded
    ///
    /// Returning `false` marks the plugin as invalid and it receives no
    /// further callbacks.
    fn initialize(&mut self, host: HostHandle, plugin_id: u32) -> bool;

    /// Called once before the plugin is unloaded
    fn release(&mut self);

    /// Offered every console command line
    ///
    /// Returning `true` stops the command from reaching other plugins and
    /// from being reported as unknown.
    fn handle_command(&mut self, _command: &str) -> bool {
        false
    }

    /// WH_KEYBOARD hook callback
    ///
    /// `blocked` is set when an earlier handler already blocked the event.
    /// Returning `false` never unblocks it.
    fn handle_keyboard(&mut self, _event: InputEvent, blocked: bool) -> bool {
        blocked
    }

    /// WH_MOUSE hook callback, same blocking rules as `handle_keyboard`
    fn handle_mouse(&mut self, _event: InputEvent, blocked: bool) -> bool {
        blocked
    }

    /// The Direct3D device is ready
    ///
    /// `device` is `None` when the host passed a null pointer. Returning
    /// `false` opts out of every later device and frame callback.
    fn device_initialize(&mut self, _device: Option<DeviceRef>) -> bool {
        false
    }

    /// The device is going away, either for unload or for recreation
    fn device_release(&mut self) {}

    /// Just before `IDirect3DDevice9::Reset`
    fn device_pre_reset(&mut self, _params: PresentParams) {}

    /// Just after `IDirect3DDevice9::Reset`
    fn device_post_reset(&mut self, _params: PresentParams) {}

    /// `BeginScene`; called several times per frame by most games
    fn begin_scene(&mut self) {}

    /// `EndScene`
    fn end_scene(&mut self) {}

    /// Just before `Present`; the place for overlay drawing
    fn pre_present(&mut self, _present: &PresentArgs<'_>) {}

    /// Just after `Present`
    fn post_present(&mut self, _present: &PresentArgs<'_>) {}
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::host::RecordingHost;

    struct MinimalPlugin;

    impl Plugin for MinimalPlugin {
        fn info(&self) -> PluginDescriptor {
            PluginDescriptor::new("tester", "Minimal")
        }

        fn initialize(&mut self, _host: HostHandle, _plugin_id: u32) -> bool {
            true
        }

        fn release(&mut self) {}
    }

    #[test]
    fn test_default_callbacks() {
        let mut plugin = MinimalPlugin;
        assert!(plugin.initialize(Arc::new(RecordingHost::new()), 3));

        let event = InputEvent::new(0, 0x41, 0);
        assert!(!plugin.handle_command("/anything"));
        assert!(!plugin.handle_keyboard(event, false));
        assert!(plugin.handle_keyboard(event, true));
        assert!(plugin.handle_mouse(event, true));

        assert!(!plugin.device_initialize(Some(DeviceRef::dangling())));
        assert!(!plugin.device_initialize(None));
        plugin.begin_scene();
        plugin.end_scene();
        plugin.device_release();
        plugin.release();
    }
}
