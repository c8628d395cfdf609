//! The example plugin
//!
//! Every callback does something small and visible so the host's plugin
//! plumbing can be checked by hand:
//!
//! - `/test` and `/foo on|off` write to the console
//! - the `L` key and left mouse button clicks are blocked
//! - device lifecycle and reset events are announced

use rmod_core::commands::{CommandResult, CommandTable};
use rmod_core::{
    filter_unblocked, DeviceInterest, DeviceRef, HostHandle, HostServices, InputEvent, Plugin,
    PluginDescriptor, PresentArgs, PresentParams,
};
use rmod_sdk::input::{VK_L, WM_LBUTTONDOWN, WM_LBUTTONUP};
use rmod_sdk::D3dColor;

use crate::config::ExampleConfig;

pub const PLUGIN_AUTHOR: &str = "atom0s";
pub const PLUGIN_NAME: &str = "ExamplePlugin";
pub const PLUGIN_VERSION: f32 = 1.0;

/// Key blocked by the keyboard hook
const BLOCKED_KEY: usize = VK_L;

/// Mouse messages blocked by the mouse hook
const BLOCKED_MOUSE_MESSAGES: [usize; 2] = [WM_LBUTTONDOWN, WM_LBUTTONUP];

/// Write a console line and mirror it to the log
fn announce(host: &dyn HostServices, color: D3dColor, text: &str) {
    tracing::info!("{}", text);
    host.write_console(color, text);
}

pub struct ExamplePlugin {
    /// Set once by `initialize`
    host: Option<HostHandle>,
    plugin_id: u32,
    device: DeviceInterest,
    commands: CommandTable,
    config: ExampleConfig,
}

impl ExamplePlugin {
    pub fn new(config: ExampleConfig) -> Self {
        let commands = Self::build_commands(config.color.to_d3d());
        Self {
            host: None,
            plugin_id: 0,
            device: DeviceInterest::default(),
            commands,
            config,
        }
    }

    /// Descriptor reported to the host
    pub fn descriptor() -> PluginDescriptor {
        PluginDescriptor::new(PLUGIN_AUTHOR, PLUGIN_NAME)
            .with_plugin_version(PLUGIN_VERSION)
            .with_priority(0)
    }

    fn build_commands(color: D3dColor) -> CommandTable {
        let mut commands = CommandTable::new();

        commands.register("/test", "Print a test line", move |_info, host| {
            announce(host, color, "ExamplePlugin handled the /test command!");
            CommandResult::Handled
        });

        // Any sub-argument, or none, still counts as handled
        commands.register("/foo", "Toggle foo: /foo on|off", move |info, host| {
            match info.arg(1) {
                "on" => announce(host, color, "ExamplePlugin handled the /foo on command!"),
                "off" => announce(host, color, "ExamplePlugin handled the /foo off command!"),
                other => tracing::debug!("/foo with unrecognized argument '{}'", other),
            }
            CommandResult::Handled
        });

        commands
    }

    fn print(&self, text: &str) {
        match &self.host {
            Some(host) => announce(host.as_ref(), self.config.color.to_d3d(), text),
            None => tracing::info!("{}", text),
        }
    }

    pub fn plugin_id(&self) -> u32 {
        self.plugin_id
    }

    pub fn is_initialized(&self) -> bool {
        self.host.is_some()
    }

    /// The device, only between device initialize and release
    pub fn device(&self) -> Option<DeviceRef> {
        self.device.device()
    }

    pub fn device_interest(&self) -> DeviceInterest {
        self.device
    }
}

impl Default for ExamplePlugin {
    fn default() -> Self {
        Self::new(ExampleConfig::default())
    }
}

impl Plugin for ExamplePlugin {
    fn info(&self) -> PluginDescriptor {
        Self::descriptor()
    }

    fn initialize(&mut self, host: HostHandle, plugin_id: u32) -> bool {
        if self.host.is_some() {
            tracing::warn!(plugin_id, "{} initialized twice, keeping first host", PLUGIN_NAME);
            return true;
        }

        self.host = Some(host);
        self.plugin_id = plugin_id;
        self.device.register();
        tracing::debug!(plugin_id, "{} initialized", PLUGIN_NAME);

        self.print("ExamplePlugin was loaded");
        true
    }

    fn release(&mut self) {
        self.device.shutdown();
        self.print("ExamplePlugin was unloaded");
    }

    fn handle_command(&mut self, command: &str) -> bool {
        let Some(host) = &self.host else {
            tracing::warn!("Command '{}' received before initialize", command);
            return false;
        };
        self.commands.dispatch(command, host.as_ref()).is_handled()
    }

    fn handle_keyboard(&mut self, event: InputEvent, blocked: bool) -> bool {
        filter_unblocked(blocked, || {
            if event.key_code() == BLOCKED_KEY {
                self.print("ExamplePlugin saw and blocked a key event for the L key!");
                true
            } else {
                false
            }
        })
    }

    fn handle_mouse(&mut self, event: InputEvent, blocked: bool) -> bool {
        filter_unblocked(blocked, || {
            if BLOCKED_MOUSE_MESSAGES.contains(&event.message()) {
                self.print("ExamplePlugin saw and blocked a mouse down or up event!");
                true
            } else {
                false
            }
        })
    }

    // Always true: returning false would opt out of every later device callback.
    fn device_initialize(&mut self, device: Option<DeviceRef>) -> bool {
        match device {
            Some(device) if !self.device.attach(device) => {
                tracing::debug!("Ignoring Direct3D device {:p} after release", device.as_ptr());
                return true;
            }
            Some(device) => tracing::debug!("Direct3D device: {:p}", device.as_ptr()),
            None if self.device == DeviceInterest::Released => return true,
            None => tracing::warn!("Direct3D device initialized with a null device"),
        }

        self.print("ExamplePlugin was told the Direct3D device initialized!");
        true
    }

    fn device_release(&mut self) {
        if let Some(device) = self.device.detach() {
            tracing::debug!("Direct3D device {:p} released", device.as_ptr());
        }
        self.print("ExamplePlugin was told the Direct3D device was released!");
    }

    fn device_pre_reset(&mut self, params: PresentParams) {
        tracing::debug!(null_params = params.is_null(), "Direct3D device pre-reset");
        self.print("ExamplePlugin was told the Direct3D device is about to reset!");
    }

    fn device_post_reset(&mut self, params: PresentParams) {
        tracing::debug!(null_params = params.is_null(), "Direct3D device post-reset");
        self.print("ExamplePlugin was told the Direct3D device has reset!");
    }

    // BeginScene/EndScene run several times per frame; draw in present instead.
    fn begin_scene(&mut self) {}

    fn end_scene(&mut self) {}

    fn pre_present(&mut self, _present: &PresentArgs<'_>) {}

    fn post_present(&mut self, _present: &PresentArgs<'_>) {}
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rmod_core::RecordingHost;
    use rmod_sdk::input::{WM_MOUSEMOVE, WM_RBUTTONDOWN};
    use rmod_sdk::HOOK_INTERFACE_VERSION;

    use super::*;

    fn initialized() -> (ExamplePlugin, Arc<RecordingHost>) {
        let host = Arc::new(RecordingHost::new());
        let mut plugin = ExamplePlugin::default();
        assert!(plugin.initialize(host.clone(), 7));
        host.clear();
        (plugin, host)
    }

    fn key(code: usize) -> InputEvent {
        InputEvent::new(0, code, 0)
    }

    #[test]
    fn test_descriptor_is_stable() {
        let (mut plugin, _host) = initialized();
        let first = plugin.info();

        assert_eq!(first.author, "atom0s");
        assert_eq!(first.name, "ExamplePlugin");
        assert_eq!(first.interface_version, HOOK_INTERFACE_VERSION);
        assert_eq!(first.plugin_version, 1.0);
        assert_eq!(first.priority, 0);

        plugin.handle_command("/test");
        plugin.device_initialize(Some(DeviceRef::dangling()));
        plugin.release();
        assert_eq!(plugin.info(), first);
    }

    #[test]
    fn test_initialize_and_release_log() {
        let host = Arc::new(RecordingHost::new());
        let mut plugin = ExamplePlugin::default();

        assert!(plugin.initialize(host.clone(), 42));
        assert_eq!(plugin.plugin_id(), 42);
        assert!(plugin.is_initialized());
        assert_eq!(plugin.device_interest(), DeviceInterest::InterestedNoDevice);

        plugin.release();
        assert_eq!(
            host.texts(),
            vec!["ExamplePlugin was loaded", "ExamplePlugin was unloaded"]
        );
        assert_eq!(host.lines()[0].color, 0xFFAF_FF00);
        assert_eq!(plugin.device_interest(), DeviceInterest::Released);
    }

    #[test]
    fn test_second_initialize_keeps_first_host() {
        let (mut plugin, host) = initialized();
        let other = Arc::new(RecordingHost::new());

        assert!(plugin.initialize(other.clone(), 99));
        assert_eq!(plugin.plugin_id(), 7);

        plugin.handle_command("/test");
        assert_eq!(host.line_count(), 1);
        assert_eq!(other.line_count(), 0);
    }

    #[test]
    fn test_test_command() {
        let (mut plugin, host) = initialized();

        assert!(plugin.handle_command("/test"));
        assert!(plugin.handle_command("/test with extra args"));
        assert_eq!(host.texts()[0], "ExamplePlugin handled the /test command!");
        assert_eq!(host.line_count(), 2);
    }

    #[test]
    fn test_foo_command() {
        let (mut plugin, host) = initialized();

        assert!(plugin.handle_command("/foo on"));
        assert!(plugin.handle_command("/foo off"));
        assert_eq!(
            host.texts(),
            vec![
                "ExamplePlugin handled the /foo on command!",
                "ExamplePlugin handled the /foo off command!",
            ]
        );

        host.clear();
        assert!(plugin.handle_command("/foo"));
        assert!(plugin.handle_command("/foo maybe"));
        assert!(plugin.handle_command("/foo ON"));
        assert_eq!(host.line_count(), 0);
    }

    #[test]
    fn test_unknown_commands() {
        let (mut plugin, host) = initialized();

        for line in ["", "   ", "/TEST", "/fooo on", "test", "/bar", "on /foo"] {
            assert!(!plugin.handle_command(line), "{:?} should not be handled", line);
        }
        assert_eq!(host.line_count(), 0);
    }

    #[test]
    fn test_command_before_initialize() {
        let mut plugin = ExamplePlugin::default();
        assert!(!plugin.handle_command("/test"));
    }

    #[test]
    fn test_keyboard() {
        let (mut plugin, host) = initialized();

        assert!(plugin.handle_keyboard(key(0x4C), false));
        assert_eq!(
            host.texts(),
            vec!["ExamplePlugin saw and blocked a key event for the L key!"]
        );

        host.clear();
        for code in [0x00, 0x41, 0x4B, 0x4D, 0x6C, 0xFF] {
            assert!(!plugin.handle_keyboard(key(code), false));
        }
        assert_eq!(host.line_count(), 0);
    }

    #[test]
    fn test_mouse() {
        let (mut plugin, host) = initialized();

        assert!(plugin.handle_mouse(key(513), false));
        assert!(plugin.handle_mouse(key(514), false));
        assert_eq!(host.line_count(), 2);

        host.clear();
        for message in [WM_MOUSEMOVE, WM_RBUTTONDOWN, 512, 515, 0] {
            assert!(!plugin.handle_mouse(key(message), false));
        }
        assert_eq!(host.line_count(), 0);
    }

    #[test]
    fn test_already_blocked_passes_through() {
        let (mut plugin, host) = initialized();

        for code in [0x4C, 0x41, 513, 514, 0] {
            assert!(plugin.handle_keyboard(key(code), true));
            assert!(plugin.handle_mouse(key(code), true));
        }
        assert_eq!(host.line_count(), 0);
    }

    #[test]
    fn test_device_lifecycle() {
        let (mut plugin, host) = initialized();
        let device = DeviceRef::dangling();

        assert!(plugin.device_initialize(Some(device)));
        assert_eq!(plugin.device(), Some(device));

        plugin.device_pre_reset(PresentParams::none());
        plugin.device_post_reset(PresentParams::none());
        plugin.device_release();
        assert!(plugin.device().is_none());

        assert_eq!(
            host.texts(),
            vec![
                "ExamplePlugin was told the Direct3D device initialized!",
                "ExamplePlugin was told the Direct3D device is about to reset!",
                "ExamplePlugin was told the Direct3D device has reset!",
                "ExamplePlugin was told the Direct3D device was released!",
            ]
        );
    }

    #[test]
    fn test_frame_hooks_are_silent() {
        let (mut plugin, host) = initialized();
        let device = DeviceRef::dangling();
        plugin.device_initialize(Some(device));
        host.clear();

        let present = PresentArgs::full_frame();
        plugin.begin_scene();
        plugin.end_scene();
        plugin.pre_present(&present);
        plugin.post_present(&present);

        assert_eq!(host.line_count(), 0);
        assert_eq!(
            plugin.device_interest(),
            DeviceInterest::InterestedWithDevice(device)
        );
    }

    #[test]
    fn test_null_device_still_interested() {
        let (mut plugin, host) = initialized();

        assert!(plugin.device_initialize(None));
        assert!(plugin.device().is_none());
        assert_eq!(plugin.device_interest(), DeviceInterest::InterestedNoDevice);
        assert_eq!(
            host.texts(),
            vec!["ExamplePlugin was told the Direct3D device initialized!"]
        );

        // A real device arriving later is still picked up
        let device = DeviceRef::dangling();
        assert!(plugin.device_initialize(Some(device)));
        assert_eq!(plugin.device(), Some(device));
    }

    #[test]
    fn test_device_initialize_after_release() {
        let (mut plugin, host) = initialized();
        plugin.release();
        host.clear();

        assert!(plugin.device_initialize(Some(DeviceRef::dangling())));
        assert!(plugin.device().is_none());
        assert_eq!(plugin.device_interest(), DeviceInterest::Released);
        assert_eq!(host.line_count(), 0);
    }

    #[test]
    fn test_device_reinitialize_is_identical() {
        let (mut plugin, host) = initialized();
        let present = PresentArgs::full_frame();

        let session = |plugin: &mut ExamplePlugin| {
            host.clear();
            assert!(plugin.device_initialize(Some(DeviceRef::dangling())));
            for _ in 0..3 {
                plugin.begin_scene();
                plugin.end_scene();
                plugin.pre_present(&present);
                plugin.post_present(&present);
            }
            plugin.device_release();
            (host.texts(), plugin.device_interest())
        };

        let first = session(&mut plugin);
        let second = session(&mut plugin);

        assert_eq!(first, second);
        assert_eq!(first.0.len(), 2);
        assert_eq!(first.1, DeviceInterest::InterestedNoDevice);
    }

    #[test]
    fn test_custom_color() {
        let mut config = ExampleConfig::default();
        config.color.red = 0;
        config.color.green = 0;

        let host = Arc::new(RecordingHost::new());
        let mut plugin = ExamplePlugin::new(config);
        plugin.initialize(host.clone(), 1);
        plugin.handle_command("/test");

        assert!(host.lines().iter().all(|l| l.color == 0xFF00_0000));
    }
}
