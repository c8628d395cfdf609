//! Services the host offers to plugins
//!
//! rMod exposes two things a plugin calls back into: the console writer and
//! the command-argument tokenizer. [`HostServices`] abstracts both so the
//! plugin logic runs the same against the real host and against
//! [`RecordingHost`] in tests.

use std::sync::Arc;

use parking_lot::Mutex;

use rmod_engine::NativeHookCore;
use rmod_sdk::D3dColor;

use crate::commands::command_args;

/// Host capabilities available to a plugin after `initialize`
pub trait HostServices: Send + Sync {
    /// Write a colored line to the in-game console
    fn write_console(&self, color: D3dColor, text: &str);

    /// Split a raw command line into arguments (index 0 is the command name)
    fn command_args(&self, raw: &str) -> Vec<String> {
        command_args(raw)
    }
}

/// Shared handle to the host services
///
/// The `Arc` owns the wrapper only; the host object behind it is never
/// owned or freed by the plugin.
pub type HostHandle = Arc<dyn HostServices>;

impl HostServices for NativeHookCore {
    fn write_console(&self, color: D3dColor, text: &str) {
        if let Err(e) = self.console().and_then(|console| console.write(color, text)) {
            tracing::warn!("Console write failed: {}", e);
        }
    }
}

/// A console line captured by [`RecordingHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub color: D3dColor,
    pub text: String,
}

/// In-process host that records console output
///
/// Used to drive plugins without rMod, mainly from tests.
#[derive(Debug, Default)]
pub struct RecordingHost {
    lines: Mutex<Vec<ConsoleLine>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn lines(&self) -> Vec<ConsoleLine> {
        self.lines.lock().clone()
    }

    /// Text of everything written so far
    pub fn texts(&self) -> Vec<String> {
        self.lines.lock().iter().map(|l| l.text.clone()).collect()
    }

    /// Number of lines written so far
    pub fn line_count(&self) -> usize {
        self.lines.lock().len()
    }

    /// Forget recorded output
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl HostServices for RecordingHost {
    fn write_console(&self, color: D3dColor, text: &str) {
        self.lines.lock().push(ConsoleLine {
            color,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_host_captures_lines() {
        let host = RecordingHost::new();
        host.write_console(0xFFFF_FFFF, "one");
        host.write_console(0xFF00_0000, "two");

        assert_eq!(host.line_count(), 2);
        assert_eq!(host.texts(), vec!["one", "two"]);
        assert_eq!(host.lines()[1].color, 0xFF00_0000);

        host.clear();
        assert_eq!(host.line_count(), 0);
    }

    #[test]
    fn test_default_tokenizer() {
        let host = RecordingHost::new();
        assert_eq!(host.command_args("/foo  on"), vec!["/foo", "on"]);
    }
}
