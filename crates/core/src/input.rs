//! Keyboard and mouse hook events
//!
//! rMod installs WH_KEYBOARD and WH_MOUSE hooks and offers every event to
//! each plugin in priority order, together with whether an earlier plugin
//! already blocked it.

/// Arguments of a Win32 hook callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// Hook code (`nCode`)
    pub code: i32,
    /// Virtual key code for keyboard hooks, mouse message for mouse hooks
    pub w_param: usize,
    pub l_param: isize,
}

impl InputEvent {
    pub fn new(code: i32, w_param: usize, l_param: isize) -> Self {
        Self {
            code,
            w_param,
            l_param,
        }
    }

    /// Virtual key code of a keyboard event
    pub fn key_code(&self) -> usize {
        self.w_param
    }

    /// Window message of a mouse event
    pub fn message(&self) -> usize {
        self.w_param
    }

    /// Bit 31 of a keyboard event's lParam: set on key release
    pub fn is_key_up(&self) -> bool {
        (self.l_param as u32) & 0x8000_0000 != 0
    }
}

/// Apply a handler only to events nobody has blocked yet
///
/// A blocked event stays blocked; `handler` is not consulted.
pub fn filter_unblocked(blocked: bool, handler: impl FnOnce() -> bool) -> bool {
    if blocked {
        return true;
    }
    handler()
}
