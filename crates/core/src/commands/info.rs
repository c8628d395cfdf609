//! Command information types

/// Result of command execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandResult {
    /// Not ours, let other plugins and the host see it
    #[default]
    Continue,
    /// Handled, stop propagation and suppress "unknown command"
    Handled,
}

impl CommandResult {
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

impl From<CommandResult> for bool {
    fn from(result: CommandResult) -> bool {
        result.is_handled()
    }
}

/// Information about a command invocation
#[derive(Debug, Clone)]
pub struct CommandInfo {
    /// Arguments (index 0 is the command name)
    args: Vec<String>,
}

impl CommandInfo {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Get argument by index (0 = command name)
    ///
    /// Returns empty string if index is out of bounds.
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(|s| s.as_str()).unwrap_or("")
    }

    /// Get the command name (alias for arg(0))
    pub fn command_name(&self) -> &str {
        self.arg(0)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}
