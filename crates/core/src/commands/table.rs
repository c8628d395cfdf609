//! Command table - registration and dispatch

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

use super::info::{CommandInfo, CommandResult};
use crate::host::HostServices;

new_key_type! {
    /// Handle for a registered command
    pub struct CommandKey;
}

/// Type alias for command callback functions
pub type CommandCallback =
    Box<dyn Fn(&CommandInfo, &dyn HostServices) -> CommandResult + Send + Sync>;

/// Registered command information
struct CommandEntry {
    /// Command name as typed, e.g. "/test"
    name: String,
    description: String,
    callback: CommandCallback,
}

/// A plugin's set of console commands
pub struct CommandTable {
    /// Commands indexed by key
    commands: SlotMap<CommandKey, CommandEntry>,

    /// Lookup by exact command name
    by_name: HashMap<String, CommandKey>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self {
            commands: SlotMap::with_key(),
            by_name: HashMap::new(),
        }
    }

    /// Register a command
    ///
    /// Returns `None` if a command with the same name is already registered.
    pub fn register<F>(&mut self, name: &str, description: &str, callback: F) -> Option<CommandKey>
    where
        F: Fn(&CommandInfo, &dyn HostServices) -> CommandResult + Send + Sync + 'static,
    {
        if self.by_name.contains_key(name) {
            tracing::warn!("Command '{}' already registered", name);
            return None;
        }

        let key = self.commands.insert(CommandEntry {
            name: name.to_string(),
            description: description.to_string(),
            callback: Box::new(callback),
        });
        self.by_name.insert(name.to_string(), key);

        tracing::debug!("Registered command: {}", name);
        Some(key)
    }

    /// Unregister a command by key
    pub fn unregister(&mut self, key: CommandKey) -> bool {
        if let Some(entry) = self.commands.remove(key) {
            self.by_name.remove(&entry.name);
            tracing::debug!("Unregistered command: {}", entry.name);
            true
        } else {
            false
        }
    }

    /// Find command by exact name
    pub fn find(&self, name: &str) -> Option<CommandKey> {
        self.by_name.get(name).copied()
    }

    /// Tokenize a raw line with the host tokenizer and run the matching command
    pub fn dispatch(&self, raw: &str, host: &dyn HostServices) -> CommandResult {
        let args = host.command_args(raw);
        if args.is_empty() {
            return CommandResult::Continue;
        }

        let info = CommandInfo::new(args);
        self.execute(&info, host)
    }

    /// Run the command named by `info`, if registered
    pub fn execute(&self, info: &CommandInfo, host: &dyn HostServices) -> CommandResult {
        match self.find(info.command_name()).and_then(|key| self.commands.get(key)) {
            Some(entry) => {
                tracing::debug!("Dispatching command: {}", entry.name);
                (entry.callback)(info, host)
            }
            None => CommandResult::Continue,
        }
    }

    /// Get command description
    pub fn description(&self, key: CommandKey) -> Option<&str> {
        self.commands.get(key).map(|e| e.description.as_str())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}
