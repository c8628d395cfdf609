//! Console Command Handling
//!
//! rMod offers every console line to each plugin in priority order. A plugin
//! splits the line into arguments and decides whether it owns the command.
//!
//! # Architecture
//!
//! ```text
//! IPlugin::HandleCommand → HostServices::command_args → CommandTable → callback
//! ```
//!
//! Command names are matched literally and case-sensitively, including any
//! leading `/`.
//!
//! # Example
//!
//! ```ignore
//! use rmod_core::commands::{CommandResult, CommandTable};
//!
//! let mut table = CommandTable::new();
//! table.register("/ping", "Respond with pong", |_info, host| {
//!     host.write_console(0xFFFFFFFF, "Pong!");
//!     CommandResult::Handled
//! });
//! ```

mod args;
mod info;
mod table;

pub use args::command_args;
pub use info::{CommandInfo, CommandResult};
pub use table::{CommandCallback, CommandKey, CommandTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api() {
        let _table = CommandTable::new();
        let _result = CommandResult::Handled;
        let _args = command_args("/test");
    }
}
