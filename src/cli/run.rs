use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, merge::merge, watch::watch},
};
use anyhow::Result;

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and exit status
/// - `Err` if the command fails (e.g., missing directories, invalid fragment, bad config)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Watch(cmd)) => watch(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
