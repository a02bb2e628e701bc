pub mod helper;
pub mod init;
pub mod merge;
pub mod watch;

use std::path::PathBuf;

use super::exit_status::ExitStatus;
use crate::core::MergeReport;

#[derive(Debug)]
pub enum CommandSummary {
    Merge(MergeReport),
    Watch(WatchSummary),
    Init(InitSummary),
}

#[derive(Debug, Default)]
pub struct WatchSummary {
    pub events_handled: usize,
    pub namespaces_updated: usize,
    pub failures: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            exit_status: ExitStatus::Success,
        }
    }
}
