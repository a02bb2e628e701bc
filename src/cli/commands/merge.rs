use anyhow::Result;

use super::super::args::MergeCommand;
use super::helper::load_settings;
use super::{CommandResult, CommandSummary};
use crate::core::run_merge;

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let settings = load_settings(&cmd.common)?;
    let report = run_merge(&settings)?;
    Ok(CommandResult::success(CommandSummary::Merge(report)))
}
