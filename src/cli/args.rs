//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `merge`: Merge feature translation fragments into locale bundles (one shot)
//! - `watch`: Keep locale bundles in sync while fragments are edited
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Watch(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `merge` and `watch`.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root: where the config file is searched and relative paths resolve
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Feature tree containing translation fragments (overrides config file)
    #[arg(long)]
    pub features_root: Option<PathBuf>,

    /// Output directory for locale bundles (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Supported locale (overrides config file)
    /// Can be specified multiple times: --locale fr --locale de
    #[arg(long = "locale")]
    pub locales: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct WatchCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Do not print a line for every updated namespace
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge feature translation files into per-locale message bundles
    Merge(MergeCommand),
    /// Watch feature translation files and update bundles on every change
    Watch(WatchCommand),
    /// Initialize a new .i18nmergerc.json configuration file
    Init,
}
