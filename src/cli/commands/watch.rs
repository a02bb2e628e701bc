use anyhow::{Context, Result};

use super::super::{args::WatchCommand, report};
use super::helper::load_settings;
use super::{CommandResult, CommandSummary, WatchSummary};
use crate::{
    core::{MergeError, Settings},
    watch::{EventOutcome, TranslationState, WatchError, drain_events, spawn_watcher},
};

impl WatchSummary {
    fn record(&mut self, outcome: &EventOutcome) {
        self.events_handled += 1;
        match outcome {
            EventOutcome::Updated { .. } => self.namespaces_updated += 1,
            EventOutcome::Failed { .. } | EventOutcome::SourceError(_) => self.failures += 1,
            EventOutcome::Ignored { .. } => {}
        }
    }
}

pub fn watch(cmd: WatchCommand) -> Result<CommandResult> {
    let mut settings = load_settings(&cmd.common)?;

    if !settings.features_root.is_dir() {
        return Err(MergeError::MissingDirectory(settings.features_root).into());
    }
    // notification paths are absolute, so the namespace marker must be too
    settings.features_root = settings
        .features_root
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", settings.features_root.display()))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(WatchError::Runtime)?;
    let summary = runtime.block_on(run_watcher(settings, cmd.quiet))?;

    Ok(CommandResult::success(CommandSummary::Watch(summary)))
}

async fn run_watcher(settings: Settings, quiet: bool) -> Result<WatchSummary, WatchError> {
    let mut state = TranslationState::initialize(settings)?;
    let (_watcher, mut events) = spawn_watcher(&state.settings().features_root)?;
    report::print_watch_started(&state.settings().features_root);

    let mut summary = WatchSummary::default();
    tokio::select! {
        _ = drain_events(&mut state, &mut events, |outcome| {
            summary.record(outcome);
            report::print_watch_outcome(outcome, quiet);
        }) => {
            tracing::warn!("notification source closed");
        }
        _ = tokio::signal::ctrl_c() => {}
    }

    Ok(summary)
}
