//! Report formatting and printing utilities.
//!
//! Human-readable progress lines for the CLI. Kept apart from the merge
//! engine so i18n-merge can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
    time::Duration,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, WatchSummary};
use crate::{
    core::{CacheStatus, MergeReport},
    watch::EventOutcome,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Warning mark for consistent output formatting.
pub const WARNING_MARK: &str = "\u{26a0}"; // ⚠

/// Set to any value to drop the elapsed-time line (stable test output).
pub const DISABLE_TIMING_ENV: &str = "I18N_MERGE_DISABLE_TIMING";

const PROCESSING_TAG: &str = "[i18n Processing]:";
const WATCHER_TAG: &str = "[Translation Watcher]";

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Merge(report) => {
            print_merge_to(report, timing_enabled(), &mut io::stdout().lock());
            print_cache_warning_to(&report.cache_status, &mut io::stderr().lock());
        }
        CommandSummary::Watch(summary) => print_watch_stopped(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Print a fatal error with its full cause chain.
pub fn print_error(err: &anyhow::Error) {
    eprintln!(
        "{} {} {:#}",
        FAILURE_MARK.red(),
        "[Translation Error]:".bold().red(),
        err
    );
}

fn timing_enabled() -> bool {
    std::env::var_os(DISABLE_TIMING_ENV).is_none()
}

fn print_merge_to<W: Write>(report: &MergeReport, show_timing: bool, writer: &mut W) {
    for locale in &report.written_locales {
        let _ = writeln!(
            writer,
            "{} Saving updated translations for locale: {}",
            PROCESSING_TAG.green(),
            locale
        );
    }

    if !report.has_changes() {
        let _ = writeln!(
            writer,
            "{} No changes detected in any locale, skipping file writes",
            SUCCESS_MARK.green()
        );
    }

    let _ = writeln!(
        writer,
        "{} Total translation files: {}",
        SUCCESS_MARK.green(),
        report.total_files
    );
    let _ = writeln!(
        writer,
        "{} Unchanged files: {}",
        SUCCESS_MARK.green(),
        report.unchanged_files
    );

    if report.updated_namespaces.is_empty() {
        let _ = writeln!(
            writer,
            "{} No changes detected in translation files",
            SUCCESS_MARK.green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} Updated namespaces: {}",
            SUCCESS_MARK.green(),
            report.updated_namespaces.join(", ")
        );
    }

    if show_timing {
        let _ = writeln!(
            writer,
            "{} Finished processing i18n in {}",
            PROCESSING_TAG.green(),
            format_elapsed(report.elapsed)
        );
    }
}

fn print_cache_warning_to<W: Write>(status: &CacheStatus, writer: &mut W) {
    if let CacheStatus::Corrupt(error) = status {
        let _ = writeln!(
            writer,
            "{} Failed to load cache, rebuilding it: {}",
            WARNING_MARK.yellow(),
            error
        );
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_secs_f64() * 1000.0;
    if millis >= 1000.0 {
        format!("{:.3}s", millis / 1000.0)
    } else {
        format!("{:.3}ms", millis)
    }
}

pub fn print_watch_started(root: &Path) {
    println!(
        "{} {} Started watching translation files in {}",
        SUCCESS_MARK.green(),
        WATCHER_TAG.blue(),
        root.display()
    );
}

pub fn print_watch_outcome(outcome: &EventOutcome, quiet: bool) {
    match outcome {
        EventOutcome::Failed { .. } | EventOutcome::SourceError(_) => {
            print_watch_outcome_to(outcome, quiet, &mut io::stderr().lock())
        }
        _ => print_watch_outcome_to(outcome, quiet, &mut io::stdout().lock()),
    }
}

fn print_watch_outcome_to<W: Write>(outcome: &EventOutcome, quiet: bool, writer: &mut W) {
    match outcome {
        EventOutcome::Updated {
            locale,
            namespace,
            action,
        } => {
            if !quiet {
                let _ = writeln!(
                    writer,
                    "{} Updated translations for {} - {} ({})",
                    SUCCESS_MARK.green(),
                    locale,
                    namespace,
                    action.as_str()
                );
            }
        }
        EventOutcome::Ignored { .. } => {}
        EventOutcome::Failed { path, error } => {
            let _ = writeln!(
                writer,
                "{} Error updating translations from {}: {}",
                FAILURE_MARK.red(),
                path.display(),
                error_chain(error)
            );
        }
        EventOutcome::SourceError(error) => {
            let _ = writeln!(writer, "{} Watcher error: {}", FAILURE_MARK.red(), error);
        }
    }
}

fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn print_watch_stopped(summary: &WatchSummary) {
    println!(
        "{} {} Stopped after {} event(s): {} update(s), {} error(s)",
        SUCCESS_MARK.green(),
        WATCHER_TAG.blue(),
        summary.events_handled,
        summary.namespaces_updated,
        summary.failures
    );
}

fn print_init(summary: &InitSummary) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
