use std::path::{Path, PathBuf};

use notify::{
    Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
    event::{CreateKind, ModifyKind, RenameMode},
};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use super::{EventOutcome, TranslationState, WatchError};

/// A notification forwarded from the watcher thread to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    Changed(PathBuf),
    SourceError(String),
}

/// Start watching `root` recursively.
///
/// The returned watcher must be kept alive for events to keep flowing; the
/// receiver closes once it is dropped.
pub fn spawn_watcher(
    root: &Path,
) -> Result<(RecommendedWatcher, UnboundedReceiver<ChangeEvent>), WatchError> {
    let (tx, rx) = mpsc::unbounded_channel();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            for event in change_events(res) {
                // receiver gone means we are shutting down
                let _ = tx.send(event);
            }
        },
        Config::default(),
    )?;

    watcher
        .watch(root, RecursiveMode::Recursive)
        .map_err(|source| WatchError::WatchPath {
            path: root.to_path_buf(),
            source,
        })?;

    Ok((watcher, rx))
}

/// Handle queued events one at a time until the channel closes.
pub async fn drain_events<F>(
    state: &mut TranslationState,
    events: &mut UnboundedReceiver<ChangeEvent>,
    mut on_outcome: F,
) where
    F: FnMut(&EventOutcome),
{
    while let Some(event) = events.recv().await {
        let outcome = match event {
            ChangeEvent::Changed(path) => state.handle_change(&path),
            ChangeEvent::SourceError(error) => {
                tracing::error!(%error, "watcher error");
                EventOutcome::SourceError(error)
            }
        };
        on_outcome(&outcome);
    }
}

fn change_events(res: notify::Result<Event>) -> Vec<ChangeEvent> {
    match res {
        Ok(event) if is_content_change(&event.kind) => event
            .paths
            .into_iter()
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .map(ChangeEvent::Changed)
            .collect(),
        Ok(_) => Vec::new(),
        Err(err) => vec![ChangeEvent::SourceError(err.to_string())],
    }
}

fn is_content_change(kind: &EventKind) -> bool {
    match kind {
        EventKind::Create(CreateKind::Folder) => false,
        EventKind::Create(_) => true,
        // the old name of a renamed file no longer exists
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => false,
        EventKind::Modify(_) => true,
        _ => false,
    }
}
