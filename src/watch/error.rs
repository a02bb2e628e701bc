use std::{io, path::PathBuf};

use thiserror::Error;

use crate::core::MergeError;

/// Errors that stop the watcher before it starts serving events.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Failed to create watcher")]
    WatcherCreation(#[from] notify::Error),

    #[error("Failed to watch path {}", path.display())]
    WatchPath {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("Failed to load existing translations")]
    Initialize(#[from] MergeError),

    #[error("Failed to start async runtime")]
    Runtime(#[source] io::Error),
}
