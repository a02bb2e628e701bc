use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by the merge engine.
///
/// Batch mode propagates every variant and aborts the run. Watch mode
/// catches them per event and keeps going.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("{} directory does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("No translation files found in {}", .0.display())]
    NoTranslationFiles(PathBuf),

    #[error("Could not determine locale for file: {}", .0.display())]
    UnknownLocale(PathBuf),

    #[error("Could not extract feature from path: {}", .0.display())]
    Namespace(PathBuf),

    #[error("Root of {} must be a JSON object", .0.display())]
    NotAnObject(PathBuf),

    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to scan translation files")]
    Walk(#[from] walkdir::Error),

    /// A per-file failure, wrapping the cause with the offending path.
    #[error("Failed to process file {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<MergeError>,
    },
}

impl MergeError {
    pub(crate) fn in_file(path: impl Into<PathBuf>, source: MergeError) -> Self {
        Self::File {
            path: path.into(),
            source: Box::new(source),
        }
    }
}
