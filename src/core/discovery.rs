use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use super::MergeError;
use crate::locales::LocaleRegistry;

/// Recursively collect translation fragments under `root`.
///
/// A fragment is a regular `.json` file whose name contains a known locale
/// code. Siblings are visited in file-name order so the result is stable
/// across runs on an unchanged tree.
pub fn find_translation_files(
    root: &Path,
    locales: &LocaleRegistry,
    ignores: &[Pattern],
) -> Result<Vec<PathBuf>, MergeError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if is_ignored(path, ignores) {
            tracing::debug!(path = %path.display(), "ignored by pattern");
            continue;
        }

        if is_translation_file(path, locales) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Whether `path` matches any configured ignore pattern.
pub fn is_ignored(path: &Path, ignores: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    ignores.iter().any(|p| p.matches(&path_str))
}

fn is_translation_file(path: &Path, locales: &LocaleRegistry) -> bool {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    file_name.ends_with(".json") && locales.matches_file_name(file_name)
}
