use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use super::{CacheEntry, MergeError, NamespaceExtractor, TranslationCache, content_digest};
use crate::locales::LocaleRegistry;

/// Namespace name → fragment content, in the order namespaces were first seen.
pub type LocaleMessages = Map<String, Value>;

/// Result of merging a set of fragments.
///
/// `messages` always holds the full current state of every processed file,
/// not only the ones that changed.
#[derive(Debug, Default)]
pub struct MergeOutcome {
    pub messages: BTreeMap<String, LocaleMessages>,
    /// Namespaces whose digest differed from the cache, in first-seen order.
    pub updated_namespaces: Vec<String>,
    pub updated_locales: BTreeSet<String>,
    pub total_files: usize,
    pub unchanged_files: usize,
}

impl MergeOutcome {
    pub fn has_changes(&self) -> bool {
        !self.updated_locales.is_empty()
    }
}

/// A parsed fragment with everything needed to decide whether it changed.
struct Fragment {
    locale: String,
    namespace: String,
    hash: String,
    content: Value,
}

/// Merge `files` into per-locale message trees, consulting and updating `cache`.
///
/// Fail-fast: the first file that cannot be processed aborts the merge with
/// [`MergeError::File`]. Nothing is written to disk here.
pub fn merge_translations(
    files: &[PathBuf],
    locales: &LocaleRegistry,
    extractor: &NamespaceExtractor,
    cache: &mut TranslationCache,
) -> Result<MergeOutcome, MergeError> {
    let mut outcome = MergeOutcome {
        messages: locales
            .codes()
            .iter()
            .map(|code| (code.clone(), LocaleMessages::new()))
            .collect(),
        ..Default::default()
    };

    for file in files {
        outcome.total_files += 1;

        let fragment =
            read_fragment(file, locales, extractor).map_err(|e| MergeError::in_file(file, e))?;
        let Fragment {
            locale,
            namespace,
            hash,
            content,
        } = fragment;

        let cached = cache
            .lookup(&locale, &namespace)
            .filter(|entry| entry.hash == hash)
            .map(|entry| entry.content.clone());

        let content = match cached {
            Some(cached) => {
                tracing::debug!(%locale, %namespace, "unchanged");
                outcome.unchanged_files += 1;
                cached
            }
            None => {
                tracing::debug!(%locale, %namespace, %hash, "changed");
                if !outcome.updated_namespaces.contains(&namespace) {
                    outcome.updated_namespaces.push(namespace.clone());
                }
                outcome.updated_locales.insert(locale.clone());
                cache.update(
                    &locale,
                    &namespace,
                    CacheEntry {
                        hash,
                        content: content.clone(),
                    },
                );
                content
            }
        };

        outcome
            .messages
            .entry(locale)
            .or_default()
            .insert(namespace, content);
    }

    Ok(outcome)
}

fn read_fragment(
    path: &Path,
    locales: &LocaleRegistry,
    extractor: &NamespaceExtractor,
) -> Result<Fragment, MergeError> {
    let bytes = fs::read(path).map_err(|source| MergeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content: Value = serde_json::from_slice(&bytes)?;

    let stem = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.replacen(".json", "", 1))
        .unwrap_or_default();
    let locale = locales
        .resolve_exact(&stem)
        .ok_or_else(|| MergeError::UnknownLocale(path.to_path_buf()))?
        .to_string();

    let namespace = extractor.extract(path)?;

    Ok(Fragment {
        locale,
        namespace,
        hash: content_digest(&bytes),
        content,
    })
}
