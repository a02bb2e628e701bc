use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::core::{
    KeyAction, LocaleBundle, LocaleMessages, MergeError, NamespaceExtractor, Settings,
    is_ignored, write_namespace,
};

/// Why a change notification was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NotJson,
    /// Matched one of the configured ignore patterns.
    Excluded,
    UnknownLocale,
    NoNamespace,
}

/// Result of handling one event. Handling never fails the watcher.
#[derive(Debug)]
pub enum EventOutcome {
    Updated {
        locale: String,
        namespace: String,
        action: KeyAction,
    },
    Ignored {
        path: PathBuf,
        reason: IgnoreReason,
    },
    Failed {
        path: PathBuf,
        error: MergeError,
    },
    /// The notification source itself reported an error.
    SourceError(String),
}

/// In-memory mirror of every locale bundle, kept for the watcher's lifetime.
#[derive(Debug)]
pub struct TranslationState {
    settings: Settings,
    extractor: NamespaceExtractor,
    current_messages: BTreeMap<String, LocaleMessages>,
}

impl TranslationState {
    /// Load every existing bundle into memory. Missing bundles start empty.
    pub fn initialize(settings: Settings) -> Result<Self, MergeError> {
        let mut current_messages = BTreeMap::new();
        for locale in settings.locales.codes() {
            let bundle = LocaleBundle::open(&settings.messages_root, locale)?;
            current_messages.insert(locale.clone(), bundle.into_namespaces());
        }

        Ok(Self {
            extractor: settings.extractor(),
            settings,
            current_messages,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn messages(&self, locale: &str) -> Option<&LocaleMessages> {
        self.current_messages.get(locale)
    }

    /// Reprocess a single fragment and rewrite its locale bundle.
    ///
    /// The bundle is written even when the content did not change.
    pub fn handle_change(&mut self, path: &Path) -> EventOutcome {
        match self.apply_change(path) {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::error!(path = %path.display(), error = %error, "error updating translations");
                EventOutcome::Failed {
                    path: path.to_path_buf(),
                    error,
                }
            }
        }
    }

    fn apply_change(&mut self, path: &Path) -> Result<EventOutcome, MergeError> {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return Ok(ignored(path, IgnoreReason::NotJson));
        }

        // same patterns discovery skips
        if is_ignored(path, &self.settings.ignores) {
            return Ok(ignored(path, IgnoreReason::Excluded));
        }

        let locale = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|name| self.settings.locales.resolve_prefix(name))
            .map(str::to_string);
        let Some(locale) = locale else {
            return Ok(ignored(path, IgnoreReason::UnknownLocale));
        };

        let Ok(namespace) = self.extractor.extract(path) else {
            tracing::debug!(path = %path.display(), "no namespace for changed file");
            return Ok(ignored(path, IgnoreReason::NoNamespace));
        };

        let raw = fs::read_to_string(path).map_err(|source| MergeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content: Value = serde_json::from_str(&raw)?;

        self.current_messages
            .entry(locale.clone())
            .or_default()
            .insert(namespace.clone(), content.clone());

        let action = write_namespace(&self.settings.messages_root, &locale, &namespace, content)?;
        tracing::debug!(%locale, %namespace, action = action.as_str(), "bundle rewritten");

        Ok(EventOutcome::Updated {
            locale,
            namespace,
            action,
        })
    }
}

fn ignored(path: &Path, reason: IgnoreReason) -> EventOutcome {
    EventOutcome::Ignored {
        path: path.to_path_buf(),
        reason,
    }
}
