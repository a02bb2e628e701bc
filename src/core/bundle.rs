use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use super::{LocaleMessages, MergeError};

/// Action taken on a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
}

impl KeyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
        }
    }
}

/// Path of the bundle for `locale`, e.g. `messages/fr.json`.
pub fn bundle_path(messages_dir: &Path, locale: &str) -> PathBuf {
    messages_dir.join(format!("{locale}.json"))
}

/// A locale bundle: namespace → fragment, as stored in `messages/<locale>.json`.
#[derive(Debug, Clone)]
pub struct LocaleBundle {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl LocaleBundle {
    /// Open the bundle for `locale`, or start an empty one if it does not exist yet.
    pub fn open(messages_dir: &Path, locale: &str) -> Result<Self, MergeError> {
        let file_path = bundle_path(messages_dir, locale);
        let data = if file_path.exists() {
            let content = fs::read_to_string(&file_path).map_err(|source| MergeError::Read {
                path: file_path.clone(),
                source,
            })?;
            let value: Value = serde_json::from_str(&content)
                .map_err(|e| MergeError::in_file(&file_path, e.into()))?;
            match value {
                Value::Object(map) => map,
                _ => return Err(MergeError::NotAnObject(file_path)),
            }
        } else {
            Map::new()
        };

        Ok(Self { file_path, data })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn namespaces(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn into_namespaces(self) -> Map<String, Value> {
        self.data
    }

    /// Replace one namespace wholesale.
    ///
    /// Existing namespaces keep their position; new ones are appended.
    pub fn set_namespace(&mut self, namespace: &str, content: Value) -> KeyAction {
        match self.data.get_mut(namespace) {
            Some(existing) => {
                *existing = content;
                KeyAction::Updated
            }
            None => {
                self.data.insert(namespace.to_string(), content);
                KeyAction::Added
            }
        }
    }

    /// Shallow-merge `updates` on top of the bundle.
    pub fn merge_namespaces(&mut self, updates: &LocaleMessages) {
        for (namespace, content) in updates {
            self.set_namespace(namespace, content.clone());
        }
    }

    /// Pretty JSON with 2-space indentation and no trailing newline.
    pub fn serialize(&self) -> Result<String, MergeError> {
        Ok(serde_json::to_string_pretty(&self.data)?)
    }

    /// Write the bundle. The parent directory must already exist.
    pub fn save(&self) -> Result<(), MergeError> {
        let content = self.serialize()?;
        self.write_serialized(&content)
    }

    fn write_serialized(&self, content: &str) -> Result<(), MergeError> {
        fs::write(&self.file_path, content).map_err(|source| MergeError::Write {
            path: self.file_path.clone(),
            source,
        })
    }
}

/// Merge each updated locale's namespaces into its bundle on disk.
///
/// Locales not in `updated_locales` are left untouched. A bundle is only
/// rewritten when its serialized form actually changes. Returns the locales
/// whose files were written.
pub fn write_bundles(
    messages_dir: &Path,
    messages: &BTreeMap<String, LocaleMessages>,
    updated_locales: &BTreeSet<String>,
) -> Result<Vec<String>, MergeError> {
    if !messages_dir.is_dir() {
        return Err(MergeError::MissingDirectory(messages_dir.to_path_buf()));
    }

    let empty = LocaleMessages::new();
    let mut written = Vec::new();

    for locale in updated_locales {
        let mut bundle = LocaleBundle::open(messages_dir, locale)?;
        let before = bundle.serialize()?;

        bundle.merge_namespaces(messages.get(locale).unwrap_or(&empty));
        let after = bundle.serialize()?;

        if before == after {
            tracing::debug!(%locale, "bundle unchanged, skipping write");
            continue;
        }

        bundle.write_serialized(&after)?;
        tracing::debug!(%locale, path = %bundle.path().display(), "bundle written");
        written.push(locale.clone());
    }

    Ok(written)
}

/// Replace a single namespace in `locale`'s bundle and write it unconditionally.
pub fn write_namespace(
    messages_dir: &Path,
    locale: &str,
    namespace: &str,
    content: Value,
) -> Result<KeyAction, MergeError> {
    let mut bundle = LocaleBundle::open(messages_dir, locale)?;
    let action = bundle.set_namespace(namespace, content);
    bundle.save()?;
    Ok(action)
}
