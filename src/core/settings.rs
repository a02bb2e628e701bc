use std::path::PathBuf;

use glob::Pattern;

use super::NamespaceExtractor;
use crate::locales::LocaleRegistry;

/// Resolved inputs shared by the batch pipeline and the watcher.
///
/// Built once at startup (see [`crate::config::resolve_settings`]) and passed
/// by reference to every entry point.
#[derive(Debug, Clone)]
pub struct Settings {
    pub features_root: PathBuf,
    pub messages_root: PathBuf,
    pub locales: LocaleRegistry,
    pub namespace_suffix: String,
    /// Paths matching any of these are skipped during discovery.
    pub ignores: Vec<Pattern>,
}

impl Settings {
    pub fn new(
        features_root: impl Into<PathBuf>,
        messages_root: impl Into<PathBuf>,
        locales: LocaleRegistry,
    ) -> Self {
        Self {
            features_root: features_root.into(),
            messages_root: messages_root.into(),
            locales,
            namespace_suffix: super::DEFAULT_NAMESPACE_SUFFIX.to_string(),
            ignores: Vec::new(),
        }
    }

    pub fn extractor(&self) -> NamespaceExtractor {
        NamespaceExtractor::new(&self.features_root, self.namespace_suffix.clone())
    }

    pub fn bundle_path(&self, locale: &str) -> PathBuf {
        super::bundle::bundle_path(&self.messages_root, locale)
    }
}

