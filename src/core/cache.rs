//! Persisted digests of previously merged fragments.
//!
//! The cache lives next to the bundles as `.translation-cache.json`:
//!
//! ```json
//! { "fr": { "BillingFeature": { "hash": "<sha1 hex>", "content": { ... } } } }
//! ```

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::MergeError;
use crate::locales::LocaleRegistry;

pub const CACHE_FILE_NAME: &str = ".translation-cache.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub hash: String,
    pub content: Value,
}

type LocaleCache = BTreeMap<String, CacheEntry>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationCache {
    locales: BTreeMap<String, LocaleCache>,
}

/// How the cache was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    Loaded,
    /// No cache file yet; every fragment counts as changed.
    Missing,
    /// The cache file could not be read or parsed and was discarded.
    Corrupt(String),
}

#[derive(Debug)]
pub struct CacheLoadResult {
    pub cache: TranslationCache,
    pub status: CacheStatus,
}

impl TranslationCache {
    /// An empty cache with one empty namespace map per locale.
    pub fn empty(locales: &LocaleRegistry) -> Self {
        let mut cache = Self::default();
        cache.ensure_locales(locales);
        cache
    }

    /// Load the cache from `messages_dir`.
    ///
    /// Never fails: a missing or unreadable cache degrades to an empty one.
    pub fn load(messages_dir: &Path, locales: &LocaleRegistry) -> CacheLoadResult {
        let path = messages_dir.join(CACHE_FILE_NAME);
        if !path.exists() {
            return CacheLoadResult {
                cache: Self::empty(locales),
                status: CacheStatus::Missing,
            };
        }

        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_json::from_str::<TranslationCache>(&content).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(mut cache) => {
                cache.ensure_locales(locales);
                CacheLoadResult {
                    cache,
                    status: CacheStatus::Loaded,
                }
            }
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "discarding translation cache");
                CacheLoadResult {
                    cache: Self::empty(locales),
                    status: CacheStatus::Corrupt(error),
                }
            }
        }
    }

    /// Overwrite the cache file in `messages_dir`.
    pub fn save(&self, messages_dir: &Path) -> Result<(), MergeError> {
        let path = messages_dir.join(CACHE_FILE_NAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|source| MergeError::Write { path, source })
    }

    pub fn lookup(&self, locale: &str, namespace: &str) -> Option<&CacheEntry> {
        self.locales.get(locale)?.get(namespace)
    }

    pub fn update(&mut self, locale: &str, namespace: &str, entry: CacheEntry) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(namespace.to_string(), entry);
    }

    pub fn namespaces(&self, locale: &str) -> impl Iterator<Item = &str> {
        self.locales
            .get(locale)
            .into_iter()
            .flat_map(|entries| entries.keys().map(String::as_str))
    }

    fn ensure_locales(&mut self, locales: &LocaleRegistry) {
        for code in locales.codes() {
            self.locales.entry(code.clone()).or_default();
        }
    }
}
