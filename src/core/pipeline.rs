use std::time::{Duration, Instant};

use super::{
    CacheStatus, MergeError, Settings, TranslationCache, find_translation_files,
    merge_translations, write_bundles,
};

/// Summary of one batch run.
#[derive(Debug)]
pub struct MergeReport {
    pub total_files: usize,
    pub unchanged_files: usize,
    pub updated_namespaces: Vec<String>,
    pub updated_locales: Vec<String>,
    /// Locales whose bundle file was actually rewritten.
    pub written_locales: Vec<String>,
    pub cache_status: CacheStatus,
    pub elapsed: Duration,
}

impl MergeReport {
    pub fn has_changes(&self) -> bool {
        !self.updated_locales.is_empty()
    }
}

/// Run the batch pipeline: discover, merge, write bundles, persist the cache.
///
/// Any error aborts the run before a single bundle or the cache is touched,
/// unless it happens while writing bundles themselves.
pub fn run_merge(settings: &Settings) -> Result<MergeReport, MergeError> {
    let started = Instant::now();

    if !settings.features_root.is_dir() {
        return Err(MergeError::MissingDirectory(settings.features_root.clone()));
    }

    let files = find_translation_files(
        &settings.features_root,
        &settings.locales,
        &settings.ignores,
    )?;
    if files.is_empty() {
        return Err(MergeError::NoTranslationFiles(
            settings.features_root.clone(),
        ));
    }
    tracing::debug!(count = files.len(), "discovered translation files");

    let loaded = TranslationCache::load(&settings.messages_root, &settings.locales);
    let mut cache = loaded.cache;

    let outcome = merge_translations(
        &files,
        &settings.locales,
        &settings.extractor(),
        &mut cache,
    )?;

    let written_locales = if outcome.has_changes() {
        let written = write_bundles(
            &settings.messages_root,
            &outcome.messages,
            &outcome.updated_locales,
        )?;
        cache.save(&settings.messages_root)?;
        written
    } else {
        Vec::new()
    };

    Ok(MergeReport {
        total_files: outcome.total_files,
        unchanged_files: outcome.unchanged_files,
        updated_namespaces: outcome.updated_namespaces,
        updated_locales: outcome.updated_locales.into_iter().collect(),
        written_locales,
        cache_status: loaded.status,
        elapsed: started.elapsed(),
    })
}
