use std::path::{Path, PathBuf};

use anyhow::Result;

use super::super::args::CommonArgs;
use crate::{
    config::{CONFIG_FILE_NAME, load_config, resolve_settings},
    core::Settings,
};

/// Build settings with the usual priority: CLI arguments > config file > defaults.
pub fn load_settings(common: &CommonArgs) -> Result<Settings> {
    let root_dir = common.root.clone().unwrap_or_else(|| PathBuf::from("."));

    let loaded = load_config(&root_dir)?;
    if common.verbose && !loaded.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    let mut config = loaded.config;
    if let Some(ref features_root) = common.features_root {
        config.features_root = path_string(features_root);
    }
    if let Some(ref messages_root) = common.messages_root {
        config.messages_root = path_string(messages_root);
    }
    if !common.locales.is_empty() {
        config.locales = common.locales.clone();
    }

    let settings = resolve_settings(&config, &root_dir)?;
    tracing::debug!(
        features_root = %settings.features_root.display(),
        messages_root = %settings.messages_root.display(),
        locales = ?settings.locales.codes(),
        "resolved settings"
    );
    Ok(settings)
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
