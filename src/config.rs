use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{
    core::{DEFAULT_NAMESPACE_SUFFIX, Settings},
    locales::{DEFAULT_LOCALES, LocaleRegistry},
};

pub const CONFIG_FILE_NAME: &str = ".i18nmergerc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_features_root")]
    pub features_root: String,
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default = "default_namespace_suffix")]
    pub namespace_suffix: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_locales() -> Vec<String> {
    DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect()
}

fn default_features_root() -> String {
    "./src/features".to_string()
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_namespace_suffix() -> String {
    DEFAULT_NAMESPACE_SUFFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: default_locales(),
            features_root: default_features_root(),
            messages_root: default_messages_root(),
            namespace_suffix: default_namespace_suffix(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            bail!("'locales' must list at least one locale");
        }
        if let Some(code) = self.locales.iter().find(|l| l.trim().is_empty()) {
            bail!("Invalid locale in 'locales': \"{}\"", code);
        }

        if self.namespace_suffix.is_empty() {
            bail!("'namespaceSuffix' must not be empty");
        }

        // Namespaces are derived from the segment after the feature root,
        // so the root needs at least one real directory name.
        let has_segment = Path::new(&self.features_root)
            .components()
            .any(|c| matches!(c, Component::Normal(_)));
        if !has_segment {
            bail!(
                "'featuresRoot' must name a directory: \"{}\"",
                self.features_root
            );
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

/// Turn a validated config into pipeline settings.
///
/// Relative paths resolve against `root_dir`.
pub fn resolve_settings(config: &Config, root_dir: &Path) -> Result<Settings> {
    config.validate()?;

    let ignores = config
        .ignores
        .iter()
        .map(|p| Pattern::new(p))
        .collect::<Result<Vec<_>, _>>()?;

    let mut settings = Settings::new(
        resolve_path(root_dir, &config.features_root),
        resolve_path(root_dir, &config.messages_root),
        LocaleRegistry::new(config.locales.iter().cloned()),
    );
    settings.namespace_suffix = config.namespace_suffix.clone();
    settings.ignores = ignores;
    Ok(settings)
}

fn resolve_path(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
