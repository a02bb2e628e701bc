//! Namespace derivation from a fragment's position in the feature tree.
//!
//! `src/features/billing/fr.json` belongs to the `billing` feature, so its
//! messages live under the `BillingFeature` namespace of the `fr` bundle.

use std::{
    ffi::OsStr,
    path::{Component, Path},
};

use super::MergeError;

pub const DEFAULT_NAMESPACE_SUFFIX: &str = "Feature";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceExtractor {
    /// Normal components of the feature-tree root, e.g. `["src", "features"]`.
    marker: Vec<String>,
    suffix: String,
}

impl NamespaceExtractor {
    pub fn new(features_root: &Path, suffix: impl Into<String>) -> Self {
        let marker = normal_components(features_root)
            .map(|c| c.to_string_lossy().into_owned())
            .collect();
        Self {
            marker,
            suffix: suffix.into(),
        }
    }

    /// Derive the namespace for `path`.
    ///
    /// The segment right after the first occurrence of the marker is the
    /// feature name. It must be a directory, so a fragment placed directly
    /// under the feature root has no namespace.
    pub fn extract(&self, path: &Path) -> Result<String, MergeError> {
        let not_found = || MergeError::Namespace(path.to_path_buf());

        if self.marker.is_empty() {
            return Err(not_found());
        }

        let components: Vec<&OsStr> = normal_components(path).collect();
        let width = self.marker.len();

        let start = components
            .windows(width)
            .position(|window| {
                window
                    .iter()
                    .zip(&self.marker)
                    .all(|(component, marker)| *component == OsStr::new(marker))
            })
            .ok_or_else(not_found)?;

        let feature_index = start + width;
        // the feature must be followed by at least the file itself
        if feature_index + 1 >= components.len() {
            return Err(not_found());
        }

        let feature = components[feature_index].to_str().ok_or_else(not_found)?;
        Ok(format!("{}{}", capitalize(feature), self.suffix))
    }
}

fn normal_components(path: &Path) -> impl Iterator<Item = &OsStr> {
    path.components().filter_map(|c| match c {
        Component::Normal(segment) => Some(segment),
        _ => None,
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
