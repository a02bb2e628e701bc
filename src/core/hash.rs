//! Content digests for change detection.
//!
//! SHA-1 hex is used so caches written by earlier tooling stay valid.

use std::{fs, path::Path};

use sha1::{Digest, Sha1};

use super::MergeError;

/// Lowercase hex SHA-1 of `bytes`.
pub fn content_digest(bytes: &[u8]) -> String {
    format!("{:x}", Sha1::digest(bytes))
}

/// Read the whole file and digest it.
pub fn file_digest(path: &Path) -> Result<String, MergeError> {
    let bytes = fs::read(path).map_err(|source| MergeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content_digest(&bytes))
}
