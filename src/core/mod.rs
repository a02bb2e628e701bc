//! Translation merge engine.
//!
//! The batch pipeline runs in four steps:
//!
//! 1. **Discovery** (`discovery`): walk the feature tree for `<locale>.json` fragments
//! 2. **Merge** (`merge`): hash each fragment, compare against the cache, build per-locale trees
//! 3. **Write** (`bundle`): shallow-merge changed namespaces into `messages/<locale>.json`
//! 4. **Persist** (`cache`): save digests and contents for the next run
//!
//! `pipeline::run_merge` wires the steps together. The watch mode in
//! [`crate::watch`] reuses `namespace` and `bundle` but bypasses the cache.

pub mod bundle;
pub mod cache;
pub mod discovery;
mod error;
pub mod hash;
pub mod merge;
pub mod namespace;
pub mod pipeline;
mod settings;

pub use bundle::{KeyAction, LocaleBundle, write_bundles, write_namespace};
pub use cache::{CACHE_FILE_NAME, CacheEntry, CacheLoadResult, CacheStatus, TranslationCache};
pub use discovery::{find_translation_files, is_ignored};
pub use error::MergeError;
pub use hash::{content_digest, file_digest};
pub use merge::{LocaleMessages, MergeOutcome, merge_translations};
pub use namespace::{DEFAULT_NAMESPACE_SUFFIX, NamespaceExtractor};
pub use pipeline::{MergeReport, run_merge};
pub use settings::Settings;
