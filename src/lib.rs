//! i18n-merge - translation bundle builder for next-intl projects
//!
//! Feature folders keep their own translation fragments
//! (`src/features/<feature>/<locale>.json`). i18n-merge consolidates them into
//! one bundle per locale (`messages/<locale>.json`), keyed by a namespace
//! derived from the feature name (`billing` → `BillingFeature`).
//!
//! Two modes share the same building blocks:
//!
//! - **merge**: one-shot batch run, skipping unchanged fragments via a content-hash cache
//! - **watch**: long-running incremental updater driven by filesystem notifications
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, console reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Merge engine (discovery, hashing, cache, merge, bundle writing)
//! - `locales`: Supported locale registry
//! - `watch`: Incremental updater

pub mod cli;
pub mod config;
pub mod core;
pub mod locales;
pub mod watch;
