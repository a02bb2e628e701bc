//! Incremental updater driven by filesystem notifications.
//!
//! ```text
//! notify callback thread ──ChangeEvent──▶ unbounded channel ──▶ drain_events (single consumer)
//!                                                                   │
//!                                                    TranslationState::handle_change
//!                                                                   │
//!                                                      messages/<locale>.json rewritten
//! ```
//!
//! The channel serializes handling: at most one event is processed at a
//! time, so two changes to the same locale can never race on its bundle.

mod error;
mod events;
mod state;

pub use error::WatchError;
pub use events::{ChangeEvent, drain_events, spawn_watcher};
pub use state::{EventOutcome, IgnoreReason, TranslationState};
