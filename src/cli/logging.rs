use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `i18n_merge=debug`.
pub const LOG_ENV: &str = "I18N_MERGE_LOG";

/// Install the diagnostic subscriber. Console reporting is separate (see `report`).
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "i18n_merge=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

    // a second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
