//! Tracing subscriber setup.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber with file logging.
///
/// Environment-based filtering (RUST_LOG) applies on top of an INFO
/// default. Logging goes to a file because stdout belongs to the terminal
/// UI. Returns false if setup failed; the app runs unlogged in that case.
pub fn init_global(log_file_path: &Path) -> bool {
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let fmt_layer = fmt::layer().with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .init();
    true
}
