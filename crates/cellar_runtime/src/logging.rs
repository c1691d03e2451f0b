//! Logging setup.
//!
//! Logs go to stderr so they never interleave with game text on stdout.
//! `RUST_LOG` takes precedence over the verbosity flags.

use cellar_foundation::{Error, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: Verbosity) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity.level_filter().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::internal(format!("logging already initialized: {e}")))?;

    tracing::debug!(?verbosity, "logging initialized");
    Ok(())
}
