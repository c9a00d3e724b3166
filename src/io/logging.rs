//! Log subscriber setup for the command-line tool

use crate::io::error::{PaletteError, Result};
use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber on stderr
///
/// `RUST_LOG` takes precedence; otherwise `info` is shown, or only warnings
/// when `quiet` is set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_logging(quiet: bool) -> Result<()> {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| PaletteError::Logging {
            reason: e.to_string(),
        })
}
