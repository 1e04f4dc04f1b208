//! Logging setup.

use crate::config::{ConfigError, LogConfig};

/// Install a `tracing` fmt subscriber at the configured level.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left in place.
pub fn init_logging(config: &LogConfig) -> Result<bool, ConfigError> {
    let level = config.level()?;

    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(%level, "logging initialized");
    }

    Ok(installed)
}
