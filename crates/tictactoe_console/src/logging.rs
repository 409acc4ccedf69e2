//! Tracing setup.
//!
//! Logs go to a file so they never interleave with the board on the terminal.

use crate::config::GameConfig;
use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to the configured log file.
///
/// `RUST_LOG` takes precedence over the configured filter. A subscriber that
/// is already installed is left in place.
pub fn init_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            config.log_file().display()
        )
    })?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    if let Err(e) = installed {
        warn!(error = %e, "Tracing subscriber already installed, keeping it");
        return Ok(());
    }

    info!(mode = %config.mode(), "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test in this crate that installs a global subscriber.
    #[test]
    fn test_second_install_keeps_first_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let first_log = dir.path().join("first.log");
        let second_log = dir.path().join("second.log");

        init_tracing(&GameConfig::default().with_overrides(None, Some(first_log.clone())))
            .unwrap();
        init_tracing(&GameConfig::default().with_overrides(None, Some(second_log.clone())))
            .unwrap();

        let first = std::fs::read_to_string(first_log).unwrap();
        assert!(first.contains("Tracing subscriber already installed"));
        assert!(std::fs::read_to_string(second_log).unwrap().is_empty());
    }
}
