//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A file, so logs do not interfere with the terminal UI.
    File(PathBuf),
    /// Standard error.
    Stderr,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `default_level`. Installing twice is not an error;
/// the first subscriber stays.
pub fn init(default_level: &str, target: LogTarget) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = match target {
        LogTarget::File(path) => {
            let log_file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .try_init()
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    Ok(())
}
