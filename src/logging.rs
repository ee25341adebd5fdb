//! Logging setup for colstats.
//!
//! Reports go to stdout, so console logs are written to stderr. A daily
//! rolling log file is kept in the platform data directory as well.
//!
//! ```no_run
//! colstats::logging::init(false).expect("Failed to initialize logging");
//!
//! tracing::info!("Analysis started");
//! ```

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Gets the log directory path based on platform conventions
///
/// Returns:
/// - Windows: `%APPDATA%/colstats/logs`
/// - macOS: `~/Library/Application Support/colstats/logs`
/// - Linux: `~/.local/share/colstats/logs`
///
/// # Errors
///
/// Returns error if the platform has no data directory.
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;
    Ok(base_dir.join("colstats").join("logs"))
}

fn file_appender() -> Result<(RollingFileAppender, PathBuf)> {
    let log_dir = get_log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(10)
        .filename_prefix("colstats")
        .filename_suffix("log")
        .build(&log_dir)
        .context("Failed to create file appender")?;
    Ok((appender, log_dir))
}

/// Initializes console logging on stderr plus a rolling log file.
///
/// `RUST_LOG` overrides the level; otherwise it is `info`, or `debug` when
/// `verbose` is set. If the log directory is unavailable, only console
/// logging is installed.
///
/// # Errors
///
/// Returns error if the env filter is invalid or a subscriber is already set.
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, file_error) = match file_appender() {
        Ok((appender, log_dir)) => {
            let layer = fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .with_ansi(false)
                .with_writer(appender);
            (Some((layer, log_dir)), None)
        }
        Err(err) => (None, Some(err)),
    };
    let log_dir = file_layer.as_ref().map(|(_, dir)| dir.clone());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer.map(|(layer, _)| layer))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    match (log_dir, file_error) {
        (Some(dir), _) => tracing::debug!("Logging initialized, log directory: {:?}", dir),
        (None, Some(err)) => tracing::warn!("File logging disabled: {err:#}"),
        (None, None) => {}
    }

    Ok(())
}
