// Logging - file-backed tracing subscriber
// The terminal belongs to the TUI, so every event goes to the log file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{PanelError, Result};

/// Install the global subscriber. Keep the returned guard alive for the
/// whole run or buffered lines are lost on exit.
pub fn init(log_file: &Path, default_level: &str) -> Result<WorkerGuard> {
    let dir = log_file
        .parent()
        .ok_or_else(|| PanelError::Config(format!("Invalid log path: {}", log_file.display())))?;
    let file_name = log_file
        .file_name()
        .ok_or_else(|| PanelError::Config(format!("Invalid log path: {}", log_file.display())))?;

    std::fs::create_dir_all(dir).map_err(|e| {
        PanelError::Config(format!("Failed to create log directory {}: {}", dir.display(), e))
    })?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(default_level)));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| PanelError::Config(format!("Failed to install log subscriber: {}", e)))?;

    tracing::debug!("Tracing initialized at {}", log_file.display());
    Ok(guard)
}

/// Dependency noise stays at warn; our own crate follows the configured level.
fn default_filter(level: &str) -> String {
    format!("warn,hinglish_control={}", level)
}
