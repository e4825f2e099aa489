//! Dual-sink logging: compact console output plus a daily-rotating
//! file under the user's home directory, keeping the last 10 files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE_RETENTION: usize = 10;

/// Initialize the global subscriber. The returned guard must be held
/// for the lifetime of the process so the file writer flushes.
pub fn init(debug: bool) -> Result<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level(debug)));

    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("kancli")
        .filename_suffix("log")
        .max_log_files(LOG_FILE_RETENTION)
        .build(&log_dir)
        .context("Failed to initialize rolling log file")?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    tracing::debug!(log_dir = %log_dir.display(), "Logging initialized");
    Ok(guard)
}

fn default_level(debug: bool) -> &'static str {
    if debug { "debug" } else { "error" }
}

fn log_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".kancli")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_follows_debug_flag() {
        assert_eq!(default_level(true), "debug");
        assert_eq!(default_level(false), "error");
    }

    #[test]
    fn test_log_directory_is_under_kancli() {
        let dir = log_directory();
        assert!(dir.ends_with(".kancli/logs"));
    }
}
