//! Logging to stderr and to a per-run file in the platform cache directory.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform log directory:
/// - Linux: `~/.cache/skirmish/logs` (or `$XDG_CACHE_HOME/skirmish/logs`)
/// - macOS: `~/Library/Caches/skirmish/logs`
/// - Windows: `%LOCALAPPDATA%\skirmish\cache\logs`
/// - Fallback: `/tmp/skirmish/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "skirmish")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/skirmish"))
        .join("logs")
}

/// Installs the global subscriber. Keep the guard alive until exit so the file
/// writer flushes.
pub fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let run_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let file_name = format!("skirmish_{run_id}.log");

    let file_appender = tracing_appender::rolling::never(&log_dir, &file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}", log_dir.join(&file_name).display());

    Ok(guard)
}
