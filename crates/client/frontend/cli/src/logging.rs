//! File logging for the terminal client.
//!
//! The TUI owns stdout, so tracing output only goes to
//! `<log dir>/<session>/client.log`.
use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber. `RUST_LOG` refines the default `info` level.
///
/// Environment variables:
/// - `GEOQUIZ_LOG_DIR` - Log root (default: platform cache dir + `/logs`)
pub fn setup_logging(session_id: &str) -> Result<PathBuf> {
    let session_log_dir = log_directory().join(session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    // The writer must outlive every span; the process exits right after the UI.
    std::mem::forget(guard);

    let log_file = session_log_dir.join("client.log");
    tracing::info!(session = session_id, file = %log_file.display(), "logging initialized");
    Ok(log_file)
}

fn log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os("GEOQUIZ_LOG_DIR") {
        return PathBuf::from(dir);
    }

    directories::ProjectDirs::from("", "", "geoquiz")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("geoquiz").join("logs"))
}
