//! File logging bootstrap for the host service.
//!
//! The crate itself only emits `tracing` events; this helper lets the host
//! wire them to a log file with one call. Initialization is best effort:
//! when the log file cannot be opened the subscriber falls back to stderr,
//! and a second call is a no-op rather than an error.

use std::path::Path;
use std::sync::OnceLock;

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize env-filtered logging into `log_dir/wintheme.log`.
///
/// Creates the directory when missing and appends to an existing file.
/// The non-blocking writer's guard is parked for the process lifetime.
pub fn init_file_logging(log_dir: &Path) {
    let _ = std::fs::create_dir_all(log_dir);
    let log_path = log_dir.join("wintheme.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            let installed = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .try_init();
            if installed.is_ok() {
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked on a log file
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .try_init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}
