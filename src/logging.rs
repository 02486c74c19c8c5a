//! File logging for the tray.
//!
//! Nothing is logged unless [`LOG_ENV_VAR`] names a file; writing to the
//! terminal would draw over the UI. `RUST_LOG` sets the filter (default `info`).

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding the log file path.
pub const LOG_ENV_VAR: &str = "DICETRAY_LOG";

/// `{base}.{timestamp}.{pid}`, so parallel runs get separate files.
pub fn log_file_path(base: &str, timestamp: u64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{base}.{timestamp}.{pid}"))
}

pub fn init_tracing() {
    let Ok(base) = std::env::var(LOG_ENV_VAR) else {
        return;
    };
    if base.is_empty() {
        return;
    }

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(&base, timestamp, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {}", path.display(), err);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true),
        )
        .init();
    tracing::info!(path = %path.display(), "logging started");
}
