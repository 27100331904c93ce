//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "GATEHOUSE_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/gatehouse/logs/` because the terminal
/// itself is owned by the login screen.
/// Log level is controlled by `GATEHOUSE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// GATEHOUSE_LOG=debug cargo run
/// GATEHOUSE_LOG=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "gatehouse.log");

    // Default to info, allow override via GATEHOUSE_LOG
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Gatehouse starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Filter used when `GATEHOUSE_LOG` is unset or invalid
fn default_filter() -> &'static str {
    "gatehouse=info,gatehouse_app=info,gatehouse_tui=info,warn"
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("gatehouse").join("logs")
}
