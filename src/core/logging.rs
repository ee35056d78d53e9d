//! Logging Module
//!
//! Tracing-based logging with a daily-rolling JSON file layer (for
//! post-hoc inspection of provider errors the user never sees) and a
//! human-readable stderr layer. Standard `log` macros are bridged into
//! `tracing`, so call sites use `log::` throughout the crate.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize logging. The returned guard must be held for the life of the
/// process so buffered file output is flushed on exit.
pub fn init() -> WorkerGuard {
    // Logs live in the data directory, not the working directory
    let log_dir = dirs::data_dir()
        .map(|d| d.join("elfgen").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "elfgen.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // File layer: JSON for easy parsing
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_target(true)
        .with_filter(env_filter);

    // Stderr layer: compact, keeps stdout clean for the generated name
    let stderr_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .compact()
        .with_filter(stderr_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // Redirect standard `log` macros to `tracing`
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }

    log::debug!("Logging initialized, files under {}", log_dir.display());

    guard
}
