//! Tracing setup
//!
//! The TUI owns stdout, so log output only goes to a file.

use anyhow::{Context, Result};
use intake_common::LoggingConfig;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a file-backed subscriber when file logging is enabled.
///
/// The returned guard flushes buffered lines on drop and must be held for
/// the whole session.
pub fn init_tracing(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if !config.log_to_file {
        return Ok(None);
    }
    let Some(log_file) = config.log_file.as_deref() else {
        return Ok(None);
    };

    let path = Path::new(log_file);
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", log_file))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .context("Failed to create tracing filter")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init()
        .context("Failed to initialize tracing")?;

    Ok(Some(guard))
}
