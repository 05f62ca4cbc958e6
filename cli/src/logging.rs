//! Tracing setup for the `taskline` binary: an `EnvFilter`, a stderr layer
//! and an optional per-process log file.

use std::path::PathBuf;
use std::sync::OnceLock;

use taskline_core::config::{get_taskline_data_dir, LoggingConfig};
use taskline_core::error::{CliError, ConfigError};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Where log files go: the configured directory, else `~/.taskline/logs`,
/// else `<tmp>/taskline` when no home directory is known.
pub fn log_dir(logging: &LoggingConfig) -> PathBuf {
    if let Some(dir) = logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        return PathBuf::from(dir);
    }
    get_taskline_data_dir()
        .map(|d| d.join("logs"))
        .unwrap_or_else(|_| std::env::temp_dir().join("taskline"))
}

/// One file per shell process.
pub fn log_file_name() -> String {
    format!("taskline.{}.log", std::process::id())
}

/// A non-blank `RUST_LOG` value wins over the configured level.
pub fn filter_from(rust_log: Option<&str>, level: &str) -> Result<EnvFilter, ConfigError> {
    let directives = rust_log
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(level);
    EnvFilter::try_new(directives)
        .map_err(|e| ConfigError::Logging(format!("bad filter {directives:?}: {e}")))
}

pub fn init(logging: &LoggingConfig) -> Result<(), CliError> {
    if !logging.enabled {
        return Ok(());
    }
    if !logging.console && !logging.file {
        let reason = "enabled with neither console nor file output".to_string();
        return Err(ConfigError::Logging(reason).into());
    }

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = filter_from(rust_log.as_deref(), &logging.level)?;

    let file_layer = if logging.file {
        let dir = log_dir(logging);
        std::fs::create_dir_all(&dir)?;
        let appender = tracing_appender::rolling::never(&dir, log_file_name());
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
    } else {
        None
    };

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::debug!(file = logging.file, console = logging.console, "tracing ready");
    Ok(())
}
