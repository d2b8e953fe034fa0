use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::model::config::LogConfig;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("invalid log level {level:?}: {source}")]
    InvalidFilter { level: String, source: ParseError },
    #[error("log file path has no file name: {}", path.display())]
    NoFileName { path: PathBuf },
    #[error("could not open log file {}: {source}", path.display())]
    OpenError { path: PathBuf, source: InitError },
    #[error("could not install logger: {0}")]
    Install(Box<dyn std::error::Error + Send + Sync>),
}

/// Build the filter for a level directive such as `info` or `todolist=debug`
pub fn parse_filter(level: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(level).map_err(|source| LogError::InvalidFilter {
        level: level.to_string(),
        source,
    })
}

/// Install the global subscriber writing to the configured file.
///
/// Returns `None` when no file is configured: the terminal belongs to the
/// UI, so there is nowhere else to write. The guard must live until exit
/// or buffered lines are lost.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>, LogError> {
    let Some(path) = config.file.as_deref() else {
        return Ok(None);
    };
    let filter = parse_filter(&config.level)?;
    let appender = file_appender(path)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(LogError::Install)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        level = %config.level,
        "logging started"
    );
    Ok(Some(guard))
}

/// Single appending file, never rotated
fn file_appender(path: &Path) -> Result<RollingFileAppender, LogError> {
    let file_name = path.file_name().ok_or_else(|| LogError::NoFileName {
        path: path.to_path_buf(),
    })?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(|source| LogError::OpenError {
            path: path.to_path_buf(),
            source,
        })
}
