//! tracing subscriber setup
//!
//! Resolved paths go to stdout, so log output is written to stderr or to a
//! log file, never to stdout.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Verbosity;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log file path: {0}")]
    InvalidPath(PathBuf),

    #[error("Failed to open log file: {0}")]
    Appender(#[from] InitError),

    #[error("Failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Where and how log lines are written
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub verbosity: Verbosity,
    pub file: Option<PathBuf>,
    pub json: bool,
}

/// `RUST_LOG` if set, otherwise the level implied by the verbosity
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

pub fn init(options: &LogOptions) -> Result<(), LoggingError> {
    let filter = env_filter(options.verbosity);

    match &options.file {
        Some(path) => {
            let appender = file_appender(path)?;
            let (json, plain) = if options.json {
                (Some(fmt::layer().json().with_writer(appender)), None)
            } else {
                (
                    None,
                    Some(fmt::layer().with_ansi(false).with_writer(appender)),
                )
            };
            tracing_subscriber::registry()
                .with(filter)
                .with(json)
                .with(plain)
                .try_init()?;
        }
        None => {
            let (json, plain) = if options.json {
                (Some(fmt::layer().json().with_writer(std::io::stderr)), None)
            } else {
                (
                    None,
                    Some(
                        fmt::layer()
                            .with_target(false)
                            .with_writer(std::io::stderr),
                    ),
                )
            };
            tracing_subscriber::registry()
                .with(filter)
                .with(json)
                .with(plain)
                .try_init()?;
        }
    }

    Ok(())
}

fn file_appender(path: &Path) -> Result<RollingFileAppender, LoggingError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(path.to_path_buf()))?;
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    Ok(RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)?)
}
