//! Logging initialisation via tracing-subscriber.
//!
//! Levels are validated with [`parse_level`] before [`init`] sees them, so
//! a typo in `[runtime] log_level` or `WORKBRIDGE_LOG_LEVEL` fails startup
//! instead of being read as a target directive that filters everything out.
//! Logs never go to stdout; stdout is reserved for program output.

use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::error::AppError;

/// Initialise the global tracing subscriber.
///
/// If `prefer_level` is `true` (a CLI verbosity flag was given), `level` wins
/// and `RUST_LOG` is ignored. Otherwise `RUST_LOG` wins when it is set and
/// parses, and `level` is the fallback.
pub fn init(level: LevelFilter, prefer_level: bool, log_file: Option<&Path>) -> Result<(), AppError> {
    let filter = build_filter(level, prefer_level);

    let writer = if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                AppError::Logger(format!("failed to open log file '{}': {e}", path.display()))
            })?;
        BoxMakeWriter::new(file)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}

fn build_filter(level: LevelFilter, prefer_level: bool) -> EnvFilter {
    let from_level = || EnvFilter::default().add_directive(level.into());
    if prefer_level {
        from_level()
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| from_level())
    }
}

/// Parse a log level string into a [`LevelFilter`], returning an error on
/// unrecognised values.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
