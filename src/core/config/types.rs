//! Public configuration types.
//!
//! Raw TOML deserialization types live in `raw.rs`.

use std::path::PathBuf;

/// Fully-resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Configured log level; CLI verbosity flags may override it at startup.
    pub log_level: String,
    /// Log destination (already `~`-expanded). `None` means stderr.
    pub log_file: Option<PathBuf>,
}
