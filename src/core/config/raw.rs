//! Raw TOML deserialization types.
//!
//! These structs mirror the TOML file shape and use `serde` defaults.
//! The `load` module converts them into the public `types` structs.

use serde::Deserialize;

/// Raw TOML shape: serde target before resolution.
///
/// Unknown tables (including `[meta]`) are ignored.
#[derive(Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub runtime: RawRuntime,
}

#[derive(Deserialize)]
pub(super) struct RawRuntime {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Append-mode log file; stderr when absent.
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for RawRuntime {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

pub(super) fn default_log_level() -> String {
    "warn".to_string()
}
