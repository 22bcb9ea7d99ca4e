//! Configuration loading with env-var overrides.
//!
//! Reads TOML files, supports `[meta] base = "..."` inheritance chains,
//! and applies `WORKBRIDGE_LOG_LEVEL` and `WORKBRIDGE_LOG_FILE` env overrides.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;

use super::raw::RawConfig;
use super::types::Config;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Deep-merge two TOML values.
/// Tables are merged recursively; the overlay only needs to specify keys that
/// differ from the base. For every other type (string, integer, array, …)
/// the overlay value replaces the base value wholesale.
fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_tbl), toml::Value::Table(overlay_tbl)) => {
            for (key, ov_val) in overlay_tbl {
                let merged = match base_tbl.remove(&key) {
                    Some(base_val) => merge_toml(base_val, ov_val),
                    None => ov_val,
                };
                base_tbl.insert(key, merged);
            }
            toml::Value::Table(base_tbl)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file, follow any `[meta] base = "..."` chain, and return the
/// fully merged `toml::Value`. `visited` holds canonicalized paths already
/// seen in this chain.
fn load_raw_merged(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<toml::Value, AppError> {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical) {
        return Err(AppError::Config(format!(
            "circular base reference detected at: {}",
            path.display()
        )));
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let overlay_val: toml::Value = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    if let Some(base_str) = overlay_val
        .get("meta")
        .and_then(|m| m.get("base"))
        .and_then(|b| b.as_str())
    {
        let base_path = if Path::new(base_str).is_absolute() {
            PathBuf::from(base_str)
        } else {
            path.parent().unwrap_or(Path::new(".")).join(base_str)
        };
        debug!(file = %path.display(), base = %base_path.display(), "following config base");
        let base_val = load_raw_merged(&base_path, visited)?;
        Ok(merge_toml(base_val, overlay_val))
    } else {
        Ok(overlay_val)
    }
}

/// Load config from the given path, or `config/default.toml`, then apply env-var overrides.
/// If no path is given and `config/default.toml` does not exist, built-in defaults are used.
pub fn load(config_path: Option<&str>) -> Result<Config, AppError> {
    let log_level_override = env::var("WORKBRIDGE_LOG_LEVEL").ok();
    let log_file_override = env::var("WORKBRIDGE_LOG_FILE").ok();

    if let Some(path) = config_path {
        return load_from(
            Path::new(path),
            log_level_override.as_deref(),
            log_file_override.as_deref(),
        );
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        load_from(
            default_path,
            log_level_override.as_deref(),
            log_file_override.as_deref(),
        )
    } else {
        Ok(resolve(
            RawConfig::default(),
            log_level_override.as_deref(),
            log_file_override.as_deref(),
        ))
    }
}

/// Internal loader. Accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    log_level_override: Option<&str>,
    log_file_override: Option<&str>,
) -> Result<Config, AppError> {
    let merged_val = load_raw_merged(path, &mut HashSet::new())?;

    let parsed: RawConfig = Deserialize::deserialize(merged_val).map_err(|e: toml::de::Error| {
        AppError::Config(format!("config error in {}: {e}", path.display()))
    })?;

    Ok(resolve(parsed, log_level_override, log_file_override))
}

fn resolve(
    parsed: RawConfig,
    log_level_override: Option<&str>,
    log_file_override: Option<&str>,
) -> Config {
    let rt = parsed.runtime;
    let log_level = log_level_override.unwrap_or(&rt.log_level).to_string();
    let log_file = log_file_override
        .map(str::to_string)
        .or(rt.log_file)
        .filter(|p| !p.is_empty())
        .map(|p| expand_home(&p));

    Config { log_level, log_file }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
