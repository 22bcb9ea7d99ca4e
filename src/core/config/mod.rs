//! Configuration loading with env-var overrides.
//!
//! # Module layout
//!
//! - **types**: the resolved `Config` consumed by `main`.
//! - **raw**: raw TOML deserialization types; kept private.
//! - **load**: `merge_toml`, `load_raw_merged`, `load`, `load_from`,
//!   `expand_home`.

mod load;
mod raw;
mod types;

pub use load::{expand_home, load, load_from};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use tempfile::{NamedTempFile, TempDir};

    const MINIMAL_TOML: &str = r#"
[runtime]
log_level = "info"
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    fn write_named(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let p = dir.path().join(name);
        std::fs::write(&p, content).unwrap();
        p
    }

    #[test]
    fn parse_basic_config() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let f = write_toml("");
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg.log_level, "warn");
        assert!(cfg.log_file.is_none());
    }

    #[test]
    fn log_file_tilde_expands() {
        let home = dirs::home_dir().expect("home dir must exist in test env");
        let f = write_toml("[runtime]\nlog_file = \"~/workbridge.log\"\n");
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg.log_file, Some(home.join("workbridge.log")));
    }

    #[test]
    fn unknown_tables_are_ignored() {
        let f = write_toml("[runtime]\nlog_level = \"debug\"\n\n[extra]\nkey = 1\n");
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn wrong_type_is_config_error() {
        let f = write_toml("[runtime]\nlog_level = 3\n");
        let msg = load_from(f.path(), None, None).unwrap_err().to_string();
        assert!(msg.contains("config error"));
    }

    #[test]
    fn malformed_toml_errors() {
        let f = write_toml("[runtime\nlog_level = \"info\"\n");
        let msg = load_from(f.path(), None, None).unwrap_err().to_string();
        assert!(msg.contains("parse error"));
    }

    #[test]
    fn absolute_path_unchanged() {
        assert_eq!(expand_home("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn relative_path_unchanged() {
        assert_eq!(expand_home("relative/path"), PathBuf::from("relative/path"));
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(Path::new("/nonexistent/config.toml"), None, None);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("config error"));
        assert!(msg.contains("cannot read"));
    }

    #[test]
    fn explicit_missing_path_errors() {
        assert!(load(Some("/nonexistent/workbridge.toml")).is_err());
    }

    #[test]
    fn env_log_level_override() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), Some("trace"), None).unwrap();
        assert_eq!(cfg.log_level, "trace");
    }

    #[test]
    fn env_log_file_override() {
        let f = write_toml("[runtime]\nlog_file = \"/tmp/from-file.log\"\n");
        let cfg = load_from(f.path(), None, Some("/tmp/from-env.log")).unwrap();
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/from-env.log")));
    }

    #[test]
    fn empty_log_file_means_stderr() {
        let f = write_toml("[runtime]\nlog_file = \"\"\n");
        let cfg = load_from(f.path(), None, None).unwrap();
        assert!(cfg.log_file.is_none());
    }

    const BASE_TOML: &str = r#"
[runtime]
log_level = "info"
log_file = "/var/log/workbridge.log"
"#;

    #[test]
    fn overlay_keeps_base_fields() {
        let dir = TempDir::new().unwrap();
        write_named(&dir, "base.toml", BASE_TOML);
        let overlay = r#"
[meta]
base = "base.toml"

[runtime]
log_level = "debug"
"#;
        let overlay_path = write_named(&dir, "overlay.toml", overlay);
        let cfg = load_from(&overlay_path, None, None).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.log_file, Some(PathBuf::from("/var/log/workbridge.log")));
    }

    #[test]
    fn chained_bases() {
        let dir = TempDir::new().unwrap();
        write_named(&dir, "grandbase.toml", BASE_TOML);
        write_named(
            &dir,
            "middle.toml",
            "[meta]\nbase = \"grandbase.toml\"\n\n[runtime]\nlog_level = \"error\"\n",
        );
        let top_path = write_named(
            &dir,
            "top.toml",
            "[meta]\nbase = \"middle.toml\"\n\n[runtime]\nlog_file = \"/tmp/top.log\"\n",
        );
        let cfg = load_from(&top_path, None, None).unwrap();
        assert_eq!(cfg.log_level, "error");
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/top.log")));
    }

    #[test]
    fn missing_base_errors() {
        let dir = TempDir::new().unwrap();
        let overlay_path = write_named(
            &dir,
            "overlay.toml",
            "[meta]\nbase = \"nonexistent.toml\"\n",
        );
        let msg = load_from(&overlay_path, None, None).unwrap_err().to_string();
        assert!(msg.contains("cannot read"));
    }

    #[test]
    fn cycle_detection() {
        let dir = TempDir::new().unwrap();
        let self_path = dir.path().join("self.toml");
        let content = format!("[meta]\nbase = \"{}\"\n\n{BASE_TOML}", self_path.display());
        std::fs::write(&self_path, content).unwrap();
        let msg = load_from(&self_path, None, None).unwrap_err().to_string();
        assert!(msg.contains("circular"));
    }
}
