//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/shelflog/config.toml)
//! 3. Environment variables (SHELFLOG_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable prefix
const ENV_PREFIX: &str = "SHELFLOG";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory for data storage (SQLite db, default log location)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory for rolling log files (defaults to `<data_dir>/logs`)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log level override (trace|debug|info|warn|error)
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_dir: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (SHELFLOG_DATA_DIR, SHELFLOG_LOG_DIR, SHELFLOG_LOG_LEVEL)
    /// 2. Config file (~/.config/shelflog/config.toml or SHELFLOG_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.ensure_data_dir()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    #[cfg(test)]
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // SHELFLOG_DATA_DIR
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        // SHELFLOG_LOG_DIR
        if let Ok(val) = std::env::var(format!("{}_LOG_DIR", ENV_PREFIX)) {
            self.log_dir = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }

        // SHELFLOG_LOG_LEVEL
        if let Ok(val) = std::env::var(format!("{}_LOG_LEVEL", ENV_PREFIX)) {
            self.log_level = if val.is_empty() { None } else { Some(val) };
        }
    }

    /// Ensure data directory exists
    fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", self.data_dir))?;
        }
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with SHELFLOG_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shelflog")
            .join("config.toml")
    }

    /// Get the path to the SQLite database
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("shelflog.sqlite3")
    }

    /// Get the directory for rolling log files
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("logs"))
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelflog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to serialize tests that touch environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Guard that locks env access and saves/restores env vars
    struct EnvGuard<'a> {
        _lock: std::sync::MutexGuard<'a, ()>,
        saved: Vec<(String, Option<String>)>,
    }

    impl<'a> EnvGuard<'a> {
        fn new(vars: &[&str]) -> Self {
            let lock = ENV_MUTEX.lock().unwrap();
            let saved = vars
                .iter()
                .map(|&name| (name.to_string(), env::var(name).ok()))
                .collect();
            // Clear all the vars
            for name in vars {
                env::remove_var(name);
            }
            Self { _lock: lock, saved }
        }
    }

    impl Drop for EnvGuard<'_> {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    const ENV_VARS: &[&str] = &["SHELFLOG_DATA_DIR", "SHELFLOG_LOG_DIR", "SHELFLOG_LOG_LEVEL"];

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.log_dir.is_none());
        assert!(config.log_level.is_none());
        assert!(config.data_dir.ends_with("shelflog"));
    }

    #[test]
    fn test_file_paths() {
        let config = Config::default();

        let db_path = config.database_path();
        assert!(db_path.ends_with("shelflog.sqlite3"));

        let log_dir = config.log_dir();
        assert!(log_dir.ends_with("logs"));
    }

    #[test]
    fn test_explicit_log_dir_wins_over_derived_default() {
        let config = Config {
            data_dir: PathBuf::from("/data/shelflog"),
            log_dir: Some(PathBuf::from("/var/log/shelflog")),
            log_level: None,
        };
        assert_eq!(config.log_dir(), PathBuf::from("/var/log/shelflog"));
    }

    #[test]
    fn test_env_override_data_dir() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("SHELFLOG_DATA_DIR", "/tmp/shelflog-test");
        config.apply_env_overrides();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/shelflog-test"));
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/shelflog-test/shelflog.sqlite3")
        );
    }

    #[test]
    fn test_env_override_log_dir() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();
        assert!(config.log_dir.is_none());

        env::set_var("SHELFLOG_LOG_DIR", "/tmp/shelflog-logs");
        config.apply_env_overrides();
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/shelflog-logs"));

        // Empty string clears it
        env::set_var("SHELFLOG_LOG_DIR", "");
        config.apply_env_overrides();
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_env_override_log_level() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();
        assert!(config.log_level.is_none());

        env::set_var("SHELFLOG_LOG_LEVEL", "debug");
        config.apply_env_overrides();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_load_from_str() {
        let _guard = EnvGuard::new(ENV_VARS);

        let toml = r#"
            data_dir = "/custom/data"
            log_dir = "/custom/logs"
            log_level = "warn"
        "#;

        let config = Config::load_from_str(toml).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/custom/data"));
        assert_eq!(config.log_dir(), PathBuf::from("/custom/logs"));
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let _guard = EnvGuard::new(ENV_VARS);
        let dir = tempfile::tempdir().unwrap();
        env::set_var("SHELFLOG_DATA_DIR", dir.path().join("data"));

        let path = dir.path().join("missing-config.toml");
        let config = Config::load_from_path(&path).unwrap();
        // Should return defaults when file doesn't exist
        assert!(config.log_dir.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_load_from_path_rejects_malformed_file() {
        let _guard = EnvGuard::new(ENV_VARS);
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = [not valid toml").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }
}
