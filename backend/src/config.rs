//! Server configuration read from `DASHBOARD_*` environment variables.
//!
//! Every setting has a default so the dashboard starts with no environment at
//! all. A value that does not parse is ignored with a warning.

use log::warn;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024; // 10 MB

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Rows per `INSERT` statement when storing a dataset.
    pub chunk_size: usize,
    /// Maximum accepted JSON body for `POST /api/datasets`.
    pub json_limit: usize,
    /// Maximum accepted CSV file for `POST /api/datasets/upload`.
    pub upload_limit: usize,
    pub seed_on_startup: bool,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            db_path: PathBuf::from("dashboard.sqlite"),
            chunk_size: 100,
            json_limit: DEFAULT_BODY_LIMIT,
            upload_limit: DEFAULT_BODY_LIMIT,
            seed_on_startup: true,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("DASHBOARD_HOST").unwrap_or(defaults.host),
            port: parsed(&lookup, "DASHBOARD_PORT").unwrap_or(defaults.port),
            db_path: lookup("DASHBOARD_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            chunk_size: parsed(&lookup, "DASHBOARD_CHUNK_SIZE")
                .filter(|size: &usize| *size > 0)
                .unwrap_or(defaults.chunk_size),
            json_limit: parsed(&lookup, "DASHBOARD_JSON_LIMIT").unwrap_or(defaults.json_limit),
            upload_limit: parsed(&lookup, "DASHBOARD_UPLOAD_LIMIT").unwrap_or(defaults.upload_limit),
            seed_on_startup: parsed(&lookup, "DASHBOARD_SEED_ON_STARTUP")
                .unwrap_or(defaults.seed_on_startup),
            open_browser: parsed(&lookup, "DASHBOARD_OPEN_BROWSER").unwrap_or(defaults.open_browser),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let cfg = config_from(&[
            ("DASHBOARD_PORT", "9000"),
            ("DASHBOARD_DB_PATH", "/tmp/dash.db"),
            ("DASHBOARD_CHUNK_SIZE", "25"),
            ("DASHBOARD_OPEN_BROWSER", "false"),
        ]);
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/dash.db"));
        assert_eq!(cfg.chunk_size, 25);
        assert!(!cfg.open_browser);
        assert!(cfg.seed_on_startup);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config_from(&[("DASHBOARD_PORT", "eighty"), ("DASHBOARD_CHUNK_SIZE", "0")]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.chunk_size, 100);
    }
}
