use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::view_state::DEFAULT_TRANSITION;

pub const DEFAULT_TICK_RATE_MS: u64 = 200;
pub const DEFAULT_LOG_FILTER: &str = "admindash=info";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Event-loop tick in milliseconds.
    #[serde(default)]
    pub tick_rate_ms: Option<u64>,

    /// Length of the view-state transition window in milliseconds.
    #[serde(default)]
    pub transition_ms: Option<u64>,

    #[serde(default)]
    pub log_filter: Option<String>,

    /// Path of the view shown at startup.
    #[serde(default)]
    pub start_route: Option<String>,
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        let ms = self
            .tick_rate_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TICK_RATE_MS);
        Duration::from_millis(ms)
    }

    pub fn transition(&self) -> Duration {
        self.transition_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TRANSITION)
    }

    pub fn start_route(&self) -> &str {
        self.start_route
            .as_deref()
            .map(str::trim)
            .filter(|route| !route.is_empty())
            .unwrap_or("/")
    }
}

/// Load the config from `explicit` or the default location. A missing or
/// malformed file yields the defaults.
pub fn load(explicit: Option<&Path>) -> Config {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(config_path) else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    parse(&content)
}

pub fn parse(content: &str) -> Config {
    toml::from_str::<Config>(content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("ADMINDASH_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("admindash").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("admindash").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "admindash", "admindash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("admindash"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("admindash"));
    }
    directories::ProjectDirs::from("io", "admindash", "admindash")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("ADMINDASH_LOG_DIR").map(PathBuf::from) {
        return Some(dir);
    }
    data_dir().map(|dir| dir.join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tick_rate(), Duration::from_millis(200));
        assert_eq!(config.transition(), Duration::from_millis(300));
        assert_eq!(config.start_route(), "/");
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_parse_all_keys() {
        let config = parse(
            r#"
            tick_rate_ms = 50
            transition_ms = 120
            log_filter = "admindash=debug"
            start_route = "/orders"
            "#,
        );
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
        assert_eq!(config.transition(), Duration::from_millis(120));
        assert_eq!(config.log_filter.as_deref(), Some("admindash=debug"));
        assert_eq!(config.start_route(), "/orders");
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let config = parse("tick_rate_ms = \"fast\"");
        assert_eq!(config.tick_rate(), Duration::from_millis(200));
    }

    #[test]
    fn test_zero_tick_rate_is_ignored() {
        let config = parse("tick_rate_ms = 0");
        assert_eq!(config.tick_rate(), Duration::from_millis(200));
    }
}
