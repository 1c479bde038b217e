//! App Configuration
//!
//! Baked in at build time from `TODO_API_URL`, `TODO_DATA_SOURCE` and
//! `TODO_LOG_LEVEL` (a wasm bundle has no process environment at runtime).
//! `TODO_CONFIG` may instead hold the whole config as JSON.

use std::str::FromStr;

use console_logger::{parse_level, LoggerConfig};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Where todos come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// REST backend is the source of truth
    #[default]
    Remote,
    /// In-memory store only, seeded with sample todos
    Local,
}

impl FromStr for DataSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" | "api" => Ok(DataSource::Remote),
            "local" | "memory" => Ok(DataSource::Local),
            other => Err(AppError::Validation(format!("unknown data source: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API root; todo and auth endpoints hang off it
    pub api_base_url: String,
    pub data_source: DataSource,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_source: DataSource::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_json_or_values(
            option_env!("TODO_CONFIG"),
            option_env!("TODO_API_URL"),
            option_env!("TODO_DATA_SOURCE"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    /// A JSON config that parses wins; otherwise the individual values apply
    pub fn from_json_or_values(
        json: Option<&str>,
        api_base_url: Option<&str>,
        data_source: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        non_blank(json)
            .and_then(|json| Self::from_json(json).ok())
            .unwrap_or_else(|| Self::from_values(api_base_url, data_source, log_level))
    }

    /// Build from optional raw values; blank or unparseable ones fall back to defaults
    pub fn from_values(api_base_url: Option<&str>, data_source: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();

        Self {
            api_base_url: non_blank(api_base_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            data_source: non_blank(data_source)
                .and_then(|source| source.parse().ok())
                .unwrap_or(defaults.data_source),
            log_level: non_blank(log_level)
                .filter(|level| parse_level(level).is_some())
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Decode(e.to_string()))
    }

    /// Only the backend knows about users; local mode skips the login guard
    pub fn requires_login(&self) -> bool {
        self.data_source == DataSource::Remote
    }

    pub fn logger(&self) -> LoggerConfig {
        parse_level(&self.log_level)
            .map(LoggerConfig::with_level)
            .unwrap_or_default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert!(config.requires_login());
        assert_eq!(config.logger().level, Level::INFO);
    }

    #[test]
    fn test_from_values() {
        let config = AppConfig::from_values(Some("https://todo.example.com/api/"), Some("Local"), Some("debug"));
        assert_eq!(config.api_base_url, "https://todo.example.com/api");
        assert_eq!(config.data_source, DataSource::Local);
        assert!(!config.requires_login());
        assert_eq!(config.logger().level, Level::DEBUG);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("cloud"), Some("chatty"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_from_json() {
        let config = AppConfig::from_json(r#"{ "data_source": "local" }"#).unwrap();
        assert_eq!(config.data_source, DataSource::Local);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        assert!(matches!(AppConfig::from_json("{"), Err(AppError::Decode(_))));
    }

    #[test]
    fn test_json_config_takes_precedence() {
        let config = AppConfig::from_json_or_values(
            Some(r#"{ "api_base_url": "https://api.example.com", "log_level": "warn" }"#),
            Some("http://ignored"),
            Some("local"),
            None,
        );
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.data_source, DataSource::Remote);
        assert_eq!(config.logger().level, Level::WARN);

        let fallback = AppConfig::from_json_or_values(Some("not json"), None, Some("local"), None);
        assert_eq!(fallback.data_source, DataSource::Local);

        let blank = AppConfig::from_json_or_values(Some("  "), None, None, None);
        assert_eq!(blank, AppConfig::default());
    }
}
