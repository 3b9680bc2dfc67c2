//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::section::SectionId;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dashboard presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Section shown at startup and used for unknown selections
    #[serde(default = "default_section")]
    pub default_section: String,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

fn default_section() -> String {
    SectionId::DEFAULT.as_str().to_string()
}

fn default_title() -> String {
    "Blood Pressure Screening Dashboard".to_string()
}

fn default_subtitle() -> String {
    "2023 NHIS Analysis: Insurance Status and Health Equity in Preventive Care".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_section: default_section(),
            title: default_title(),
            subtitle: default_subtitle(),
        }
    }
}

impl DashboardConfig {
    /// Resolve the configured default section
    ///
    /// An unrecognized id is logged and replaced by the overview section.
    pub fn default_section_id(&self) -> SectionId {
        match self.default_section.parse() {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("{} in config, using {}", e, SectionId::DEFAULT);
                SectionId::DEFAULT
            }
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> ConfigLoad {
        let mut config = Config::default();
        let issues = config.apply_env_overrides();
        ConfigLoad {
            config,
            source: None,
            issues,
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<ConfigLoad, ConfigError> {
        let mut config = Self::load(path)?;
        let issues = config.apply_env_overrides();
        Ok(ConfigLoad {
            config,
            source: Some(path.to_path_buf()),
            issues,
        })
    }

    /// Load from default locations or environment
    ///
    /// Runs before logging is configured, so nothing is logged here; call
    /// [`ConfigLoad::log`] once the subscriber is installed.
    pub fn load_default() -> ConfigLoad {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("screening-dashboard").join("config.toml")),
            Some(PathBuf::from("/etc/screening-dashboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths, |key| std::env::var(key).ok())
    }

    /// Load the first existing, parseable file among `paths`
    ///
    /// Files that exist but fail to load are recorded in
    /// [`ConfigLoad::issues`] and the search continues.
    pub fn load_first<F>(paths: &[PathBuf], lookup: F) -> ConfigLoad
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut issues = Vec::new();
        let mut loaded = None;

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    loaded = Some((config, path.clone()));
                    break;
                }
                Err(e) => issues.push(e),
            }
        }

        let (mut config, source) = match loaded {
            Some((config, path)) => (config, Some(path)),
            None => (Config::default(), None),
        };
        issues.extend(config.apply_overrides(lookup));

        ConfigLoad {
            config,
            source,
            issues,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Vec<ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment in production)
    ///
    /// Returns the overrides that were ignored because their value is invalid.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ignored = Vec::new();

        if let Some(host) = lookup("DASHBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("DASHBOARD_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => ignored.push(ConfigError::InvalidOverride {
                    key: "DASHBOARD_PORT",
                    value: port,
                }),
            }
        }

        if let Some(section) = lookup("DASHBOARD_DEFAULT_SECTION") {
            self.dashboard.default_section = section;
        }

        if let Some(level) = lookup("DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }

        ignored
    }
}

/// Outcome of configuration discovery
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    /// File the config was read from; `None` means defaults
    pub source: Option<PathBuf>,
    /// Files that failed to load and overrides that were ignored
    pub issues: Vec<ConfigError>,
}

impl ConfigLoad {
    /// Report the outcome through `tracing`
    pub fn log(&self) {
        for issue in &self.issues {
            tracing::warn!("{}", issue);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Ignoring invalid {key}: {value}")]
    InvalidOverride { key: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Screening Dashboard Configuration
#
# Environment variables override these settings:
# - DASHBOARD_HOST
# - DASHBOARD_PORT
# - DASHBOARD_DEFAULT_SECTION
# - DASHBOARD_LOG_LEVEL
# - DASHBOARD_LOG_FORMAT

[server]
# Host to bind to
host = "127.0.0.1"

# Port to listen on
port = 8084

[dashboard]
# Section shown at startup and for unknown selections:
# recommendations, overview, insurance, demographics, regional, prevalence
default_section = "overview"

# Page header
title = "Blood Pressure Screening Dashboard"
subtitle = "2023 NHIS Analysis: Insurance Status and Health Equity in Preventive Care"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "127.0.0.1:8084");
        assert_eq!(config.dashboard.default_section_id(), SectionId::Overview);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.server.host, defaults.server.host);
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.dashboard.default_section, "overview");
        assert_eq!(config.dashboard.title, defaults.dashboard.title);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::parse("[dashboard]\ndefault_section = \"insurance\"\n").unwrap();
        assert_eq!(config.dashboard.default_section_id(), SectionId::Insurance);
        assert_eq!(config.server.port, 8084);
    }

    #[test]
    fn test_unknown_default_section_falls_back() {
        let config = Config::parse("[dashboard]\ndefault_section = \"trends\"\n").unwrap();
        assert_eq!(config.dashboard.default_section_id(), SectionId::Overview);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        match Config::load(file.path()) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DASHBOARD_PORT", "9100"),
            ("DASHBOARD_DEFAULT_SECTION", "regional"),
            ("DASHBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        let ignored = config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert!(ignored.is_empty());

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.dashboard.default_section_id(), SectionId::Regional);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        let ignored =
            config.apply_overrides(|key| (key == "DASHBOARD_PORT").then(|| "http".to_string()));
        assert_eq!(config.server.port, 8084);
        assert!(matches!(
            ignored.as_slice(),
            [ConfigError::InvalidOverride { key: "DASHBOARD_PORT", .. }]
        ));
    }

    #[test]
    fn test_load_first_reports_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();

        let load = Config::load_first(&[broken.clone()], |_| None);

        assert_eq!(load.source, None);
        assert_eq!(load.config.server.port, 8084);
        match load.issues.as_slice() {
            [ConfigError::Parse { path, .. }] => assert_eq!(path, &broken),
            other => panic!("expected one parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_first_skips_broken_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "port = [").unwrap();
        std::fs::write(&good, "[server]\nport = 9200\n").unwrap();

        let load = Config::load_first(
            &[missing, broken, good.clone()],
            |key| (key == "DASHBOARD_DEFAULT_SECTION").then(|| "regional".to_string()),
        );

        assert_eq!(load.source.as_deref(), Some(good.as_path()));
        assert_eq!(load.issues.len(), 1);
        assert_eq!(load.config.server.port, 9200);
        assert_eq!(load.config.dashboard.default_section_id(), SectionId::Regional);
    }
}
