// File: src/config.rs
// Purpose: Router configuration parsing from driveview.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::path::BasePath;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "driveview.toml";

/// Environment variable that overrides `routing.base_path`
///
/// Mirrors the base URL a bundler injects into the front end at build time.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Router configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RouterConfig {
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingConfig {
    /// Prefix the application is served under (default: "/")
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Whether literal segments match ignoring ASCII case (default: false)
    ///
    /// The file browser UI this router serves matched routes ignoring case,
    /// so links such as `/List/Music` resolved to the list view. Set this to
    /// keep that behavior.
    #[serde(default = "default_false")]
    pub case_insensitive: bool,
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            case_insensitive: false,
        }
    }
}

/// Failure to read or parse a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl RouterConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load configuration from the default path (./driveview.toml)
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(content)
    }

    /// Applies environment overrides (`BASE_URL`)
    pub fn with_env(self) -> Self {
        self.with_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    /// Applies an externally injected base URL, ignoring empty values
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base) = base_url.filter(|b| !b.trim().is_empty()) {
            self.routing.base_path = base;
        }
        self
    }

    /// The configured base path
    pub fn base(&self) -> BasePath {
        BasePath::new(&self.routing.base_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_default_config() {
        let config = RouterConfig::default();
        assert_eq!(config.routing.base_path, "/");
        assert!(!config.routing.case_insensitive);
        assert!(config.base().is_root());
    }

    #[test]
    fn test_empty_config() {
        let config = RouterConfig::parse("").unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_custom_routing() {
        let toml = r#"
            [routing]
            base_path = "/drive/"
            case_insensitive = true
        "#;
        let config = RouterConfig::parse(toml).unwrap();
        assert_eq!(config.base().as_str(), "/drive");
        assert!(config.routing.case_insensitive);
    }

    #[test]
    fn test_partial_routing_section() {
        let config = RouterConfig::parse("[routing]\ncase_insensitive = true\n").unwrap();
        assert_eq!(config.routing.base_path, "/");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(RouterConfig::parse("[routing\nbase_path = 1").is_err());
    }

    #[test]
    fn test_base_url_override() {
        let config = RouterConfig::default().with_base_url(Some("/od/".to_string()));
        assert_eq!(config.base().as_str(), "/od");

        let config = RouterConfig::default().with_base_url(Some("  ".to_string()));
        assert!(config.base().is_root());

        let config = RouterConfig::default().with_base_url(None);
        assert!(config.base().is_root());
    }

    #[test]
    fn test_base_url_from_environment() {
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let previous = std::env::var(BASE_URL_ENV).ok();

        std::env::set_var(BASE_URL_ENV, "/drive/");
        let config = RouterConfig::default().with_env();
        assert_eq!(config.routing.base_path, "/drive/");
        assert_eq!(config.base().as_str(), "/drive");

        std::env::remove_var(BASE_URL_ENV);
        let config = RouterConfig::default().with_env();
        assert!(config.base().is_root());

        if let Some(value) = previous {
            std::env::set_var(BASE_URL_ENV, value);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let config = RouterConfig::load("definitely/not/here/driveview.toml").unwrap();
        assert_eq!(config, RouterConfig::default());
    }
}
