use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use serde::Deserialize;

use crate::utils::log_error;

const CONFIG_DIR: &str = ".feedpushr-gui";
const CONFIG_FILE: &str = "config.json";

const ENV_API_URL: &str = "FEEDPUSHR_API_URL";
const ENV_RESOURCE_PATH: &str = "FEEDPUSHR_RESOURCE_PATH";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Base URL of the feedpushr server
    pub api_url: String,
    /// Path of the output definition, relative to `api_url`
    pub resource_path: String,
}
impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_owned(),
            resource_path: "/v2/outputs/1".to_owned(),
        }
    }
}

pub static APPLICATION_CONFIG: GlobalSignal<ApplicationConfig> =
    Signal::global(ApplicationConfig::load);

impl ApplicationConfig {
    pub fn config_path() -> PathBuf {
        let mut path: PathBuf = dirs_next::home_dir().unwrap_or_default();
        path.push(CONFIG_DIR);
        path.push(CONFIG_FILE);
        path
    }

    pub fn load() -> Self {
        let config = Self::load_from(&Self::config_path(), |key| std::env::var(key).ok());
        log::info!("configuration loaded: {config:?}");
        config
    }

    /// Defaults, then the configuration file, then the environment
    ///
    /// A broken file is logged and skipped, the environment still applies.
    /// The URL is not validated here, the fetcher reports it.
    pub fn load_from(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_file(path)
            .unwrap_or_else(|e| {
                log_error(e);
                log::warn!("ignoring the configuration file");
                Self::default()
            })
            .with_env_overrides(lookup)
    }

    /// A missing file is not an error and yields the defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_owned(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no configuration file at {}", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_owned(),
                source,
            }),
        }
    }

    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(api_url) = lookup(ENV_API_URL) {
            self.api_url = api_url;
        }
        if let Some(resource_path) = lookup(ENV_RESOURCE_PATH) {
            self.resource_path = resource_path;
        }
        self
    }

    /// The full URL of the output definition
    pub fn resource_url(&self) -> Result<url::Url, ConfigError> {
        let url = format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            self.resource_path.trim_start_matches('/')
        );
        url::Url::parse(&url).map_err(|source| ConfigError::InvalidUrl { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url() {
        let config = ApplicationConfig::default();
        assert_eq!(
            config.resource_url().unwrap().as_str(),
            "http://localhost:8080/v2/outputs/1"
        );
    }

    #[test]
    fn slashes_are_normalized() {
        let config = ApplicationConfig {
            api_url: "https://feeds.example.org/api/".to_owned(),
            resource_path: "v2/outputs/7".to_owned(),
        };
        assert_eq!(
            config.resource_url().unwrap().as_str(),
            "https://feeds.example.org/api/v2/outputs/7"
        );
    }

    #[test]
    fn invalid_url_is_reported() {
        let config = ApplicationConfig {
            api_url: "not a url".to_owned(),
            ..Default::default()
        };
        assert!(matches!(
            config.resource_url(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: ApplicationConfig =
            serde_json::from_str(r#"{"api_url": "http://feedpushr:8080"}"#).unwrap();
        assert_eq!(config.api_url, "http://feedpushr:8080");
        assert_eq!(config.resource_path, "/v2/outputs/1");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("feedpushr-gui-does-not-exist/config.json");
        assert_eq!(
            ApplicationConfig::from_file(&path).unwrap(),
            ApplicationConfig::default()
        );
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "feedpushr-gui-bad-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").unwrap();
        let result = ApplicationConfig::from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn environment_overrides_file() {
        let config = ApplicationConfig::default().with_env_overrides(|key| match key {
            ENV_API_URL => Some("http://10.0.0.2:9090".to_owned()),
            _ => None,
        });
        assert_eq!(config.api_url, "http://10.0.0.2:9090");
        assert_eq!(config.resource_path, "/v2/outputs/1");
    }

    #[test]
    fn broken_file_keeps_environment_overrides() {
        let path = std::env::temp_dir().join(format!(
            "feedpushr-gui-broken-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").unwrap();
        let config = ApplicationConfig::load_from(&path, |key| match key {
            ENV_API_URL => Some("http://10.0.0.2:9090".to_owned()),
            ENV_RESOURCE_PATH => Some("/v2/outputs/9".to_owned()),
            _ => None,
        });
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.api_url, "http://10.0.0.2:9090");
        assert_eq!(config.resource_path, "/v2/outputs/9");
    }

    #[test]
    fn invalid_url_survives_loading() {
        let path = std::env::temp_dir().join("feedpushr-gui-does-not-exist/config.json");
        let config = ApplicationConfig::load_from(&path, |key| match key {
            ENV_API_URL => Some("not a url".to_owned()),
            ENV_RESOURCE_PATH => Some("/v2/outputs/9".to_owned()),
            _ => None,
        });
        assert_eq!(config.api_url, "not a url");
        assert_eq!(config.resource_path, "/v2/outputs/9");
        assert!(matches!(
            config.resource_url(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
