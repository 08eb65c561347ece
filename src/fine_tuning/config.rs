//! # Fine-Tuning Configuration Module
//!
//! Two kinds of configuration meet here:
//!
//! - `ServerConfig`: where the control plane lives. Populated by the outer
//!   application (normally from `LLM_SERVER_URL`) and passed in explicitly.
//! - `FineTuningConfig`: the job document read from disk. Its schema belongs
//!   to the remote service, so it is kept as an opaque JSON object and
//!   forwarded field for field.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable holding the control plane base URL
pub const SERVER_URL_ENV: &str = "LLM_SERVER_URL";

/// Base URL used when `LLM_SERVER_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8343/";

/// Path segment appended to the base URL
pub const FINE_TUNING_PATH: &str = "fine-tuning";

/// Job document bundled with the crate, used when `--config` is omitted
///
/// Resolved against the source checkout at build time, so a binary copied
/// elsewhere needs an explicit `--config`.
pub const DEFAULT_CONFIG_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/config/default_ft_config.json");

/// Location of the fine-tuning control plane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL; the endpoint is this string with `fine-tuning` appended
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
        }
    }

    /// Set the base URL of the control plane
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> ServerConfig {
        self.config
    }
}

impl ServerConfig {
    /// Create a new builder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::new()
    }

    /// Resolve the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration from an arbitrary key lookup
    ///
    /// A present value wins even when empty.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(SERVER_URL_ENV) {
            Some(base_url) => Self::builder().base_url(base_url).build(),
            None => Self::default(),
        }
    }

    /// Full URL of the fine-tuning endpoint
    ///
    /// The path segment is appended verbatim, so a base URL without a
    /// trailing slash yields a URL without one too.
    pub fn endpoint(&self) -> Result<Url> {
        let url = format!("{}{}", self.base_url, FINE_TUNING_PATH);
        Url::parse(&url).map_err(|e| Error::InvalidEndpoint(format!("{}: {}", url, e)))
    }
}

/// Fine-tuning job document, forwarded to the control plane as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FineTuningConfig(Map<String, Value>);

impl FineTuningConfig {
    /// Read and parse a job document from `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| Error::ConfigParse {
            path: PathBuf::from(path),
            source,
        })
    }

    /// Top-level fields of the document
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for FineTuningConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_endpoint_defaults_to_local_server() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://127.0.0.1:8343/fine-tuning"
        );
    }

    #[test]
    fn test_endpoint_uses_server_url_override() {
        let vars = HashMap::from([(SERVER_URL_ENV, "http://example.com/".to_string())]);
        let config = ServerConfig::from_lookup(|key| vars.get(key).cloned());
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://example.com/fine-tuning"
        );
    }

    #[test]
    fn test_endpoint_appends_segment_verbatim() {
        let config = ServerConfig::builder()
            .base_url("http://example.com/api/")
            .build();
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://example.com/api/fine-tuning"
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = ServerConfig::builder().base_url("not a url ").build();
        assert!(matches!(config.endpoint(), Err(Error::InvalidEndpoint(_))));
    }

    #[test]
    fn test_load_preserves_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ft.json");
        let document = json!({
            "model": "facebook/opt-125m",
            "lora_config": {"r": 8, "target_modules": ["q_proj", "v_proj"]},
            "training_config": {"num_train_epochs": 3, "learning_rate": 0.0002}
        });
        std::fs::write(&path, document.to_string()).unwrap();

        let config = FineTuningConfig::load(&path).unwrap();
        assert_eq!(serde_json::to_value(&config).unwrap(), document);
        assert_eq!(config.as_map().len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = FineTuningConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
        assert!(err.is_config_load());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"model\": ").unwrap();

        let err = FineTuningConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.is_config_load());
    }

    #[test]
    fn test_load_rejects_non_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = FineTuningConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_bundled_default_config_loads() {
        let config = FineTuningConfig::load(DEFAULT_CONFIG_PATH).unwrap();
        assert!(config.as_map().contains_key("model"));
        assert!(config.as_map().contains_key("training_config"));
    }
}
