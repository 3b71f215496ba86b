//! Environment configuration.
//!
//! Both settings are reserved for features the server does not run yet (external
//! consultation and on-disk memory). They are read and validated at startup so a
//! misconfigured deployment is visible in the logs, but nothing depends on them.

use serde::Serialize;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const CONSULT_BASE_URL_ENV: &str = "OLLAMA_BASE_URL";
pub const MEMORY_DIR_ENV: &str = "MEMORY_DIR";

const DEFAULT_CONSULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MEMORY_DIR_NAME: &str = "mcp-creative-memory";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be an http(s) URL, got '{value}'")]
    InvalidUrl { key: &'static str, value: String },

    #[error("{key} must be an absolute path, got '{value}'")]
    RelativePath { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// Base URL of the consultation service.
    pub consult_base_url: String,
    /// Directory reserved for persistent memory; never created.
    pub memory_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            consult_base_url: DEFAULT_CONSULT_BASE_URL.to_string(),
            memory_dir: env::temp_dir().join(DEFAULT_MEMORY_DIR_NAME),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let value = raw.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err(ConfigError::InvalidUrl {
            key: CONSULT_BASE_URL_ENV,
            value: value.to_string(),
        })
    }
}

fn parse_memory_dir(raw: &str) -> Result<PathBuf, ConfigError> {
    let path = PathBuf::from(raw.trim());
    if path.is_absolute() {
        Ok(path)
    } else {
        Err(ConfigError::RelativePath {
            key: MEMORY_DIR_ENV,
            value: raw.trim().to_string(),
        })
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset; invalid
    /// values are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = read(CONSULT_BASE_URL_ENV) {
            match parse_base_url(&raw) {
                Ok(url) => config.consult_base_url = url,
                Err(err) => log::warn!("{err}; falling back to {DEFAULT_CONSULT_BASE_URL}"),
            }
        }

        if let Some(raw) = read(MEMORY_DIR_ENV) {
            match parse_memory_dir(&raw) {
                Ok(dir) => config.memory_dir = dir,
                Err(err) => log::warn!(
                    "{err}; falling back to {}",
                    config.memory_dir.display()
                ),
            }
        }

        config
    }
}
