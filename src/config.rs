//! Configuration for the generative oracle connection.
//!
//! The API key comes from the environment (`PARTSCOUT_API_KEY`, falling
//! back to `GEMINI_API_KEY`); model, endpoint and timeout can be overridden
//! through an optional `partscout.config.yml` in the working directory.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "partscout.config.yml";

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Optional configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub model: Option<String>,
    pub api_base: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// Fully resolved oracle connection settings.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub request_timeout_secs: u64,
}

impl OracleConfig {
    /// Resolves the final configuration from an optional config file plus
    /// the environment.
    ///
    /// # Errors
    /// Fails when no API key is present in the environment.
    pub fn resolve(file: Option<ConfigFile>) -> Result<Self> {
        let api_key = std::env::var("PARTSCOUT_API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .map_err(|_| {
                anyhow::anyhow!(
                    "No API key found.\n\n💡 Hint: set PARTSCOUT_API_KEY (or GEMINI_API_KEY) in the environment"
                )
            })?;

        let file = file.unwrap_or_default();
        Ok(Self {
            api_key,
            model: file.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: file
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            request_timeout_secs: file
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is
/// missing or malformed.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently when the
/// file does not exist.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    Ok(Some(load_config_from_path(&config_path)?))
}
