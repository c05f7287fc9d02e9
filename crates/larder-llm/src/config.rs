//! Provider connection settings.
//!
//! A [`ProviderConfig`] names the endpoint, the environment variable that
//! holds the API key, and any extra headers. The key itself is never stored
//! in configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

/// Default request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for an OpenAI-compatible endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Human-readable provider name, used in logs.
    #[serde(default = "default_name")]
    pub name: String,

    /// Base URL of the API (e.g. "https://api.openai.com/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable that holds the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Extra HTTP headers sent with every request.
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Request timeout in seconds. Defaults to 120.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_name() -> String {
    "openai".into()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".into()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".into()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::openai()
    }
}

impl ProviderConfig {
    /// The public OpenAI endpoint keyed by `OPENAI_API_KEY`.
    pub fn openai() -> Self {
        Self {
            name: default_name(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            headers: HashMap::new(),
            timeout_secs: None,
        }
    }

    /// Effective request timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Read the API key from `api_key_env`. An empty value counts as unset.
    pub fn api_key_from_env(&self) -> Result<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ProviderError::NotConfigured(format!(
                "set {} env var",
                self.api_key_env
            ))),
        }
    }
}
