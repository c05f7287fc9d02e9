//! Configuration schema.
//!
//! Every field has a default, so an empty JSON object is a complete
//! configuration. Fields accept both `snake_case` and `camelCase` names.
//! The API key is never part of the file; it is read from the environment
//! variable named by `provider.api_key_env`.

use std::path::Path;

use larder_llm::ProviderConfig;
use serde::{Deserialize, Serialize};

use crate::error::{LarderError, Result};

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LarderConfig {
    /// Endpoint and credential settings.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Model used for recipes, photo recognition and speech extraction.
    #[serde(default = "default_chat_model", alias = "chatModel")]
    pub chat_model: String,

    /// Model used for speech-to-text.
    #[serde(default = "default_transcription_model", alias = "transcriptionModel")]
    pub transcription_model: String,

    /// Language hint passed to the transcription endpoint.
    #[serde(default = "default_language")]
    pub language: String,

    /// Sampling temperature for recipe generation.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_chat_model() -> String {
    "gpt-4o".into()
}

fn default_transcription_model() -> String {
    "whisper-1".into()
}

fn default_language() -> String {
    "en".into()
}

fn default_temperature() -> f64 {
    0.7
}

impl Default for LarderConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            chat_model: default_chat_model(),
            transcription_model: default_transcription_model(),
            language: default_language(),
            temperature: default_temperature(),
        }
    }
}

impl LarderConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| LarderError::Configuration(format!("invalid config: {e}")))
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LarderError::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&contents)
    }

    /// The per-call settings the gateway needs.
    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            chat_model: self.chat_model.clone(),
            transcription_model: self.transcription_model.clone(),
            language: self.language.clone(),
            temperature: self.temperature,
        }
    }
}

/// Model and sampling settings applied to every gateway call.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewaySettings {
    pub chat_model: String,
    pub transcription_model: String,
    pub language: String,
    pub temperature: f64,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        LarderConfig::default().gateway_settings()
    }
}
