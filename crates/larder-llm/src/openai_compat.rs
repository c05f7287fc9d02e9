//! OpenAI-compatible provider implementation.
//!
//! [`OpenAiCompatProvider`] talks to any API that follows the OpenAI chat
//! completion and audio transcription formats. The base URL is taken from
//! [`ProviderConfig`], so a local proxy or mock server works the same way as
//! the public endpoint.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::error::{ProviderError, Result};
use crate::provider::{ChatProvider, Transcriber};
use crate::types::{ChatRequest, ChatResponse, TranscriptionRequest, TranscriptionResponse};

/// An OpenAI-compatible provider for chat completions and transcriptions.
///
/// # Construction
///
/// ```rust,ignore
/// use larder_llm::{OpenAiCompatProvider, ProviderConfig};
///
/// let provider = OpenAiCompatProvider::new(ProviderConfig::openai());
/// ```
pub struct OpenAiCompatProvider {
    config: ProviderConfig,
    http: reqwest::Client,
    api_key: Option<String>,
}

impl OpenAiCompatProvider {
    /// Create a new provider from configuration.
    ///
    /// The API key is resolved from `config.api_key_env` at request time.
    pub fn new(config: ProviderConfig) -> Self {
        let http = build_client(&config);
        Self {
            config,
            http,
            api_key: None,
        }
    }

    /// Create a new provider with an explicit API key.
    pub fn with_api_key(config: ProviderConfig, api_key: String) -> Self {
        let http = build_client(&config);
        Self {
            config,
            http,
            api_key: Some(api_key),
        }
    }

    /// Returns the provider configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn endpoint(&self, route: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{base}/{route}")
    }

    /// Resolve the API key: explicit key > environment variable.
    fn resolve_api_key(&self) -> Result<String> {
        match self.api_key {
            Some(ref key) => Ok(key.clone()),
            None => self.config.api_key_from_env(),
        }
    }

    /// Start an authenticated POST with the configured extra headers.
    fn post(&self, route: &str) -> Result<reqwest::RequestBuilder> {
        let api_key = self.resolve_api_key()?;
        let mut req = self.http.post(self.endpoint(route)).bearer_auth(api_key);
        for (k, v) in &self.config.headers {
            req = req.header(k.as_str(), v.as_str());
        }
        Ok(req)
    }
}

fn build_client(config: &ProviderConfig) -> reqwest::Client {
    let timeout = Duration::from_secs(config.timeout_secs());
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|err| {
            warn!(
                provider = %config.name,
                timeout_secs = timeout.as_secs(),
                error = %err,
                "failed to build HTTP client, requests will run without a timeout"
            );
            reqwest::Client::new()
        })
}

fn send_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Http(err)
    }
}

/// Fail with a typed error unless the response status is 2xx.
async fn check_status(response: reqwest::Response, model: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ProviderError::from_status(status, &body, model))
}

#[async_trait]
impl ChatProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        debug!(
            provider = %self.config.name,
            model = %request.model,
            messages = request.messages.len(),
            json = request.wants_json(),
            "sending chat completion request"
        );

        let response = self
            .post("chat/completions")?
            .json(request)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response, &request.model).await?;

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("failed to parse response: {e}"))
        })?;

        debug!(
            provider = %self.config.name,
            model = %chat_response.model,
            choices = chat_response.choices.len(),
            "chat completion response received"
        );

        Ok(chat_response)
    }
}

#[async_trait]
impl Transcriber for OpenAiCompatProvider {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn transcribe(&self, request: &TranscriptionRequest) -> Result<String> {
        let audio = tokio::fs::read(&request.file).await?;
        debug!(
            provider = %self.config.name,
            model = %request.model,
            bytes = audio.len(),
            "sending transcription request"
        );

        let file_part = reqwest::multipart::Part::bytes(audio)
            .file_name(upload_file_name(&request.file))
            .mime_str(audio_mime_type(&request.file))
            .map_err(|e| ProviderError::RequestFailed(format!("MIME error: {e}")))?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", request.model.clone())
            .text("response_format", "json");
        if let Some(ref language) = request.language {
            form = form.text("language", language.clone());
        }

        let response = self
            .post("audio/transcriptions")?
            .multipart(form)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response, &request.model).await?;

        let body: TranscriptionResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("failed to parse transcription: {e}"))
        })?;
        Ok(body.text)
    }
}

fn upload_file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(String::from)
        .unwrap_or_else(|| "audio.wav".into())
}

/// Map an audio file extension to the MIME type sent with the upload.
fn audio_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("mp3") | Some("mpeg") => "audio/mpeg",
        Some("m4a") | Some("mp4") => "audio/mp4",
        Some("ogg") => "audio/ogg",
        Some("webm") => "audio/webm",
        Some("flac") => "audio/flac",
        _ => "audio/wav",
    }
}

impl std::fmt::Debug for OpenAiCompatProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatProvider")
            .field("name", &self.config.name)
            .field("base_url", &self.config.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}
