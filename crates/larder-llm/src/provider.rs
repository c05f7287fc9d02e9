//! Provider traits for chat completions and speech-to-text.
//!
//! The gateway in `larder-core` only talks to these traits, so tests can
//! substitute scripted providers for the HTTP implementation.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ChatRequest, ChatResponse, TranscriptionRequest};

/// A provider that can execute chat completion requests.
///
/// The main implementation is
/// [`OpenAiCompatProvider`](crate::openai_compat::OpenAiCompatProvider).
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Returns the provider name (e.g. "openai").
    fn name(&self) -> &str;

    /// Execute a chat completion request and return the response.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`](crate::error::ProviderError) on network,
    /// authentication, quota or response-decoding failures.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

/// A provider that turns an audio file into text.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Returns the provider name (e.g. "openai").
    fn name(&self) -> &str;

    /// Upload the file named in `request` and return the transcript.
    async fn transcribe(&self, request: &TranscriptionRequest) -> Result<String>;
}
