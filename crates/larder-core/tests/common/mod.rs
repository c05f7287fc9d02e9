//! Scripted providers shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use image::{ImageFormat, Rgb, RgbImage};
use larder_core::{GatewaySettings, RecipeGateway};
use larder_llm::{
    ChatProvider, ChatRequest, ChatResponse, ProviderError, Transcriber, TranscriptionRequest,
};

/// Chat provider that holds every request open until [`release`] is
/// called, then answers with `content`.
///
/// [`release`]: GatedChat::release
pub struct GatedChat {
    gate: Notify,
    content: String,
}

impl GatedChat {
    pub fn new(content: &str) -> Self {
        Self {
            gate: Notify::new(),
            content: content.to_string(),
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl ChatProvider for GatedChat {
    fn name(&self) -> &str {
        "gated"
    }

    async fn complete(&self, _request: &ChatRequest) -> larder_llm::Result<ChatResponse> {
        self.gate.notified().await;
        Ok(completion(&self.content))
    }
}

/// Chat provider that replays a fixed list of results and records every
/// request it receives.
#[derive(Default)]
pub struct ScriptedChat {
    replies: Mutex<VecDeque<larder_llm::Result<ChatResponse>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedChat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply whose first choice carries `content`.
    pub fn reply(self, content: &str) -> Self {
        self.push(Ok(completion(content)))
    }

    /// Queue a reply with no choices.
    pub fn empty_reply(self) -> Self {
        let response = serde_json::from_value(serde_json::json!({"choices": []})).unwrap();
        self.push(Ok(response))
    }

    /// Queue a provider failure.
    pub fn fail(self, err: ProviderError) -> Self {
        self.push(Err(err))
    }

    fn push(self, result: larder_llm::Result<ChatResponse>) -> Self {
        self.replies.lock().unwrap().push_back(result);
        self
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatProvider for ScriptedChat {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &ChatRequest) -> larder_llm::Result<ChatResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::InvalidResponse("script exhausted".into())))
    }
}

/// What the transcriber saw when it was called.
#[derive(Debug, Clone)]
pub struct SeenUpload {
    pub request: TranscriptionRequest,
    pub existed: bool,
    pub contents: Vec<u8>,
}

/// Transcriber that returns a fixed result and records the staged file.
pub struct ScriptedTranscriber {
    result: Mutex<Option<larder_llm::Result<String>>>,
    seen: Mutex<Vec<SeenUpload>>,
}

impl ScriptedTranscriber {
    pub fn hearing(text: &str) -> Self {
        Self::with_result(Ok(text.to_string()))
    }

    pub fn failing(err: ProviderError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: larder_llm::Result<String>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<SeenUpload> {
        self.seen.lock().unwrap().clone()
    }

    pub fn staged_path(&self) -> PathBuf {
        self.seen()[0].request.file.clone()
    }
}

#[async_trait]
impl Transcriber for ScriptedTranscriber {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn transcribe(&self, request: &TranscriptionRequest) -> larder_llm::Result<String> {
        let contents = std::fs::read(&request.file).unwrap_or_default();
        self.seen.lock().unwrap().push(SeenUpload {
            request: request.clone(),
            existed: request.file.exists(),
            contents,
        });
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(ProviderError::InvalidResponse("script exhausted".into())))
    }
}

pub fn completion(content: &str) -> ChatResponse {
    serde_json::from_value(serde_json::json!({
        "id": "chatcmpl-scripted",
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    }))
    .unwrap()
}

/// A gateway over the given fakes with default settings.
pub fn gateway(chat: Arc<dyn ChatProvider>, transcriber: Arc<dyn Transcriber>) -> RecipeGateway {
    RecipeGateway::new(chat, transcriber, GatewaySettings::default())
}

/// A gateway whose transcriber is never expected to be called.
pub fn chat_gateway(chat: Arc<dyn ChatProvider>) -> RecipeGateway {
    gateway(chat, Arc::new(ScriptedTranscriber::hearing("")))
}

/// A small valid PNG.
pub fn png_bytes() -> Vec<u8> {
    let img = RgbImage::from_pixel(8, 8, Rgb([180, 90, 30]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// `{"ingredients": [...]}` for the given names.
pub fn ingredient_json(names: &[&str]) -> String {
    serde_json::json!({ "ingredients": names }).to_string()
}
