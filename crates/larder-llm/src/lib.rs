//! Model-service client for larder.
//!
//! This crate speaks the OpenAI-compatible wire format for the two kinds of
//! calls the recipe pipeline needs: chat completions (plain text, JSON mode,
//! and text + image) and audio transcriptions. It has no knowledge of
//! recipes or ingredients.
//!
//! # Architecture
//!
//! - [`ChatProvider`] and [`Transcriber`] define the call interfaces
//! - [`OpenAiCompatProvider`] implements both over HTTP
//! - [`ProviderConfig`] describes how to reach the endpoint
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use larder_llm::{ChatMessage, ChatProvider, ChatRequest, OpenAiCompatProvider, ProviderConfig};
//!
//! let provider = OpenAiCompatProvider::new(ProviderConfig::openai());
//! let request = ChatRequest::new("gpt-4o", vec![ChatMessage::user("Name a soup.")]);
//! let response = provider.complete(&request).await?;
//! println!("{}", response.first_text().unwrap_or_default());
//! ```

pub mod config;
pub mod error;
pub mod openai_compat;
pub mod provider;
pub mod types;

pub use config::ProviderConfig;
pub use error::{ProviderError, Result};
pub use openai_compat::OpenAiCompatProvider;
pub use provider::{ChatProvider, Transcriber};
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, Choice, ContentPart, ImageUrl, MessageContent,
    ResponseFormat, Role, TranscriptionRequest, Usage,
};
