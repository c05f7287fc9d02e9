//! Structured-then-plain-text request chain.
//!
//! Every JSON call to the model is tried once in JSON mode. If the reply
//! cannot be read, one plain-text request is issued instead and its text is
//! returned for the caller to interpret. Provider errors are never retried.

use larder_llm::{ChatProvider, ChatRequest, ChatResponse, ProviderError};
use serde_json::Value;
use tracing::{debug, warn};

/// Cap on ingredient names recovered from a comma-separated reply.
pub const MAX_FALLBACK_INGREDIENTS: usize = 10;

/// Which request produced the result.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// The JSON-mode reply parsed.
    Structured(T),
    /// Raw text of the plain-text fallback reply.
    Fallback(String),
}

/// Send `structured`, parse it with `parse`, and fall back to the request
/// built by `fallback` if parsing yields `None`.
///
/// At most two requests are sent. A provider error from either request is
/// returned as is.
pub async fn structured_or_fallback<T, P, F>(
    provider: &dyn ChatProvider,
    structured: &ChatRequest,
    parse: P,
    fallback: F,
) -> larder_llm::Result<Reply<T>>
where
    P: FnOnce(&str) -> Option<T>,
    F: FnOnce() -> ChatRequest,
{
    let response = provider.complete(structured).await?;
    let text = reply_text(&response)?;
    if let Some(parsed) = parse(text) {
        debug!(provider = provider.name(), "structured reply parsed");
        return Ok(Reply::Structured(parsed));
    }

    warn!(
        provider = provider.name(),
        reply_len = text.len(),
        "structured reply unreadable, retrying as plain text"
    );
    let response = provider.complete(&fallback()).await?;
    Ok(Reply::Fallback(reply_text(&response)?.to_string()))
}

/// Text of the first choice. A response without choices is unusable.
pub fn reply_text(response: &ChatResponse) -> larder_llm::Result<&str> {
    response
        .first_text()
        .ok_or_else(|| ProviderError::InvalidResponse("response has no choices".into()))
}

/// Read `{"ingredients": [...]}`.
///
/// A missing key is an empty list and non-string entries are skipped.
/// Anything that is not an object, or an `ingredients` value that is not a
/// list, is unreadable.
pub fn parse_ingredient_reply(text: &str) -> Option<Vec<String>> {
    let Value::Object(mut object) = serde_json::from_str::<Value>(text).ok()? else {
        return None;
    };
    match object.remove("ingredients") {
        None => Some(Vec::new()),
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(name) => Some(name),
                    _ => None,
                })
                .collect(),
        ),
        Some(_) => None,
    }
}

/// Split a comma-separated reply into at most
/// [`MAX_FALLBACK_INGREDIENTS`] trimmed, non-empty entries.
pub fn split_comma_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .take(MAX_FALLBACK_INGREDIENTS)
        .map(String::from)
        .collect()
}

/// Collapse a [`Reply`] from an ingredient call into a list.
pub fn ingredient_list(reply: Reply<Vec<String>>) -> Vec<String> {
    match reply {
        Reply::Structured(names) => names,
        Reply::Fallback(text) => split_comma_list(&text),
    }
}
