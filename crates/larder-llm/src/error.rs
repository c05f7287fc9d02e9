//! Provider error types for larder-llm.
//!
//! All provider operations return [`Result<T>`] which uses [`ProviderError`]
//! as the error type.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the model service.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The HTTP request to the provider failed.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Authentication with the provider was rejected (HTTP 401/403).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The provider is throttling requests (HTTP 429).
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// The account has run out of credits or quota (HTTP 429 with a
    /// billing message).
    #[error("quota exhausted: {0}")]
    QuotaExhausted(String),

    /// The requested model does not exist on the provider.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The provider has not been configured (e.g. missing API key).
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// The provider returned a response that could not be used.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The request timed out.
    #[error("timeout")]
    Timeout,

    /// An HTTP-level error from reqwest.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a local file for upload failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProviderError {
    /// Map a non-success HTTP status and its body to an error.
    ///
    /// OpenAI-style bodies (`{"error": {"message": ...}}`) are reduced to
    /// their message.
    pub fn from_status(status: StatusCode, body: &str, model: &str) -> Self {
        let message = extract_error_message(body).unwrap_or_else(|| body.to_string());
        match status.as_u16() {
            401 | 403 => Self::AuthFailed(message),
            404 => Self::ModelNotFound(format!("model '{model}': {message}")),
            429 if is_quota_exhausted(body) => Self::QuotaExhausted(message),
            429 => Self::RateLimited(message),
            _ => Self::RequestFailed(format!("HTTP {status}: {message}")),
        }
    }
}

/// A convenience type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Whether a 429 body describes exhausted credits rather than throttling.
fn is_quota_exhausted(body: &str) -> bool {
    let lower = body.to_lowercase();
    lower.contains("insufficient_quota")
        || lower.contains("quota exceeded")
        || lower.contains("exceeded your current quota")
        || lower.contains("billing")
        || lower.contains("credits")
}

/// Extract the human-readable message from a JSON error body.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error").and_then(|v| {
        v.get("message")
            .and_then(|m| m.as_str())
            .map(String::from)
            .or_else(|| v.as_str().map(String::from))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_is_auth_failed_with_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let err = ProviderError::from_status(StatusCode::UNAUTHORIZED, body, "gpt-4o");
        assert!(matches!(err, ProviderError::AuthFailed(_)));
        assert_eq!(
            err.to_string(),
            "authentication failed: Incorrect API key provided"
        );
    }

    #[test]
    fn status_403_is_auth_failed() {
        let err = ProviderError::from_status(StatusCode::FORBIDDEN, "Forbidden", "gpt-4o");
        assert!(matches!(err, ProviderError::AuthFailed(ref m) if m == "Forbidden"));
    }

    #[test]
    fn status_404_names_the_model() {
        let err = ProviderError::from_status(StatusCode::NOT_FOUND, "", "gpt-9");
        assert!(matches!(err, ProviderError::ModelNotFound(_)));
        assert!(err.to_string().contains("gpt-9"));
    }

    #[test]
    fn status_429_rate_limit_vs_quota() {
        let throttled = ProviderError::from_status(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"message":"Rate limit reached for requests"}}"#,
            "gpt-4o",
        );
        assert!(matches!(throttled, ProviderError::RateLimited(_)));

        let quota = ProviderError::from_status(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"message":"You exceeded your current quota","code":"insufficient_quota"}}"#,
            "gpt-4o",
        );
        assert!(matches!(quota, ProviderError::QuotaExhausted(_)));
        assert_eq!(
            quota.to_string(),
            "quota exhausted: You exceeded your current quota"
        );
    }

    #[test]
    fn other_status_keeps_code_and_raw_body() {
        let err = ProviderError::from_status(StatusCode::BAD_GATEWAY, "upstream down", "gpt-4o");
        assert_eq!(
            err.to_string(),
            "request failed: HTTP 502 Bad Gateway: upstream down"
        );
    }

    #[test]
    fn string_error_field_is_extracted() {
        assert_eq!(
            extract_error_message(r#"{"error": "plain message"}"#).as_deref(),
            Some("plain message")
        );
        assert_eq!(extract_error_message("not json"), None);
    }

    #[test]
    fn json_error_from_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let provider_err: ProviderError = serde_err.into();
        assert!(provider_err.to_string().starts_with("json error:"));
    }

    #[test]
    fn display_timeout_and_not_configured() {
        assert_eq!(ProviderError::Timeout.to_string(), "timeout");
        assert_eq!(
            ProviderError::NotConfigured("set OPENAI_API_KEY env var".into()).to_string(),
            "provider not configured: set OPENAI_API_KEY env var"
        );
    }
}
