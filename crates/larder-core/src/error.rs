//! Error types for larder-core.
//!
//! [`LarderError`] has one variant per pipeline stage that can fail. Apart
//! from [`LarderError::Configuration`], every variant wraps the underlying
//! error so callers can show its message and walk the source chain.
//! Unreadable structured replies from the model are recovered inside the
//! gateway and never appear here.

use thiserror::Error;

/// Boxed error carried by the stage variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the recipe pipeline.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LarderError {
    /// Missing or invalid setup (e.g. no API key). Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The recipe request failed, including its plain-text fallback.
    #[error("failed to generate recipe: {source}")]
    Generation {
        #[source]
        source: BoxError,
    },

    /// Image analysis failed, including its plain-text fallback.
    #[error("failed to analyze image: {source}")]
    Recognition {
        #[source]
        source: BoxError,
    },

    /// The speech-to-text request failed. There is no fallback.
    #[error("failed to transcribe audio: {source}")]
    Transcription {
        #[source]
        source: BoxError,
    },

    /// Ingredient extraction from text failed, including its fallback.
    #[error("failed to extract ingredients from speech: {source}")]
    Extraction {
        #[source]
        source: BoxError,
    },
}

impl LarderError {
    pub fn generation(source: impl Into<BoxError>) -> Self {
        Self::Generation {
            source: source.into(),
        }
    }

    pub fn recognition(source: impl Into<BoxError>) -> Self {
        Self::Recognition {
            source: source.into(),
        }
    }

    pub fn transcription(source: impl Into<BoxError>) -> Self {
        Self::Transcription {
            source: source.into(),
        }
    }

    pub fn extraction(source: impl Into<BoxError>) -> Self {
        Self::Extraction {
            source: source.into(),
        }
    }
}

/// A convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LarderError>;
