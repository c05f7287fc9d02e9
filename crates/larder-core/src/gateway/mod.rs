//! Gateway to the model service.
//!
//! [`RecipeGateway`] turns pipeline requests (generate a recipe, read a
//! photo, transcribe a voice note, pull ingredients out of a transcript)
//! into provider calls. JSON replies that cannot be read are recovered with
//! one plain-text request (see [`fallback`]); provider errors are mapped to
//! the [`LarderError`] variant for the stage that failed.

pub mod fallback;
pub mod media;
pub mod prompts;

use std::sync::Arc;

use larder_llm::{
    ChatMessage, ChatProvider, ChatRequest, OpenAiCompatProvider, Transcriber,
    TranscriptionRequest,
};
use tracing::{debug, info};

use crate::config::{GatewaySettings, LarderConfig};
use crate::error::{LarderError, Result};
use crate::normalize::IngredientName;
use crate::pantry::join_names;
use crate::recipe::{Recipe, RecipeCard};

use self::fallback::{Reply, ingredient_list, parse_ingredient_reply, structured_or_fallback};
use self::prompts::*;

/// Entry point for every model-backed operation.
pub struct RecipeGateway {
    chat: Arc<dyn ChatProvider>,
    transcriber: Arc<dyn Transcriber>,
    settings: GatewaySettings,
}

impl RecipeGateway {
    pub fn new(
        chat: Arc<dyn ChatProvider>,
        transcriber: Arc<dyn Transcriber>,
        settings: GatewaySettings,
    ) -> Self {
        Self {
            chat,
            transcriber,
            settings,
        }
    }

    /// Build a gateway backed by an OpenAI-compatible endpoint.
    ///
    /// # Errors
    ///
    /// [`LarderError::Configuration`] if the API key variable is unset or
    /// empty.
    pub fn from_config(config: &LarderConfig) -> Result<Self> {
        let api_key = config
            .provider
            .api_key_from_env()
            .map_err(|e| LarderError::Configuration(e.to_string()))?;
        let provider = Arc::new(OpenAiCompatProvider::with_api_key(
            config.provider.clone(),
            api_key,
        ));
        info!(
            provider = %config.provider.name,
            base_url = %config.provider.base_url,
            model = %config.chat_model,
            "recipe gateway ready"
        );
        Ok(Self::new(
            provider.clone(),
            provider,
            config.gateway_settings(),
        ))
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    /// Ask for a recipe that uses the given ingredients.
    ///
    /// Returns [`Recipe::Structured`] when the JSON reply is a usable card,
    /// otherwise the text of one plain-text follow-up request. The list is
    /// sent as is, even when empty.
    pub async fn generate_recipe(&self, ingredients: &[IngredientName]) -> Result<Recipe> {
        let ingredients_text = join_names(ingredients);
        debug!(count = ingredients.len(), "generating recipe");

        let structured = self
            .recipe_request(render_recipe_prompt(&ingredients_text))
            .json_object();
        let reply = structured_or_fallback(
            self.chat.as_ref(),
            &structured,
            RecipeCard::from_reply,
            || self.recipe_request(render_recipe_fallback_prompt(&ingredients_text)),
        )
        .await
        .map_err(LarderError::generation)?;

        Ok(match reply {
            Reply::Structured(card) => Recipe::Structured(card),
            Reply::Fallback(text) => Recipe::Text(text),
        })
    }

    /// Identify food ingredients visible in a photo.
    ///
    /// The image may be PNG, JPEG, GIF or WebP; it is sent as JPEG. Names
    /// are returned raw and still need normalizing.
    pub async fn recognize_ingredients(&self, image: &[u8]) -> Result<Vec<String>> {
        let data_uri = media::jpeg_data_uri(image).map_err(LarderError::recognition)?;
        debug!(bytes = image.len(), "recognizing ingredients in photo");

        let structured = ChatRequest::new(
            self.settings.chat_model.as_str(),
            vec![ChatMessage::user_with_image(PHOTO_PROMPT, data_uri.as_str())],
        )
        .with_max_tokens(PHOTO_MAX_TOKENS)
        .json_object();
        let reply = structured_or_fallback(
            self.chat.as_ref(),
            &structured,
            parse_ingredient_reply,
            || {
                ChatRequest::new(
                    self.settings.chat_model.as_str(),
                    vec![ChatMessage::user_with_image(
                        PHOTO_FALLBACK_PROMPT,
                        data_uri.as_str(),
                    )],
                )
                .with_max_tokens(PHOTO_FALLBACK_MAX_TOKENS)
            },
        )
        .await
        .map_err(LarderError::recognition)?;

        Ok(ingredient_list(reply))
    }

    /// Transcribe a recorded voice note.
    ///
    /// `extension` names the container format (e.g. `"wav"`). The audio is
    /// staged in a temporary file that is removed before this returns.
    pub async fn transcribe_audio(&self, audio: &[u8], extension: &str) -> Result<String> {
        let staged =
            media::write_temp_audio(audio, extension).map_err(LarderError::transcription)?;
        debug!(
            bytes = audio.len(),
            path = %staged.path().display(),
            "transcribing audio"
        );

        let request = TranscriptionRequest::new(
            self.settings.transcription_model.as_str(),
            staged.path(),
        )
        .with_language(self.settings.language.as_str());
        self.transcriber
            .transcribe(&request)
            .await
            .map_err(LarderError::transcription)
    }

    /// Pull ingredient names out of free text such as a transcript.
    pub async fn extract_ingredients_from_text(&self, text: &str) -> Result<Vec<String>> {
        debug!(chars = text.len(), "extracting ingredients from text");

        let structured = ChatRequest::new(
            self.settings.chat_model.as_str(),
            vec![
                ChatMessage::system(EXTRACTION_SYSTEM_PROMPT),
                ChatMessage::user(render_extraction_prompt(text)),
            ],
        )
        .with_max_tokens(EXTRACTION_MAX_TOKENS)
        .json_object();
        let reply = structured_or_fallback(
            self.chat.as_ref(),
            &structured,
            parse_ingredient_reply,
            || {
                ChatRequest::new(
                    self.settings.chat_model.as_str(),
                    vec![ChatMessage::user(render_extraction_fallback_prompt(text))],
                )
                .with_max_tokens(EXTRACTION_FALLBACK_MAX_TOKENS)
            },
        )
        .await
        .map_err(LarderError::extraction)?;

        Ok(ingredient_list(reply))
    }

    fn recipe_request(&self, prompt: String) -> ChatRequest {
        ChatRequest::new(
            self.settings.chat_model.as_str(),
            vec![
                ChatMessage::system(RECIPE_SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ],
        )
        .with_max_tokens(RECIPE_MAX_TOKENS)
        .with_temperature(self.settings.temperature)
    }
}

impl std::fmt::Debug for RecipeGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeGateway")
            .field("chat", &self.chat.name())
            .field("transcriber", &self.transcriber.name())
            .field("settings", &self.settings)
            .finish()
    }
}
