//! Per-user interaction state.
//!
//! A [`Session`] holds the ingredients gathered so far, the most recent
//! recipe and a flag that is raised while a gateway call is in flight. It
//! is owned by one caller and never persisted; the flag can be watched
//! from elsewhere through a [`ProcessingFlag`] handle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing::info;

use crate::difficulty::{Difficulty, estimate_difficulty};
use crate::error::Result;
use crate::gateway::RecipeGateway;
use crate::normalize::{IngredientName, normalize, split_typed_input};
use crate::pantry::IngredientSet;
use crate::recipe::Recipe;
use crate::shape::validate_shape;

/// Outcome of a voice capture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceCapture {
    /// What the speech-to-text service heard.
    pub transcript: String,
    /// Names that were new to the session.
    pub added: Vec<IngredientName>,
}

/// Read-only view of a session's processing flag.
///
/// Clones share the flag, so a presentation layer can show progress while
/// the session itself is borrowed by a running call.
#[derive(Debug, Clone, Default)]
pub struct ProcessingFlag(Arc<AtomicBool>);

impl ProcessingFlag {
    /// Whether a gateway call is in flight.
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Ingredients, current recipe and processing state for one user.
#[derive(Debug, Default)]
pub struct Session {
    ingredients: IngredientSet,
    recipe: Option<Recipe>,
    processing: ProcessingFlag,
}

/// Raises the processing flag and lowers it on drop, including when the
/// owning future is cancelled.
struct Busy<'a>(&'a AtomicBool);

impl<'a> Busy<'a> {
    fn enter(flag: &'a ProcessingFlag) -> Self {
        flag.0.store(true, Ordering::SeqCst);
        Self(&flag.0)
    }
}

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingredients(&self) -> &IngredientSet {
        &self.ingredients
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing.is_raised()
    }

    /// A handle that observes [`is_processing`](Self::is_processing)
    /// without borrowing the session.
    pub fn processing_flag(&self) -> ProcessingFlag {
        self.processing.clone()
    }

    /// Add comma-separated typed input. Returns the names that were new.
    pub fn add_typed(&mut self, text: &str) -> Vec<IngredientName> {
        self.add_names(split_typed_input(text))
    }

    /// Normalize raw names from any channel and add them.
    pub fn add_names<I, S>(&mut self, raw: I) -> Vec<IngredientName>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ingredients.extend(normalize(raw))
    }

    /// Recognize ingredients in a photo and add them.
    ///
    /// On error the session is left as it was.
    pub async fn add_from_photo(
        &mut self,
        gateway: &RecipeGateway,
        image: &[u8],
    ) -> Result<Vec<IngredientName>> {
        let raw = {
            let _busy = Busy::enter(&self.processing);
            gateway.recognize_ingredients(image).await?
        };
        let added = self.add_names(raw);
        info!(added = added.len(), "ingredients added from photo");
        Ok(added)
    }

    /// Transcribe a voice note, extract the ingredients it mentions and add
    /// them.
    ///
    /// A blank transcript adds nothing and makes no extraction call. On
    /// error the session is left as it was.
    pub async fn add_from_voice(
        &mut self,
        gateway: &RecipeGateway,
        audio: &[u8],
        extension: &str,
    ) -> Result<VoiceCapture> {
        let (transcript, raw) = {
            let _busy = Busy::enter(&self.processing);
            let transcript = gateway.transcribe_audio(audio, extension).await?;
            let raw = if transcript.trim().is_empty() {
                Vec::new()
            } else {
                gateway.extract_ingredients_from_text(&transcript).await?
            };
            (transcript, raw)
        };
        let added = self.add_names(raw);
        info!(added = added.len(), "ingredients added from voice");
        Ok(VoiceCapture { transcript, added })
    }

    /// Generate a recipe from the current ingredients and store it,
    /// replacing any previous one.
    pub async fn generate_recipe(&mut self, gateway: &RecipeGateway) -> Result<&Recipe> {
        let recipe = {
            let _busy = Busy::enter(&self.processing);
            gateway.generate_recipe(self.ingredients.names()).await?
        };
        let recipe = validate_shape(recipe);
        info!(structured = recipe.is_structured(), "recipe generated");
        let stored: &Recipe = self.recipe.insert(recipe);
        Ok(stored)
    }

    /// Difficulty of the current recipe, if there is one.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.recipe.as_ref().map(estimate_difficulty)
    }

    /// Remove one ingredient. Returns `false` if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.ingredients.remove(name)
    }

    /// Start over: drop all ingredients and the current recipe.
    pub fn clear(&mut self) {
        self.ingredients.clear();
        self.recipe = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_input_is_split_normalized_and_deduplicated() {
        let mut session = Session::new();
        let added = session.add_typed("chicken, rice!, a, ,the");
        assert_eq!(added, ["Chicken", "Rice"]);

        let added = session.add_typed("Rice, onions");
        assert_eq!(added, ["Onions"]);
        assert_eq!(session.ingredients().joined(), "Chicken, Rice, Onions");
    }

    #[test]
    fn remove_and_clear() {
        let mut session = Session::new();
        session.add_names(["leek", "potato"]);
        assert!(session.remove("Leek"));
        assert!(!session.remove("Leek"));

        session.clear();
        assert!(session.ingredients().is_empty());
        assert!(session.recipe().is_none());
        assert!(session.difficulty().is_none());
    }

    #[test]
    fn busy_guard_raises_and_resets_flag() {
        let session = Session::new();
        let watcher = session.processing_flag();
        {
            let _busy = Busy::enter(&session.processing);
            assert!(session.is_processing());
            assert!(watcher.is_raised());
        }
        assert!(!session.is_processing());
        assert!(!watcher.is_raised());
    }
}
