//! Recipe pipeline for larder.
//!
//! Ingredients arrive from typed text, photos and voice notes, are
//! normalized into a session's [`IngredientSet`], and are turned into a
//! recipe by the model service behind [`RecipeGateway`].
//!
//! # Modules
//!
//! - [`normalize`] -- ingredient name cleanup and plausibility checks
//! - [`pantry`] -- the ordered ingredient set and static catalogs
//! - [`gateway`] -- model calls with JSON-then-text recovery
//! - [`recipe`], [`shape`], [`difficulty`], [`display`] -- recipe model and
//!   post-processing
//! - [`session`] -- per-user state tying the pieces together
//! - [`config`] -- JSON configuration

pub mod config;
pub mod difficulty;
pub mod display;
pub mod error;
pub mod gateway;
pub mod normalize;
pub mod pantry;
pub mod recipe;
pub mod session;
pub mod shape;

pub use config::{GatewaySettings, LarderConfig};
pub use difficulty::{Difficulty, estimate_difficulty};
pub use display::{format_recipe_text, nutritional_tips, render_recipe};
pub use error::{LarderError, Result};
pub use gateway::RecipeGateway;
pub use normalize::{IngredientName, is_valid_ingredient, normalize, normalize_one};
pub use pantry::{IngredientSet, chunk_ingredients, ingredient_suggestions};
pub use recipe::{Recipe, RecipeCard};
pub use session::{ProcessingFlag, Session, VoiceCapture};
pub use shape::validate_shape;
