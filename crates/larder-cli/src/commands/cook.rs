//! `larder cook` -- gather ingredients and generate a recipe.
//!
//! Ingredients can come from any mix of typed text, a photo and a recorded
//! voice note. Each input is processed in that order and merged into one
//! session before the recipe is requested.
//!
//! # Examples
//!
//! ```text
//! larder cook --ingredients "chicken, rice, onions"
//! larder cook --photo fridge.jpg --audio note.wav
//! larder cook -i "eggs" --json
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgGroup, Args};
use serde::Serialize;
use tracing::info;

use larder_core::{
    Difficulty, IngredientSet, LarderConfig, Recipe, RecipeGateway, Session, render_recipe,
};

/// Extension assumed for voice notes whose path has none.
const DEFAULT_AUDIO_EXTENSION: &str = "wav";

/// Arguments for the `larder cook` subcommand.
#[derive(Args)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(true)
        .args(["ingredients", "photo", "audio"])
))]
pub struct CookArgs {
    /// Comma-separated ingredient list.
    #[arg(short, long)]
    pub ingredients: Option<String>,

    /// Photo of ingredients (PNG, JPEG, GIF or WebP).
    #[arg(short, long)]
    pub photo: Option<PathBuf>,

    /// Voice note describing the ingredients.
    #[arg(short, long)]
    pub audio: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CookOutput<'a> {
    ingredients: &'a IngredientSet,
    recipe: &'a Recipe,
    difficulty: Option<Difficulty>,
}

/// Run the cook command.
pub async fn run(args: CookArgs, config: &LarderConfig) -> anyhow::Result<()> {
    let gateway = RecipeGateway::from_config(config)?;
    let mut session = Session::new();

    if let Some(text) = args.ingredients.as_deref() {
        let added = session.add_typed(text);
        info!(added = added.len(), "ingredients added from text");
    }

    if let Some(path) = args.photo.as_deref() {
        let image = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read photo {}", path.display()))?;
        let added = session.add_from_photo(&gateway, &image).await?;
        if !args.json {
            println!("Found ingredients: {}", join(&added));
        }
    }

    if let Some(path) = args.audio.as_deref() {
        let audio = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read audio {}", path.display()))?;
        let capture = session
            .add_from_voice(&gateway, &audio, audio_extension(path))
            .await?;
        if !args.json {
            println!("You said: \"{}\"", capture.transcript.trim());
            println!("Added ingredients: {}", join(&capture.added));
        }
    }

    if session.ingredients().is_empty() {
        anyhow::bail!("no usable ingredients found in the given input");
    }

    session.generate_recipe(&gateway).await?;
    let Some(recipe) = session.recipe() else {
        anyhow::bail!("no recipe was produced");
    };

    if args.json {
        let output = CookOutput {
            ingredients: session.ingredients(),
            recipe,
            difficulty: session.difficulty(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("Ingredients: {}", session.ingredients().joined());
    println!();
    println!("{}", render_recipe(recipe).trim_end());
    if let Some(difficulty) = session.difficulty() {
        println!();
        println!("Difficulty: {difficulty}");
    }

    Ok(())
}

fn join<T: AsRef<str>>(names: &[T]) -> String {
    if names.is_empty() {
        return "(none)".into();
    }
    names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

fn audio_extension(path: &Path) -> &str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .unwrap_or(DEFAULT_AUDIO_EXTENSION)
}
