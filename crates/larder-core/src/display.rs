//! Plain-text presentation of recipes and static advice.

use std::fmt::Write as _;

use crate::recipe::{Recipe, RecipeCard};

/// Title used when a card carries none.
pub const DEFAULT_TITLE: &str = "Suggested Recipe";

/// Shown in place of an empty text recipe.
pub const NO_RECIPE: &str = "No recipe available";

/// Tidy a free-text recipe for display.
///
/// Each `"\n\n"` becomes `"\n"` and markdown bold markers are removed.
pub fn format_recipe_text(text: &str) -> String {
    if text.is_empty() {
        return NO_RECIPE.to_string();
    }
    text.replace("\n\n", "\n").replace("**", "")
}

/// Render a recipe as plain text.
pub fn render_recipe(recipe: &Recipe) -> String {
    match recipe {
        Recipe::Structured(card) => render_card(card),
        Recipe::Text(text) => format_recipe_text(text),
    }
}

fn render_card(card: &RecipeCard) -> String {
    let mut out = String::new();
    let title = card.title.as_deref().unwrap_or(DEFAULT_TITLE);
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));

    for (label, value) in [
        ("Description", &card.description),
        ("Preparation Time", &card.prep_time),
        ("Servings", &card.servings),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            let _ = writeln!(out, "{label}: {value}");
        }
    }

    if let Some(ingredients) = non_empty(&card.ingredients) {
        let _ = writeln!(out, "\nIngredients:");
        for ingredient in ingredients {
            let _ = writeln!(out, "  • {ingredient}");
        }
    }

    if let Some(instructions) = non_empty(&card.instructions) {
        let _ = writeln!(out, "\nInstructions:");
        for (step, instruction) in instructions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {instruction}", step + 1);
        }
    }

    if let Some(tips) = non_empty(&card.tips) {
        let _ = writeln!(out, "\nTips:");
        for tip in tips {
            let _ = writeln!(out, "  - {tip}");
        }
    }

    out
}

fn non_empty(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref().filter(|items| !items.is_empty())
}

/// General nutrition advice for elderly cooks.
pub fn nutritional_tips() -> &'static [&'static str] {
    &[
        "Include protein in every meal for muscle health",
        "Choose colorful vegetables for vitamins and minerals",
        "Stay hydrated by drinking water throughout the day",
        "Include calcium-rich foods for bone health",
        "Limit sodium to support heart health",
        "Include fiber-rich foods for digestive health",
    ]
}
