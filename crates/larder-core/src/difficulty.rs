//! Coarse difficulty label derived from recipe size.

use std::fmt;

use serde::Serialize;

use crate::recipe::Recipe;

/// Upper bound (inclusive) on ingredients and steps for [`Difficulty::Easy`].
pub const EASY_MAX: usize = 5;
/// Upper bound (inclusive) on ingredients and steps for [`Difficulty::Medium`].
pub const MEDIUM_MAX: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimate how hard a recipe is from its ingredient and step counts.
///
/// Text recipes are always [`Difficulty::Medium`].
pub fn estimate_difficulty(recipe: &Recipe) -> Difficulty {
    let Some(card) = recipe.as_card() else {
        return Difficulty::Medium;
    };
    let ingredients = card.ingredient_count();
    let instructions = card.instruction_count();

    if ingredients <= EASY_MAX && instructions <= EASY_MAX {
        Difficulty::Easy
    } else if ingredients <= MEDIUM_MAX && instructions <= MEDIUM_MAX {
        Difficulty::Medium
    } else {
        Difficulty::Advanced
    }
}
