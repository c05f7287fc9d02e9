//! Recipe shape validation.

use crate::recipe::{Recipe, RecipeCard};

/// Fill the required card fields and drop blank list entries.
///
/// Text recipes pass through unchanged. For cards, a missing `title`,
/// `ingredients` or `instructions` gets a placeholder noting the field was
/// not provided; `ingredients` and `instructions` lose empty or
/// whitespace-only entries. Optional fields are left alone.
pub fn validate_shape(recipe: Recipe) -> Recipe {
    match recipe {
        Recipe::Structured(card) => Recipe::Structured(validate_card(card)),
        text @ Recipe::Text(_) => text,
    }
}

fn validate_card(mut card: RecipeCard) -> RecipeCard {
    card.title.get_or_insert_with(|| placeholder("title"));
    card.ingredients = Some(required_list(card.ingredients.take(), "ingredients"));
    card.instructions = Some(required_list(card.instructions.take(), "instructions"));
    card
}

fn required_list(list: Option<Vec<String>>, field: &str) -> Vec<String> {
    match list {
        Some(entries) => entries
            .into_iter()
            .filter(|entry| !entry.trim().is_empty())
            .collect(),
        None => vec![placeholder(field)],
    }
}

fn placeholder(field: &str) -> String {
    format!("No {field} provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(json: &str) -> Recipe {
        Recipe::Structured(RecipeCard::from_reply(json).unwrap())
    }

    #[test]
    fn empty_card_gets_placeholders() {
        let validated = validate_shape(card("{}"));
        let card = validated.as_card().unwrap();
        assert_eq!(card.title.as_deref(), Some("No title provided"));
        assert_eq!(card.ingredients.as_deref(), Some(&["No ingredients provided".to_string()][..]));
        assert_eq!(card.instructions.as_deref(), Some(&["No instructions provided".to_string()][..]));
        assert!(card.description.is_none());
        assert!(card.tips.is_none());
    }

    #[test]
    fn blank_entries_are_removed() {
        let validated = validate_shape(card(
            r#"{"ingredients": ["", "  ", "Egg"], "instructions": ["Boil", ""]}"#,
        ));
        let card = validated.as_card().unwrap();
        assert_eq!(card.ingredients.as_deref().unwrap(), ["Egg"]);
        assert_eq!(card.instructions.as_deref().unwrap(), ["Boil"]);
    }

    #[test]
    fn present_but_empty_lists_stay_empty() {
        let validated = validate_shape(card(r#"{"ingredients": [], "instructions": ["\t"]}"#));
        let card = validated.as_card().unwrap();
        assert_eq!(card.ingredient_count(), 0);
        assert_eq!(card.instruction_count(), 0);
    }

    #[test]
    fn optional_fields_untouched() {
        let validated = validate_shape(card(
            r#"{"title": "Tea", "tips": ["", "Let it steep"], "servings": 2}"#,
        ));
        let card = validated.as_card().unwrap();
        assert_eq!(card.title.as_deref(), Some("Tea"));
        assert_eq!(card.tips.as_deref().unwrap(), ["", "Let it steep"]);
        assert_eq!(card.servings.as_deref(), Some("2"));
    }

    #[test]
    fn text_passes_through() {
        let text = Recipe::Text("Boil water.\n\nAdd pasta.".into());
        assert_eq!(validate_shape(text.clone()), text);
    }

    #[test]
    fn validation_is_stable() {
        let once = validate_shape(card(r#"{"ingredients": ["Egg", " "]}"#));
        assert_eq!(validate_shape(once.clone()), once);
    }
}
