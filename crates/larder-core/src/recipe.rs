//! Recipe model returned by the gateway.
//!
//! The model is asked for a JSON card, but field types vary between
//! replies (`"servings": 4` vs `"servings": "4 people"`), so the card is read
//! leniently: scalars become text and list fields accept a single string.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A generated recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Recipe {
    /// A reply that matched the card schema.
    Structured(RecipeCard),
    /// Free-text instructions from the fallback path.
    Text(String),
}

impl Recipe {
    pub fn as_card(&self) -> Option<&RecipeCard> {
        match self {
            Self::Structured(card) => Some(card),
            Self::Text(_) => None,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}

/// Structured recipe fields. Every field may be absent in a raw reply;
/// [`validate_shape`](crate::shape::validate_shape) fills the required ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeCard {
    #[serde(default, deserialize_with = "lenient_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,

    #[serde(default, deserialize_with = "lenient_list")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_list")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_list")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
}

impl RecipeCard {
    /// Read a card from a model reply.
    ///
    /// Returns `None` unless the reply is a JSON object whose fields have
    /// usable shapes.
    pub fn from_reply(reply: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(reply).ok()? {
            value @ Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        }
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.as_ref().map_or(0, Vec::len)
    }

    pub fn instruction_count(&self) -> usize {
        self.instructions.as_ref().map_or(0, Vec::len)
    }
}

/// Render a JSON scalar as text. Objects and arrays keep their JSON form.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(_) | Value::Object(_) => {
            Err(de::Error::custom("expected a text field, found a collection"))
        }
        scalar => Ok(scalar_text(scalar)),
    }
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(items) => Ok(Some(items.into_iter().filter_map(scalar_text).collect())),
        Value::String(s) => Ok(Some(vec![s])),
        _ => Err(de::Error::custom("expected a list of text entries")),
    }
}
