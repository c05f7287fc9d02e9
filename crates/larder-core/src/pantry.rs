//! The session's ingredient set and static ingredient catalogs.

use serde::Serialize;

use crate::normalize::IngredientName;

/// Default batch size for [`chunk_ingredients`].
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Insertion-ordered set of unique ingredient names.
///
/// Uniqueness is case-sensitive on the capitalized form, which is the only
/// form [`IngredientName`] can take.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IngredientSet {
    names: Vec<IngredientName>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch with union semantics. Returns the names that were not
    /// already present, in the order they were added.
    pub fn extend<I>(&mut self, batch: I) -> Vec<IngredientName>
    where
        I: IntoIterator<Item = IngredientName>,
    {
        let mut added = Vec::new();
        for name in batch {
            if !self.names.contains(&name) {
                self.names.push(name.clone());
                added.push(name);
            }
        }
        added
    }

    /// Remove one name. Returns `false` if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n.as_str() == name) {
            Some(idx) => {
                self.names.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IngredientName> {
        self.names.iter()
    }

    /// The names in insertion order.
    pub fn names(&self) -> &[IngredientName] {
        &self.names
    }

    /// Names joined with `", "`, as used in prompts and listings.
    pub fn joined(&self) -> String {
        join_names(&self.names)
    }
}

impl<'a> IntoIterator for &'a IngredientSet {
    type Item = &'a IngredientName;
    type IntoIter = std::slice::Iter<'a, IngredientName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Join names with `", "`.
pub fn join_names(names: &[IngredientName]) -> String {
    names
        .iter()
        .map(IngredientName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split a list into consecutive batches of at most `size` names.
///
/// A `size` of zero is treated as one.
pub fn chunk_ingredients(
    names: &[IngredientName],
    size: usize,
) -> impl Iterator<Item = &[IngredientName]> {
    names.chunks(size.max(1))
}

/// Common ingredients offered as suggestions to elderly cooks.
pub fn ingredient_suggestions() -> &'static [&'static str] {
    &[
        "Chicken",
        "Beef",
        "Fish",
        "Eggs",
        "Rice",
        "Pasta",
        "Bread",
        "Onions",
        "Garlic",
        "Tomatoes",
        "Potatoes",
        "Carrots",
        "Broccoli",
        "Bell peppers",
        "Spinach",
        "Lettuce",
        "Mushrooms",
        "Cheese",
        "Milk",
        "Butter",
        "Olive oil",
        "Salt",
        "Pepper",
        "Herbs",
        "Bananas",
        "Apples",
        "Lemons",
        "Oranges",
    ]
}
