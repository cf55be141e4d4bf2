use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::value_objects::{GenerateRecipeInput, NO_INGREDIENTS_MESSAGE},
};

/// Quick-add ingredients offered next to the free-text input.
pub const COMMON_INGREDIENTS: [&str; 20] = [
    "Chicken",
    "Beef",
    "Fish",
    "Rice",
    "Pasta",
    "Tomatoes",
    "Onions",
    "Garlic",
    "Bell Peppers",
    "Mushrooms",
    "Cheese",
    "Eggs",
    "Potatoes",
    "Carrots",
    "Spinach",
    "Olive Oil",
    "Salt",
    "Pepper",
    "Herbs",
    "Lemon",
];

/// The user's current pick of ingredients.
///
/// Entries are trimmed, never blank, unique (case-sensitive) and kept in the order they were
/// first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSelection {
    items: Vec<String>,
}

impl IngredientSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the ingredient was not already selected.
    pub fn add(&mut self, ingredient: impl AsRef<str>) -> bool {
        let ingredient = ingredient.as_ref().trim();
        if ingredient.is_empty() || self.contains(ingredient) {
            return false;
        }

        self.items.push(ingredient.to_string());
        true
    }

    /// Returns `true` when the ingredient was selected.
    pub fn remove(&mut self, ingredient: &str) -> bool {
        let ingredient = ingredient.trim();
        let before = self.items.len();
        self.items.retain(|item| item != ingredient);
        self.items.len() != before
    }

    /// Adds the ingredient, or removes it when already selected. Returns whether it is now selected.
    pub fn toggle(&mut self, ingredient: &str) -> bool {
        if self.remove(ingredient) {
            return false;
        }
        self.add(ingredient)
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.items.iter().any(|item| item == ingredient)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Hands the selection over to generation. An empty selection is refused.
    pub fn into_generate_input(
        self,
        preferences: Option<String>,
    ) -> Result<GenerateRecipeInput, CoreError> {
        if self.items.is_empty() {
            return Err(CoreError::Validation(NO_INGREDIENTS_MESSAGE.to_string()));
        }

        Ok(GenerateRecipeInput {
            ingredients: self.items,
            preferences,
        })
    }
}

impl<S: AsRef<str>> FromIterator<S> for IngredientSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for ingredient in iter {
            selection.add(ingredient);
        }
        selection
    }
}
