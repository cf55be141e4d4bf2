use uuid::Uuid;

use crate::domain::{
    common::{GenerationLimits, entities::app_errors::CoreError},
    recipe::entities::Difficulty,
};

pub const NO_INGREDIENTS_MESSAGE: &str = "No ingredients provided";

/// A request to generate one recipe from the caller's selected ingredients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRecipeInput {
    pub ingredients: Vec<String>,
    pub preferences: Option<String>,
}

impl GenerateRecipeInput {
    /// Preferences with surrounding whitespace removed; blank text counts as absent.
    pub fn preferences(&self) -> Option<&str> {
        self.preferences
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn validate(&self, limits: &GenerationLimits) -> Result<(), CoreError> {
        if self.ingredients.is_empty() {
            return Err(CoreError::Validation(NO_INGREDIENTS_MESSAGE.to_string()));
        }

        if self.ingredients.len() > limits.max_ingredients {
            return Err(CoreError::Validation(format!(
                "Too many ingredients: at most {} are allowed",
                limits.max_ingredients
            )));
        }

        for ingredient in &self.ingredients {
            if ingredient.trim().is_empty() {
                return Err(CoreError::Validation(
                    "Ingredient names must not be blank".to_string(),
                ));
            }
            if ingredient.chars().count() > limits.max_ingredient_length {
                return Err(CoreError::Validation(format!(
                    "Ingredient names must be at most {} characters",
                    limits.max_ingredient_length
                )));
            }
        }

        if let Some(preferences) = self.preferences()
            && preferences.chars().count() > limits.max_preferences_length
        {
            return Err(CoreError::Validation(format!(
                "Preferences must be at most {} characters",
                limits.max_preferences_length
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetRecipesFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub is_ai_generated: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct GetRecipeInput {
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct DeleteRecipeInput {
    pub recipe_id: Uuid,
}
