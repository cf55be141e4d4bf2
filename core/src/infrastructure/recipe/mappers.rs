use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Difficulty, Recipe},
};
use crate::entity::recipes::{ActiveModel as RecipeActiveModel, Model as RecipeModel};

fn string_list(column: &str, value: &serde_json::Value) -> Result<Vec<String>, CoreError> {
    serde_json::from_value(value.clone()).map_err(|e| {
        CoreError::Persistence(format!("column {column} is not a list of strings: {e}"))
    })
}

impl TryFrom<&RecipeModel> for Recipe {
    type Error = CoreError;

    fn try_from(model: &RecipeModel) -> Result<Self, Self::Error> {
        let difficulty = model
            .difficulty
            .parse::<Difficulty>()
            .map_err(|e| CoreError::Persistence(e.to_string()))?;

        Ok(Recipe {
            id: model.id,
            user_id: model.user_id,
            title: model.title.clone(),
            description: model.description.clone(),
            ingredients: string_list("ingredients", &model.ingredients)?,
            instructions: string_list("instructions", &model.instructions)?,
            cook_time: model.cook_time.clone(),
            servings: model.servings,
            difficulty,
            is_ai_generated: model.is_ai_generated,
            created_at: model.created_at.with_timezone(&Utc),
        })
    }
}

impl TryFrom<RecipeModel> for Recipe {
    type Error = CoreError;

    fn try_from(model: RecipeModel) -> Result<Self, Self::Error> {
        Recipe::try_from(&model)
    }
}

impl From<Recipe> for RecipeActiveModel {
    fn from(recipe: Recipe) -> Self {
        RecipeActiveModel {
            id: Set(recipe.id),
            user_id: Set(recipe.user_id),
            title: Set(recipe.title),
            description: Set(recipe.description),
            ingredients: Set(serde_json::Value::from(recipe.ingredients)),
            instructions: Set(serde_json::Value::from(recipe.instructions)),
            cook_time: Set(recipe.cook_time),
            servings: Set(recipe.servings),
            difficulty: Set(recipe.difficulty.as_str().to_string()),
            is_ai_generated: Set(recipe.is_ai_generated),
            created_at: Set(recipe.created_at.into()),
        }
    }
}
