use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(CoreError::Validation(format!(
                "difficulty must be one of Easy, Medium, Hard (got '{other}')"
            ))),
        }
    }
}

/// A recipe as produced by the language model, after structural validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cook_time: String,
    pub servings: i32,
    pub difficulty: Difficulty,
}

/// A stored recipe, owned by a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cook_time: String,
    pub servings: i32,
    pub difficulty: Difficulty,
    pub is_ai_generated: bool,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Builds the insert payload for a freshly generated recipe.
    pub fn from_generated(user_id: Uuid, generated: GeneratedRecipe) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            title: generated.title,
            description: generated.description,
            ingredients: generated.ingredients,
            instructions: generated.instructions,
            cook_time: generated.cook_time,
            servings: generated.servings,
            difficulty: generated.difficulty,
            is_ai_generated: true,
            created_at: now,
        }
    }
}
