use std::sync::Arc;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, ports::RecipeRepository, value_objects::GetRecipesFilter},
};
use crate::entity::recipes::{
    ActiveModel as RecipeActiveModel, Column as RecipeColumn, Entity as RecipeEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresRecipeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let created = RecipeEntity::insert(RecipeActiveModel::from(recipe))
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Recipe::try_from(created)
    }

    async fn get_by_id(&self, recipe_id: Uuid, user_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        RecipeEntity::find()
            .filter(RecipeColumn::Id.eq(recipe_id))
            .filter(RecipeColumn::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get recipe by id: {}", e);
                CoreError::Persistence(e.to_string())
            })?
            .map(Recipe::try_from)
            .transpose()
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> Result<Vec<Recipe>, CoreError> {
        let mut query = RecipeEntity::find().filter(RecipeColumn::UserId.eq(user_id));

        if let Some(difficulty) = filter.difficulty {
            query = query.filter(RecipeColumn::Difficulty.eq(difficulty.as_str()));
        }

        if let Some(is_ai_generated) = filter.is_ai_generated {
            query = query.filter(RecipeColumn::IsAiGenerated.eq(is_ai_generated));
        }

        query = query.order_by_desc(RecipeColumn::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        query
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch recipes by user: {}", e);
                CoreError::Persistence(e.to_string())
            })?
            .iter()
            .map(Recipe::try_from)
            .collect()
    }

    async fn delete_recipe(&self, recipe_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let result = RecipeEntity::delete_many()
            .filter(RecipeColumn::Id.eq(recipe_id))
            .filter(RecipeColumn::UserId.eq(user_id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}
