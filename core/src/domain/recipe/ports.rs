use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{DeleteRecipeInput, GenerateRecipeInput, GetRecipeInput, GetRecipesFilter},
    },
};

/// Repository trait for stored recipes
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Returns `false` when no recipe with that id belongs to the user.
    fn delete_recipe(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// LLM Client trait for calling chat-completion models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one system instruction and one user prompt, returning the assistant's text.
    fn generate_with_text(
        &self,
        system_instruction: String,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        identity: Identity,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_recipes(
        &self,
        identity: Identity,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        identity: Identity,
        input: GetRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(
        &self,
        identity: Identity,
        input: DeleteRecipeInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
