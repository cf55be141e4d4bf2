use axum::extract::State;
use larder_core::domain::{
    common::entities::app_errors::ErrorCategory,
    ingredient::IngredientSelection,
    recipe::{entities::Recipe, ports::RecipeService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::GenerateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipeResponse {
    pub recipe: Recipe,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate recipe",
    description = "Asks the language model for a recipe built from the selected ingredients and stores it for the caller.",
    request_body = GenerateRecipeValidator,
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, description = "No or invalid ingredients", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ApiErrorResponse),
        (status = 500, description = "Gateway, parse or persistence failure", body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let input = payload
        .ingredients
        .into_iter()
        .collect::<IngredientSelection>()
        .into_generate_input(payload.preferences)
        .map_err(ApiError::from)?;

    let recipe = state
        .service
        .generate_recipe(identity, input)
        .await
        .map_err(|e| match e.category() {
            ErrorCategory::Persistence => {
                ApiError::InternalServerError("Failed to save recipe".to_string())
            }
            _ => ApiError::from(e),
        })?;

    Ok(Response::OK(GenerateRecipeResponse { recipe }))
}
