use axum::extract::{Path, State};
use larder_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GetRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = GetRecipeResponse),
        (status = 404, body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe(identity, GetRecipeInput { recipe_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeResponse { data: recipe }))
}
