use axum::extract::{Path, State};
use larder_core::domain::recipe::{ports::RecipeService, value_objects::DeleteRecipeInput};
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Delete recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, body = ApiErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_recipe(identity, DeleteRecipeInput { recipe_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
