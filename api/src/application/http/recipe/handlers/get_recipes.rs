use axum::extract::{Query, State};
use larder_core::domain::recipe::{
    entities::{Difficulty, Recipe},
    ports::RecipeService,
    value_objects::GetRecipesFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetRecipesQuery {
    pub offset: Option<u32>,
    /// Page size, 20 by default and at most 100.
    pub limit: Option<u32>,
    /// One of Easy, Medium, Hard (case-insensitive).
    pub difficulty: Option<String>,
    pub ai_generated: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List recipes",
    description = "Returns the caller's recipes, newest first.",
    params(GetRecipesQuery),
    responses(
        (status = 200, body = GetRecipesResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_recipes(
    Query(query): Query<GetRecipesQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let difficulty = query
        .difficulty
        .as_deref()
        .map(str::parse::<Difficulty>)
        .transpose()
        .map_err(ApiError::from)?;

    let recipes = state
        .service
        .get_recipes(
            identity,
            GetRecipesFilter {
                offset: query.offset,
                limit: query.limit,
                difficulty,
                is_ai_generated: query.ai_generated,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse { data: recipes }))
}
