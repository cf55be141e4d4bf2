use super::handlers::delete_recipe::{__path_delete_recipe, delete_recipe};
use super::handlers::generate_recipe::{__path_generate_recipe, generate_recipe};
use super::handlers::get_recipe::{__path_get_recipe, get_recipe};
use super::handlers::get_recipes::{__path_get_recipes, get_recipes};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe, get_recipes, get_recipe, delete_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/recipes/generate"),
            post(generate_recipe),
        )
        .route(&format!("{root_path}/recipes"), get(get_recipes))
        .route(
            &format!("{root_path}/recipes/{{recipe_id}}"),
            get(get_recipe).delete(delete_recipe),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
