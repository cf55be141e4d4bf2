use super::handlers::get_common_ingredients::{
    __path_get_common_ingredients, get_common_ingredients,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_common_ingredients))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(
        &format!("{root_path}/ingredients/common"),
        get(get_common_ingredients),
    )
}
