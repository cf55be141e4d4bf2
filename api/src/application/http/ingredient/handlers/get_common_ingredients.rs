use larder_core::domain::ingredient::COMMON_INGREDIENTS;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCommonIngredientsResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/common",
    tag = "ingredient",
    summary = "Popular ingredients",
    description = "Ingredients offered for one-click selection.",
    responses(
        (status = 200, body = GetCommonIngredientsResponse)
    )
)]
pub async fn get_common_ingredients() -> Response<GetCommonIngredientsResponse> {
    Response::OK(GetCommonIngredientsResponse {
        data: COMMON_INGREDIENTS.iter().map(|i| i.to_string()).collect(),
    })
}
