use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LimitsConfig {
    pub max_ingredients: usize,
    pub max_ingredient_length: usize,
    pub max_preferences_length: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub model: String,
    pub api_key_configured: bool,
    pub limits: LimitsConfig,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Public configuration",
    responses(
        (status = 200, body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    let args = &state.args;
    let limits = state.service.limits();

    Response::OK(ConfigResponse {
        model: args.llm.model.clone(),
        api_key_configured: args
            .llm
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty()),
        limits: LimitsConfig {
            max_ingredients: limits.max_ingredients,
            max_ingredient_length: limits.max_ingredient_length,
            max_preferences_length: limits.max_preferences_length,
        },
    })
}
