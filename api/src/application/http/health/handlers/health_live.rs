use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LiveResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LiveResponse)
    )
)]
pub async fn health_live() -> Response<LiveResponse> {
    Response::OK(LiveResponse {
        status: "ok".to_string(),
    })
}
