use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use larder_core::domain::authentication::{
    ports::AuthService,
    value_objects::{AuthorizeRequestInput, Identity},
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

const AUTHENTICATION_REQUIRED: &str = "Authentication required";

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized(AUTHENTICATION_REQUIRED.to_string()))?;

    Ok(bearer.token().to_string())
}

/// Resolves the bearer token into an [`Identity`] stored in the request extensions.
///
/// Requests without a valid token continue untouched; handlers that need a caller use
/// [`RequiredIdentity`].
pub async fn auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if let Ok(token) = extract_token_from_bearer(&mut parts).await {
        match state
            .service
            .authorize_request(AuthorizeRequestInput { token })
            .await
        {
            Ok(output) => {
                parts.extensions.insert(output.identity);
            }
            Err(e) => debug!("Bearer token rejected: {}", e),
        }
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Extractor for routes that only make sense for a signed-in user.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| ApiError::Unauthorized(AUTHENTICATION_REQUIRED.to_string()))
    }
}
