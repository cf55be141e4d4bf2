use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use larder_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    /// A failure that carries diagnostic text, such as an upstream body or raw model output.
    #[error("{error}")]
    Upstream { error: String, details: String },

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream { .. } | ApiError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Upstream { error, details } => ApiErrorResponse {
                error,
                details: Some(details),
            },
            other => ApiErrorResponse {
                error: other.to_string(),
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => ApiError::BadRequest(message),
            CoreError::InvalidGeneratedRecipe { raw, .. } => ApiError::Upstream {
                error: "Failed to parse generated recipe".to_string(),
                details: raw,
            },
            CoreError::MissingApiKey => {
                ApiError::InternalServerError(CoreError::MissingApiKey.to_string())
            }
            CoreError::Gateway {
                message, details, ..
            } => ApiError::Upstream {
                error: message,
                details,
            },
            CoreError::Persistence(e) => {
                error!("Persistence failure: {}", e);
                ApiError::InternalServerError("Database error".to_string())
            }
            CoreError::NotFound => ApiError::NotFound("Recipe not found".to_string()),
            CoreError::InvalidToken => {
                ApiError::Unauthorized("Authentication required".to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();

        ApiError::BadRequest(messages.join("; "))
    }
}

/// JSON body extractor that runs `validator` rules before the handler sees the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_http_status() {
        let cases = [
            (CoreError::Validation("No ingredients provided".into()), StatusCode::BAD_REQUEST),
            (CoreError::invalid_generated_recipe("missing title", "{}"), StatusCode::INTERNAL_SERVER_ERROR),
            (CoreError::MissingApiKey, StatusCode::INTERNAL_SERVER_ERROR),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::InvalidToken, StatusCode::UNAUTHORIZED),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status(), status);
        }
    }

    #[test]
    fn test_gateway_error_keeps_upstream_body() {
        let api = ApiError::from(CoreError::Gateway {
            status: Some(500),
            message: "Failed to generate recipe".to_string(),
            details: "upstream exploded".to_string(),
        });

        assert_eq!(
            api,
            ApiError::Upstream {
                error: "Failed to generate recipe".to_string(),
                details: "upstream exploded".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_key_message() {
        assert_eq!(
            ApiError::from(CoreError::MissingApiKey),
            ApiError::InternalServerError("Missing OpenAI API key".to_string())
        );
    }
}
