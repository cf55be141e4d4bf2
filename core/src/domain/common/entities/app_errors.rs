use thiserror::Error;

/// Broad failure classes surfaced to callers of the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Gateway,
    Persistence,
    NotFound,
    Unauthorized,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    /// The model answered, but its text is not a usable recipe.
    #[error("Failed to parse generated recipe: {reason}")]
    InvalidGeneratedRecipe { reason: String, raw: String },

    #[error("Missing OpenAI API key")]
    MissingApiKey,

    #[error("LLM gateway error: {message}")]
    Gateway {
        status: Option<u16>,
        message: String,
        details: String,
    },

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Not found")]
    NotFound,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CoreError::Validation(_) | CoreError::InvalidGeneratedRecipe { .. } => {
                ErrorCategory::Validation
            }
            CoreError::MissingApiKey | CoreError::Gateway { .. } => ErrorCategory::Gateway,
            CoreError::Persistence(_) => ErrorCategory::Persistence,
            CoreError::NotFound => ErrorCategory::NotFound,
            CoreError::InvalidToken => ErrorCategory::Unauthorized,
            CoreError::InternalServerError => ErrorCategory::Internal,
        }
    }

    pub fn invalid_generated_recipe(reason: impl Into<String>, raw: &str) -> Self {
        CoreError::InvalidGeneratedRecipe {
            reason: reason.into(),
            raw: raw.to_string(),
        }
    }
}
