use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The preference names no category and no fallback category is configured
    #[error("Invalid preference: {0}")]
    InvalidPreference(String),

    /// The catalog has no entries for the requested category
    #[error("No recommendations available for category '{category}'")]
    NoCandidatesAvailable { category: String },

    /// The text-generation capability failed or timed out
    #[error("Generation unavailable: {0}")]
    GenerationUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the caller may retry the same request later
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AppError::GenerationUnavailable(_) | AppError::Database(_) | AppError::Cache(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) | AppError::InvalidPreference(msg) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NoCandidatesAvailable { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::GenerationUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
            AppError::Database(_) | AppError::Cache(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
