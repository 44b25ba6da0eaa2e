use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum ApiError {
    /// A required request field was absent. Carries the field name.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// The named resource does not exist. Carries the display name used in
    /// the response body, e.g. "User" or "Fav planet".
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A unique column collided on insert.
    #[error("constraint violation: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl ApiError {
    /// Classify a write failure: unique-index collisions become `Conflict`,
    /// everything else stays a `Database` error.
    pub fn from_write(e: SqlxError) -> Self {
        if let SqlxError::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return ApiError::Conflict(db_err.message().to_string());
        }
        ApiError::Database(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        // Missing-field errors keep the original API's `msg` key; the rest
        // use `error`.
        let (status, body) = match self {
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                json!({ "msg": format!("error {field} empty") }),
            ),
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{what} not found") }),
            ),
            ApiError::Conflict(detail) => (
                StatusCode::CONFLICT,
                json!({ "error": format!("constraint violation: {detail}") }),
            ),
            ApiError::Database(e) => {
                error!(error = %e, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
