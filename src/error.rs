//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Restaurant not found")]
    RestaurantNotFound,
    #[error("validation errors")]
    Validation,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Singular `error` key for not-found, plural `errors` array for
            // validation. The asymmetry is part of the wire contract.
            AppError::RestaurantNotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": self.to_string() })),
            )
                .into_response(),
            AppError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "errors": [self.to_string()] })),
            )
                .into_response(),
            AppError::Db(e) => {
                tracing::error!(error = %e, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
