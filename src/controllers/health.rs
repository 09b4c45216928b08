use axum::{http::StatusCode, response::IntoResponse};

use crate::error::AppError;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Fallback for unknown routes
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}
