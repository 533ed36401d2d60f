//! API route definitions.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use pharmadash_shared::AppError;

use crate::AppState;

pub mod config;
pub mod health;
pub mod reports;
pub mod sales;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(sales::routes())
        .merge(config::routes())
        .merge(reports::routes())
}

/// Converts a pipeline failure into an error payload.
///
/// Pipeline failures never crash the serving process; they surface as a
/// non-success status with a human-readable message.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}
