//! Source configuration routes.
//!
//! The remote URL is process-wide state. A change is only committed after
//! a validation fetch has run one full resolve+parse cycle against the
//! candidate descriptor; a failed fetch leaves the previous configuration
//! active.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use pharmadash_shared::AppError;

use crate::{AppState, pipeline, routes::error_response};

/// Creates the source configuration routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/config/source-url",
        get(get_source_config).post(set_source_config),
    )
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Request body for updating the source URL.
#[derive(Debug, Deserialize)]
pub struct SetSourceRequest {
    /// New share-link URL, or empty/absent to clear and use the local file.
    #[serde(default)]
    pub url: Option<String>,
}

/// Response for the current source configuration.
#[derive(Debug, Serialize)]
pub struct SourceConfigResponse {
    /// Active remote URL, if any.
    pub remote_url: Option<String>,
    /// Whether the local fallback file exists.
    pub has_local_file: bool,
    /// Which source a resolve would use right now.
    pub data_source: &'static str,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /config/source-url
async fn get_source_config(State(state): State<AppState>) -> Json<SourceConfigResponse> {
    Json(SourceConfigResponse {
        remote_url: state.store.snapshot().remote_url,
        has_local_file: state.store.local_file_exists(),
        data_source: state.store.data_source_label(),
    })
}

/// POST /config/source-url
///
/// Setting a URL performs the validation fetch before persisting; clearing
/// always succeeds and falls back to the local file.
async fn set_source_config(
    State(state): State<AppState>,
    Json(body): Json<SetSourceRequest>,
) -> impl IntoResponse {
    let url = body.url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());

    let Some(url) = url else {
        state.store.commit(None);
        info!("remote source URL cleared, using local file");
        return (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Remote URL cleared. Will use local file.",
            })),
        )
            .into_response();
    };

    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return error_response(&AppError::InvalidConfiguration(format!(
            "unrecognized URL scheme: {url}"
        )));
    }

    // Validation fetch against the candidate config; the active config
    // stays readable (and unchanged) while this runs.
    let candidate = state.store.candidate(Some(url.clone()));
    let rows = match pipeline::load_raw_rows_from(&state, &candidate).await {
        Ok(rows) => rows,
        Err(e) => {
            return error_response(&AppError::InvalidConfiguration(format!(
                "validation fetch failed, previous configuration kept: {e}"
            )));
        }
    };

    state.store.commit(Some(url.clone()));
    info!(url = %url, rows = rows.len(), "remote source URL updated");

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": format!("Remote URL updated successfully. Found {} records.", rows.len()),
            "remote_url": url,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::create_router;
    use crate::routes::testing::state_with_remote;

    async fn post_url(app: Router, url: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::post("/api/config/source-url")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(format!(r#"{{"url":"{url}"}}"#)))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_rejected_scheme_keeps_previous_url() {
        let state = state_with_remote(Some("https://example.com/current.csv"));
        let store = state.store.clone();
        let app = create_router(state);

        let (status, body) = post_url(app, "ftp://example.com/sales.csv").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_CONFIGURATION");
        assert_eq!(
            store.snapshot().remote_url.as_deref(),
            Some("https://example.com/current.csv")
        );
    }

    #[tokio::test]
    async fn test_failed_validation_fetch_keeps_previous_url() {
        // The candidate host is unresolvable and the local fallback file
        // does not exist, so the validation fetch must fail and the active
        // URL must survive untouched.
        let state = state_with_remote(Some("https://example.com/current.csv"));
        let store = state.store.clone();
        let app = create_router(state);

        let (status, body) = post_url(app, "https://csv.invalid/sales.csv").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_CONFIGURATION");
        assert_eq!(
            store.snapshot().remote_url.as_deref(),
            Some("https://example.com/current.csv")
        );
    }

    #[tokio::test]
    async fn test_clearing_url_skips_validation() {
        let state = state_with_remote(Some("https://example.com/current.csv"));
        let store = state.store.clone();
        let app = create_router(state);

        let (status, body) = post_url(app, "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(store.snapshot().remote_url, None);
    }
}
