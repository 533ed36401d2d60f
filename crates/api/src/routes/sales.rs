//! Sales data routes: the full normalized export and the filtered query.

use std::collections::BTreeSet;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};

use pharmadash_core::normalize::{Transaction, normalize};
use pharmadash_core::query::{FilterSpec, filter};
use pharmadash_shared::AppError;

use crate::{AppState, pipeline, routes::error_response};

const DEFAULT_LIMIT: usize = 100;
const MAX_LIMIT: usize = 1000;

/// Creates the sales data routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sales-data", get(get_sales_data))
        .route("/sales-query", get(get_sales_query))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for the filtered query endpoint.
#[derive(Debug, Deserialize)]
pub struct SalesQueryParams {
    /// Years to match (comma-separated).
    pub years: Option<String>,
    /// Months to match (comma-separated, 1-12).
    pub months: Option<String>,
    /// Location names to match (comma-separated).
    pub locations: Option<String>,
    /// Maximum matches to return.
    pub limit: Option<usize>,
    /// Number of matches to skip.
    pub offset: Option<usize>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for the filtered query endpoint.
#[derive(Debug, Serialize)]
pub struct SalesQueryResponse {
    /// Matches within the pagination window, in normalizer order.
    pub data: Vec<Transaction>,
    /// Count of all matches before pagination.
    pub total_filtered: usize,
    /// Number of matches in this page.
    pub returned_count: usize,
    /// Whether more matches exist past this page.
    pub has_more: bool,
    /// Echoed offset.
    pub offset: usize,
    /// Echoed limit.
    pub limit: usize,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /sales-data
///
/// Full normalized export. Runs the entire pipeline per request so the
/// totals always reconcile with the verification endpoint.
async fn get_sales_data(State(state): State<AppState>) -> impl IntoResponse {
    let rows = match pipeline::load_raw_rows(&state).await {
        Ok(rows) => rows,
        Err(e) => return error_response(&e),
    };

    let outcome = normalize(&rows);
    (StatusCode::OK, Json(outcome.transactions)).into_response()
}

/// GET /sales-query
///
/// Filtered, paginated query. Requires at least one populated predicate
/// set; an unconstrained query returns an empty result rather than the
/// whole dataset.
async fn get_sales_query(
    State(state): State<AppState>,
    Query(params): Query<SalesQueryParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    if limit == 0 {
        return error_response(&AppError::Validation("limit must be positive".to_string()));
    }

    let spec = FilterSpec {
        years: parse_int_set(params.years.as_deref()),
        months: parse_int_set(params.months.as_deref()),
        locations: parse_string_set(params.locations.as_deref()),
        offset: params.offset.unwrap_or(0),
        limit,
    };

    let rows = match pipeline::load_raw_rows(&state).await {
        Ok(rows) => rows,
        Err(e) => return error_response(&e),
    };

    let outcome = normalize(&rows);
    let result = filter(&outcome.transactions, &spec);

    let response = SalesQueryResponse {
        total_filtered: result.total,
        returned_count: result.matches.len(),
        has_more: result.has_more(&spec),
        offset: spec.offset,
        limit: spec.limit,
        data: result.matches,
    };

    (StatusCode::OK, Json(response)).into_response()
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parses a comma-separated list of integers, skipping unparseable parts.
fn parse_int_set<T: std::str::FromStr + Ord>(s: Option<&str>) -> BTreeSet<T> {
    s.unwrap_or_default()
        .split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

/// Parses a comma-separated list of names, skipping empty parts.
fn parse_string_set(s: Option<&str>) -> BTreeSet<String> {
    s.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::create_router;
    use crate::routes::testing::state_with_remote;

    use super::*;

    #[tokio::test]
    async fn test_zero_limit_is_a_validation_error() {
        // Rejected before any source access, so no remote or local file
        // needs to exist.
        let app = create_router(state_with_remote(None));

        let response = app
            .oneshot(
                Request::get("/api/sales-query?years=2024&limit=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "VALIDATION_ERROR");
    }

    #[test]
    fn test_parse_int_set() {
        let years: BTreeSet<i32> = parse_int_set(Some("2024, 2025,bad,"));
        assert_eq!(years, BTreeSet::from([2024, 2025]));

        let empty: BTreeSet<i32> = parse_int_set(None);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_parse_string_set() {
        let locations = parse_string_set(Some("Main Branch, North Branch ,"));
        assert_eq!(
            locations,
            BTreeSet::from(["Main Branch".to_string(), "North Branch".to_string()])
        );
    }
}
