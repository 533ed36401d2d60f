//! Verification and metadata routes.

use std::collections::BTreeMap;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use rust_decimal::Decimal;
use serde::Serialize;

use pharmadash_core::aggregate::{AggregateBucket, by_year};
use pharmadash_core::metadata::sample_metadata;
use pharmadash_core::normalize::{NormalizeStats, RawRow, normalize};

use crate::{AppState, pipeline, routes::error_response};

/// Raw rows included in the verification sample.
const RAW_SAMPLE_LEN: usize = 5;

/// Creates the verification and metadata routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/verify-totals", get(get_verify_totals))
        .route("/metadata", get(get_metadata))
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for the verification endpoint.
#[derive(Debug, Serialize)]
pub struct VerifyTotalsResponse {
    /// Sum of net revenue over the entire normalized set.
    pub grand_total: Decimal,
    /// Normalized row count.
    pub total_records: usize,
    /// Per-year buckets.
    pub year_breakdown: BTreeMap<i32, AggregateBucket>,
    /// First few raw rows, for eyeballing the source.
    pub sample_records: Vec<RawRowSample>,
    /// Drop counters from the normalization run.
    pub normalize_stats: NormalizeStats,
}

/// One raw row as received from the source, before normalization.
#[derive(Debug, Serialize)]
pub struct RawRowSample {
    /// Invoice number text.
    pub invoice_number: String,
    /// Free-text invoice date.
    pub invoice_date: String,
    /// Amount text.
    pub net_revenue_amount: String,
    /// Pharmacist name.
    pub pharmacist: String,
    /// Location name.
    pub location: String,
}

impl From<&RawRow> for RawRowSample {
    fn from(row: &RawRow) -> Self {
        Self {
            invoice_number: row.invoice_number.clone(),
            invoice_date: row.invoice_date.clone(),
            net_revenue_amount: row.net_revenue_amount.clone(),
            pharmacist: row.pharmacist.clone(),
            location: row.location.clone(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /verify-totals
///
/// Runs the exact same normalization as the export endpoint and reports
/// grand totals; this is the reconciliation check the whole pipeline
/// exists for.
async fn get_verify_totals(State(state): State<AppState>) -> impl IntoResponse {
    let rows = match pipeline::load_raw_rows(&state).await {
        Ok(rows) => rows,
        Err(e) => return error_response(&e),
    };

    let outcome = normalize(&rows);
    let grand_total: Decimal = outcome
        .transactions
        .iter()
        .map(|t| t.net_revenue_amount)
        .sum();

    let response = VerifyTotalsResponse {
        grand_total,
        total_records: outcome.transactions.len(),
        year_breakdown: by_year(&outcome.transactions),
        sample_records: rows.iter().take(RAW_SAMPLE_LEN).map(Into::into).collect(),
        normalize_stats: outcome.stats,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// GET /metadata
///
/// Fast approximate preview from a bounded prefix of the raw rows. Exact
/// totals come from the verification endpoint, never from here.
async fn get_metadata(State(state): State<AppState>) -> impl IntoResponse {
    let rows = match pipeline::load_raw_rows(&state).await {
        Ok(rows) => rows,
        Err(e) => return error_response(&e),
    };

    let snapshot = sample_metadata(&rows, state.config.source.sample_size);
    (StatusCode::OK, Json(snapshot)).into_response()
}
