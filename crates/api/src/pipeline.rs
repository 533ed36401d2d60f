//! Per-request pipeline execution.
//!
//! Every endpoint re-runs resolve → parse from scratch; there is no cached
//! normalized set across requests. This guarantees each response reflects
//! the current source contents and keeps every endpoint's numbers derived
//! from one shared code path.

use pharmadash_core::normalize::RawRow;
use pharmadash_ingest::source::SourceDescriptor;
use pharmadash_shared::AppResult;

use crate::AppState;

/// Resolves the active source and parses it into raw rows.
pub async fn load_raw_rows(state: &AppState) -> AppResult<Vec<RawRow>> {
    load_raw_rows_from(state, &state.store.snapshot()).await
}

/// Resolves a specific descriptor and parses it into raw rows.
///
/// Used both by the normal request path and by the validation fetch,
/// so a committed configuration is guaranteed to have survived exactly the
/// pipeline the endpoints run.
pub async fn load_raw_rows_from(
    state: &AppState,
    desc: &SourceDescriptor,
) -> AppResult<Vec<RawRow>> {
    let bytes = pharmadash_ingest::resolve(&state.client, desc).await?;
    pharmadash_ingest::parse(&bytes)
}
