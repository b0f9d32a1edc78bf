//! Sync API endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::sync::{sync_local_to_cloud, SyncReport};
use crate::AppState;

/// POST /api/admin/sync - Push buffered local registrations to the database.
///
/// Always answers 200 with the aggregate report; partial failures are
/// folded into the report rather than an error status.
pub async fn run_sync(State(state): State<AppState>) -> ApiResult<SyncReport> {
    let report = sync_local_to_cloud(&state.content, &state.repo).await;
    tracing::info!("Sync finished: {}", report.message);
    success(report)
}
