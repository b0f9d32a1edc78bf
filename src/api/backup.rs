//! Content backup API endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult};
use crate::models::{ContentSnapshot, ImportSnapshot};
use crate::AppState;

/// GET /api/admin/content/export - Export projects and timeline as one JSON snapshot.
pub async fn export_content(State(state): State<AppState>) -> ApiResult<ContentSnapshot> {
    success(state.content.export_data()?)
}

/// POST /api/admin/content/import - Restore collections from a snapshot.
///
/// Import is a destructive replace: collections present in the snapshot
/// overwrite the stored ones wholesale, absent collections are untouched.
pub async fn import_content(
    State(state): State<AppState>,
    Json(snapshot): Json<ImportSnapshot>,
) -> ApiResult<()> {
    state.content.import_data(&snapshot)?;
    tracing::info!("Content snapshot imported");
    success(())
}
