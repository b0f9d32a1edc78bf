//! Timeline API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateTimelineEventRequest, TimelineEvent, UpdateTimelineEventRequest};
use crate::AppState;

/// GET /api/timeline - List all timeline events, most recent first (public).
pub async fn list_timeline_events(State(state): State<AppState>) -> ApiResult<Vec<TimelineEvent>> {
    success(state.content.list_timeline_events()?)
}

/// POST /api/admin/timeline - Create a new timeline event.
pub async fn create_timeline_event(
    State(state): State<AppState>,
    Json(request): Json<CreateTimelineEventRequest>,
) -> ApiResult<TimelineEvent> {
    // Validate required fields
    if request.year.trim().is_empty() {
        return Err(AppError::Validation("Year is required".to_string()));
    }
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    success(state.content.add_timeline_event(&request)?)
}

/// PUT /api/admin/timeline/:id - Update a timeline event.
pub async fn update_timeline_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTimelineEventRequest>,
) -> ApiResult<TimelineEvent> {
    match state.content.update_timeline_event(&id, &request)? {
        Some(event) => success(event),
        None => Err(AppError::NotFound(format!(
            "Timeline event {} not found",
            id
        ))),
    }
}

/// DELETE /api/admin/timeline/:id - Delete a timeline event.
pub async fn delete_timeline_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    if !state.content.delete_timeline_event(&id)? {
        return Err(AppError::NotFound(format!(
            "Timeline event {} not found",
            id
        )));
    }
    success(())
}
