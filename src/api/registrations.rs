//! Registration API endpoints.
//!
//! Submissions are open to any caller; listing, deleting, and CSV export
//! sit behind the admin session middleware.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::export::{csv_filename, to_csv, CsvRecord};
use crate::models::{
    RecruitmentRegistration, RecruitmentSubmission, WorkshopRegistration, WorkshopSubmission,
};
use crate::validation;
use crate::AppState;

/// POST /api/registrations/workshop - Submit a workshop registration.
pub async fn submit_workshop(
    State(state): State<AppState>,
    Json(submission): Json<WorkshopSubmission>,
) -> ApiResult<WorkshopRegistration> {
    validation::validate_workshop(&submission)?;

    let timestamp = Utc::now().to_rfc3339();
    let registration = state.repo.insert_workshop(&submission, &timestamp).await?;

    tracing::info!("Workshop registration received");
    success(registration)
}

/// POST /api/registrations/recruitment - Submit a recruitment registration.
pub async fn submit_recruitment(
    State(state): State<AppState>,
    Json(submission): Json<RecruitmentSubmission>,
) -> ApiResult<RecruitmentRegistration> {
    validation::validate_recruitment(&submission)?;

    let timestamp = Utc::now().to_rfc3339();
    let registration = state
        .repo
        .insert_recruitment(&submission, &timestamp)
        .await?;

    tracing::info!("Recruitment registration received");
    success(registration)
}

/// GET /api/admin/registrations/workshop - List workshop registrations.
pub async fn list_workshop(State(state): State<AppState>) -> ApiResult<Vec<WorkshopRegistration>> {
    success(state.repo.list_workshop().await?)
}

/// GET /api/admin/registrations/recruitment - List recruitment registrations.
pub async fn list_recruitment(
    State(state): State<AppState>,
) -> ApiResult<Vec<RecruitmentRegistration>> {
    success(state.repo.list_recruitment().await?)
}

/// DELETE /api/admin/registrations/workshop/:id - Delete a workshop registration.
pub async fn delete_workshop(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    state.repo.delete_workshop(id).await?;
    success(())
}

/// DELETE /api/admin/registrations/recruitment/:id - Delete a recruitment registration.
pub async fn delete_recruitment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    state.repo.delete_recruitment(id).await?;
    success(())
}

/// GET /api/admin/registrations/workshop/csv - Download workshop registrations as CSV.
pub async fn export_workshop_csv(State(state): State<AppState>) -> Result<Response, AppError> {
    let registrations = state.repo.list_workshop().await?;
    csv_download(&registrations, "workshop_registrations")
}

/// GET /api/admin/registrations/recruitment/csv - Download recruitment registrations as CSV.
pub async fn export_recruitment_csv(State(state): State<AppState>) -> Result<Response, AppError> {
    let registrations = state.repo.list_recruitment().await?;
    csv_download(&registrations, "recruitment_registrations")
}

fn csv_download<T: CsvRecord>(records: &[T], dataset: &str) -> Result<Response, AppError> {
    if records.is_empty() {
        return Err(AppError::NotFound("No registrations to export".to_string()));
    }

    let body = to_csv(records);
    let disposition = format!("attachment; filename=\"{}\"", csv_filename(dataset));
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
