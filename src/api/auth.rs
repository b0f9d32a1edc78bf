//! Auth API endpoints.

use axum::{extract::State, http::HeaderMap, Extension, Json};

use super::{success, ApiResult};
use crate::auth::extract_token;
use crate::models::{LoginRequest, LoginResponse, Session, SessionInfo};
use crate::AppState;

/// POST /api/auth/login - Admin sign-in.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let session = state.sessions.sign_in(&request.email, &request.password)?;

    tracing::info!("Admin signed in");
    success(LoginResponse {
        email: session.email,
        token: session.token,
        expires_at: session.expires_at,
    })
}

/// GET /api/auth/session - Probe for an existing session.
///
/// This is the check the admin page runs on mount; it answers with the
/// session or null and never errors.
pub async fn get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Option<SessionInfo>> {
    let session = extract_token(&headers).and_then(|token| state.sessions.get_session(&token));
    success(session.as_ref().map(SessionInfo::from))
}

/// POST /api/admin/logout - Destroy the current session.
pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> ApiResult<()> {
    state.sessions.sign_out(&session.token);
    tracing::info!("Admin signed out");
    success(())
}
