//! Admin session model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated admin session. Lives only in process memory; destroyed
/// on sign-out or expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Session view returned to the presentation layer (token omitted — the
/// caller already holds it).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl From<&Session> for SessionInfo {
    fn from(session: &Session) -> Self {
        Self {
            email: session.email.clone(),
            expires_at: session.expires_at,
        }
    }
}

/// Request body for admin sign-in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for a successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub email: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
