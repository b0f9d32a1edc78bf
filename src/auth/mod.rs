//! Session-based admin authentication.
//!
//! Credentials are injected via configuration; sign-in issues an opaque
//! token with a bounded lifetime, held only in process memory. Comparison
//! uses constant-time equality to mitigate timing attacks.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::{AppError, ErrorResponse};
use crate::models::Session;

/// Header name for the session token.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// Issues, validates, and destroys admin sessions.
pub struct SessionManager {
    admin_email: Option<String>,
    admin_password: Option<String>,
    ttl: Duration,
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionManager {
    pub fn new(config: &Config) -> Self {
        Self {
            admin_email: config.admin_email.clone(),
            admin_password: config.admin_password.clone(),
            ttl: config.session_ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Session>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Sign in with email and password. The failure result is deliberately
    /// generic: it never reveals whether the email exists, and identity
    /// errors never propagate as panics past this boundary.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<Session, AppError> {
        if !self.credentials_match(email, password) {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let session = Session {
            email: email.to_string(),
            token: Uuid::new_v4().to_string(),
            expires_at: Utc::now()
                + chrono::Duration::from_std(self.ttl)
                    .unwrap_or_else(|_| chrono::Duration::hours(8)),
        };

        self.lock().insert(session.token.clone(), session.clone());
        Ok(session)
    }

    /// Look up an existing session. Expired sessions are purged and read
    /// back as absent.
    pub fn get_session(&self, token: &str) -> Option<Session> {
        let mut sessions = self.lock();
        match sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => Some(session.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Destroy a session. Returns `true` if one existed.
    pub fn sign_out(&self, token: &str) -> bool {
        self.lock().remove(token).is_some()
    }

    fn credentials_match(&self, email: &str, password: &str) -> bool {
        let (Some(expected_email), Some(expected_password)) =
            (self.admin_email.as_deref(), self.admin_password.as_deref())
        else {
            // No credentials configured: the admin area is unusable
            return false;
        };

        // Evaluate both comparisons; no early exit on the email
        let email_ok = constant_time_compare(email, expected_email);
        let password_ok = constant_time_compare(password, expected_password);
        email_ok & password_ok
    }
}

/// Session authentication layer guarding the admin routes.
pub async fn session_auth_layer(
    sessions: Arc<SessionManager>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_token(request.headers()) else {
        return unauthorized_response("Missing session token");
    };

    match sessions.get_session(&token) {
        Some(session) => {
            // Hand the session to the handler (sign-out needs the token)
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        None => unauthorized_response("Invalid or expired session"),
    }
}

/// Read the session token from the dedicated header or a bearer token.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        return Some(token.to_string());
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse::new(&AppError::Unauthorized(message.to_string()));
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(ttl: Duration) -> SessionManager {
        let mut config = Config::from_env();
        config.admin_email = Some("admin@club.example".to_string());
        config.admin_password = Some("correct horse battery".to_string());
        config.session_ttl = ttl;
        SessionManager::new(&config)
    }

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("test-key-123", "test-key-123"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("test-key-123", "test-key-124"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-key"));
    }

    #[test]
    fn test_sign_in_success() {
        let manager = manager(Duration::from_secs(3600));
        let session = manager
            .sign_in("admin@club.example", "correct horse battery")
            .expect("sign-in succeeds");
        assert!(!session.token.is_empty());
        assert!(session.expires_at > Utc::now());
        assert!(manager.get_session(&session.token).is_some());
    }

    #[test]
    fn test_sign_in_wrong_password_creates_no_session() {
        let manager = manager(Duration::from_secs(3600));
        let result = manager.sign_in("admin@club.example", "wrong");

        match result {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Invalid credentials"),
            _ => panic!("expected a generic Unauthorized failure"),
        }
        assert!(manager.lock().is_empty());
    }

    #[test]
    fn test_sign_in_unknown_email_same_message() {
        let manager = manager(Duration::from_secs(3600));
        let wrong_email = manager.sign_in("nobody@club.example", "correct horse battery");
        let wrong_password = manager.sign_in("admin@club.example", "wrong");

        let msg = |r: Result<Session, AppError>| match r {
            Err(e) => e.message(),
            Ok(_) => panic!("expected failure"),
        };
        assert_eq!(msg(wrong_email), msg(wrong_password));
    }

    #[test]
    fn test_unconfigured_credentials_reject_everything() {
        let mut config = Config::from_env();
        config.admin_email = None;
        config.admin_password = None;
        let manager = SessionManager::new(&config);
        assert!(manager.sign_in("", "").is_err());
    }

    #[test]
    fn test_session_expiry() {
        let manager = manager(Duration::from_secs(0));
        let session = manager
            .sign_in("admin@club.example", "correct horse battery")
            .expect("sign-in succeeds");

        // ttl of zero: already expired, and purged on access
        assert!(manager.get_session(&session.token).is_none());
        assert!(manager.lock().is_empty());
    }

    #[test]
    fn test_sign_out_destroys_session() {
        let manager = manager(Duration::from_secs(3600));
        let session = manager
            .sign_in("admin@club.example", "correct horse battery")
            .expect("sign-in succeeds");

        assert!(manager.sign_out(&session.token));
        assert!(manager.get_session(&session.token).is_none());
        assert!(!manager.sign_out(&session.token));
    }

    #[test]
    fn test_extract_token_prefers_header() {
        let mut headers = HeaderMap::new();
        headers.insert(SESSION_TOKEN_HEADER, "abc".parse().unwrap());
        headers.insert(header::AUTHORIZATION, "Bearer xyz".parse().unwrap());
        assert_eq!(extract_token(&headers).as_deref(), Some("abc"));
    }

    #[test]
    fn test_extract_token_bearer_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer xyz".parse().unwrap());
        assert_eq!(extract_token(&headers).as_deref(), Some("xyz"));
        assert_eq!(extract_token(&HeaderMap::new()), None);
    }
}
