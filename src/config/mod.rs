//! Configuration module for the club site backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.
//! Admin credentials are injected here and never embedded in code.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Admin sign-in email (required for the admin area to be usable)
    pub admin_email: Option<String>,
    /// Admin sign-in password
    pub admin_password: Option<String>,
    /// Path to the SQLite registration database
    pub db_path: PathBuf,
    /// Directory holding the content store documents
    pub content_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Admin session lifetime
    pub session_ttl: Duration,
    /// Per-request timeout applied to the whole router
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_email = env::var("EAGLES_ADMIN_EMAIL").ok();
        let admin_password = env::var("EAGLES_ADMIN_PASSWORD").ok();

        let db_path = env::var("EAGLES_DB_PATH")
            .unwrap_or_else(|_| "./data/registrations.sqlite".to_string())
            .into();

        let content_dir = env::var("EAGLES_CONTENT_DIR")
            .unwrap_or_else(|_| "./data/content".to_string())
            .into();

        let bind_addr = env::var("EAGLES_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid EAGLES_BIND_ADDR format");

        let log_level = env::var("EAGLES_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        // Sessions last hours, not days
        let session_ttl = Duration::from_secs(
            env::var("EAGLES_SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8 * 60 * 60),
        );

        let request_timeout = Duration::from_secs(
            env::var("EAGLES_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        );

        Self {
            admin_email,
            admin_password,
            db_path,
            content_dir,
            bind_addr,
            log_level,
            session_ttl,
            request_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("EAGLES_ADMIN_EMAIL");
        env::remove_var("EAGLES_ADMIN_PASSWORD");
        env::remove_var("EAGLES_DB_PATH");
        env::remove_var("EAGLES_CONTENT_DIR");
        env::remove_var("EAGLES_BIND_ADDR");
        env::remove_var("EAGLES_LOG_LEVEL");
        env::remove_var("EAGLES_SESSION_TTL_SECS");
        env::remove_var("EAGLES_REQUEST_TIMEOUT_SECS");

        let config = Config::from_env();

        assert!(config.admin_email.is_none());
        assert!(config.admin_password.is_none());
        assert_eq!(config.db_path, PathBuf::from("./data/registrations.sqlite"));
        assert_eq!(config.content_dir, PathBuf::from("./data/content"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.session_ttl, Duration::from_secs(8 * 60 * 60));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
