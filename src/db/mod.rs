//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all registration submissions.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Registration rows are append-only: inserted, listed, deleted — never
    // updated. sync_key is the content-derived de-duplication key for
    // records migrated out of the legacy local buffers; direct submissions
    // leave it NULL.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS workshop_registrations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            usn TEXT NOT NULL,
            year TEXT NOT NULL,
            department TEXT NOT NULL,
            phone_number TEXT NOT NULL,
            email TEXT NOT NULL,
            members TEXT,
            payment_proof TEXT NOT NULL,
            timestamp TEXT NOT NULL,
            sync_key TEXT UNIQUE
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recruitment_registrations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            year TEXT NOT NULL,
            department TEXT NOT NULL,
            usn TEXT NOT NULL,
            contact_number TEXT NOT NULL,
            in_college_club TEXT NOT NULL,
            club_name TEXT,
            skills TEXT NOT NULL,
            timestamp TEXT NOT NULL,
            sync_key TEXT UNIQUE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for common queries
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_workshop_timestamp ON workshop_registrations(timestamp);
        CREATE INDEX IF NOT EXISTS idx_recruitment_timestamp ON recruitment_registrations(timestamp);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
