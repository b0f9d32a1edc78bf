//! Database repository for registration rows.
//!
//! Rows are immutable once inserted: the repository exposes insert, list,
//! and delete — there is no update path.

use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    ClubMembership, RecruitmentRegistration, RecruitmentSubmission, WorkshopRegistration,
    WorkshopSubmission, WorkshopTeamMember,
};

/// Repository for the two registration tables.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== WORKSHOP REGISTRATIONS ====================

    /// Insert one workshop registration. Exactly one attempt, no retry.
    pub async fn insert_workshop(
        &self,
        submission: &WorkshopSubmission,
        timestamp: &str,
    ) -> Result<WorkshopRegistration, AppError> {
        let members_json = serde_json::to_string(&submission.members).unwrap_or_default();

        let result = sqlx::query(
            r#"INSERT INTO workshop_registrations
                (name, usn, year, department, phone_number, email, members, payment_proof, timestamp, sync_key)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, NULL)"#,
        )
        .bind(&submission.name)
        .bind(&submission.usn)
        .bind(&submission.year)
        .bind(&submission.department)
        .bind(&submission.phone_number)
        .bind(&submission.email)
        .bind(&members_json)
        .bind(&submission.payment_proof)
        .bind(timestamp)
        .execute(&self.pool)
        .await?;

        Ok(WorkshopRegistration {
            id: Some(result.last_insert_rowid()),
            name: submission.name.clone(),
            usn: submission.usn.clone(),
            year: submission.year.clone(),
            department: submission.department.clone(),
            phone_number: submission.phone_number.clone(),
            email: submission.email.clone(),
            members: submission.members.clone(),
            payment_proof: submission.payment_proof.clone(),
            timestamp: timestamp.to_string(),
        })
    }

    /// Insert a buffered workshop record keyed by its content-derived sync
    /// key. Returns `false` when the key is already present (safe retry).
    pub async fn upsert_workshop(
        &self,
        submission: &WorkshopSubmission,
        timestamp: &str,
        sync_key: &str,
    ) -> Result<bool, AppError> {
        let members_json = serde_json::to_string(&submission.members).unwrap_or_default();

        let result = sqlx::query(
            r#"INSERT INTO workshop_registrations
                (name, usn, year, department, phone_number, email, members, payment_proof, timestamp, sync_key)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(sync_key) DO NOTHING"#,
        )
        .bind(&submission.name)
        .bind(&submission.usn)
        .bind(&submission.year)
        .bind(&submission.department)
        .bind(&submission.phone_number)
        .bind(&submission.email)
        .bind(&members_json)
        .bind(&submission.payment_proof)
        .bind(timestamp)
        .bind(sync_key)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List all workshop registrations, most recent first.
    pub async fn list_workshop(&self) -> Result<Vec<WorkshopRegistration>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, name, usn, year, department, phone_number, email, members, payment_proof, timestamp
               FROM workshop_registrations ORDER BY timestamp DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(workshop_from_row).collect())
    }

    /// Delete a workshop registration.
    pub async fn delete_workshop(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM workshop_registrations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Workshop registration {} not found",
                id
            )));
        }
        Ok(())
    }

    // ==================== RECRUITMENT REGISTRATIONS ====================

    /// Insert one recruitment registration. Exactly one attempt, no retry.
    pub async fn insert_recruitment(
        &self,
        submission: &RecruitmentSubmission,
        timestamp: &str,
    ) -> Result<RecruitmentRegistration, AppError> {
        let result = sqlx::query(
            r#"INSERT INTO recruitment_registrations
                (name, year, department, usn, contact_number, in_college_club, club_name, skills, timestamp, sync_key)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, NULL)"#,
        )
        .bind(&submission.name)
        .bind(&submission.year)
        .bind(&submission.department)
        .bind(&submission.usn)
        .bind(&submission.contact_number)
        .bind(submission.in_college_club.as_str())
        .bind(&submission.club_name)
        .bind(&submission.skills)
        .bind(timestamp)
        .execute(&self.pool)
        .await?;

        Ok(RecruitmentRegistration {
            id: Some(result.last_insert_rowid()),
            name: submission.name.clone(),
            year: submission.year.clone(),
            department: submission.department.clone(),
            usn: submission.usn.clone(),
            contact_number: submission.contact_number.clone(),
            in_college_club: submission.in_college_club,
            club_name: submission.club_name.clone(),
            skills: submission.skills.clone(),
            timestamp: timestamp.to_string(),
        })
    }

    /// Insert a buffered recruitment record keyed by its content-derived
    /// sync key. Returns `false` when the key is already present.
    pub async fn upsert_recruitment(
        &self,
        submission: &RecruitmentSubmission,
        timestamp: &str,
        sync_key: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"INSERT INTO recruitment_registrations
                (name, year, department, usn, contact_number, in_college_club, club_name, skills, timestamp, sync_key)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(sync_key) DO NOTHING"#,
        )
        .bind(&submission.name)
        .bind(&submission.year)
        .bind(&submission.department)
        .bind(&submission.usn)
        .bind(&submission.contact_number)
        .bind(submission.in_college_club.as_str())
        .bind(&submission.club_name)
        .bind(&submission.skills)
        .bind(timestamp)
        .bind(sync_key)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List all recruitment registrations, most recent first.
    pub async fn list_recruitment(&self) -> Result<Vec<RecruitmentRegistration>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, name, year, department, usn, contact_number, in_college_club, club_name, skills, timestamp
               FROM recruitment_registrations ORDER BY timestamp DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(recruitment_from_row).collect())
    }

    /// Delete a recruitment registration.
    pub async fn delete_recruitment(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM recruitment_registrations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Recruitment registration {} not found",
                id
            )));
        }
        Ok(())
    }
}

// Helper functions for row conversion

fn workshop_from_row(row: &sqlx::sqlite::SqliteRow) -> WorkshopRegistration {
    let members_str: Option<String> = row.get("members");
    WorkshopRegistration {
        id: row.get("id"),
        name: row.get("name"),
        usn: row.get("usn"),
        year: row.get("year"),
        department: row.get("department"),
        phone_number: row.get("phone_number"),
        email: row.get("email"),
        members: members_str.map(|s| parse_members(&s)).unwrap_or_default(),
        payment_proof: row.get("payment_proof"),
        timestamp: row.get("timestamp"),
    }
}

fn recruitment_from_row(row: &sqlx::sqlite::SqliteRow) -> RecruitmentRegistration {
    let club_flag: String = row.get("in_college_club");
    RecruitmentRegistration {
        id: row.get("id"),
        name: row.get("name"),
        year: row.get("year"),
        department: row.get("department"),
        usn: row.get("usn"),
        contact_number: row.get("contact_number"),
        in_college_club: ClubMembership::from_str(&club_flag).unwrap_or(ClubMembership::No),
        club_name: row.get("club_name"),
        skills: row.get("skills"),
        timestamp: row.get("timestamp"),
    }
}

fn parse_members(s: &str) -> Vec<WorkshopTeamMember> {
    serde_json::from_str(s).unwrap_or_default()
}
