//! One-way sync of legacy local registration buffers into the database.
//!
//! Earlier site revisions buffered registrations in the local content
//! store. This service pushes every buffered record into the registration
//! tables. Each record is keyed by a stable content-derived uuid so the
//! insert is an upsert: re-running the sync over an unchanged buffer is
//! safe and inserts nothing. The buffer itself is never cleared here.

use serde::Serialize;
use uuid::Uuid;

use crate::content::ContentStore;
use crate::db::Repository;

/// Aggregate result of one sync run. Per-record failures are counted and
/// logged, not individually reported.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub success: bool,
    pub message: String,
    pub synced: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl SyncReport {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            synced: 0,
            skipped: 0,
            failed: 0,
        }
    }
}

/// Push all buffered local registrations into the registration store.
/// Best-effort: a failure partway through leaves earlier records synced,
/// with no rollback.
pub async fn sync_local_to_cloud(content: &ContentStore, repo: &Repository) -> SyncReport {
    let recruitment = match content.buffered_recruitment() {
        Ok(records) => records,
        Err(e) => return SyncReport::failure(format!("Failed to read recruitment buffer: {}", e)),
    };
    let workshop = match content.buffered_workshop() {
        Ok(records) => records,
        Err(e) => return SyncReport::failure(format!("Failed to read workshop buffer: {}", e)),
    };

    let mut synced = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for record in &recruitment {
        let key = sync_key("recruitment", record);
        match repo
            .upsert_recruitment(&record.submission, &record.timestamp, &key)
            .await
        {
            Ok(true) => synced += 1,
            Ok(false) => skipped += 1,
            Err(e) => {
                tracing::warn!("Failed to sync recruitment record: {}", e);
                failed += 1;
            }
        }
    }

    for record in &workshop {
        let key = sync_key("workshop", record);
        match repo
            .upsert_workshop(&record.submission, &record.timestamp, &key)
            .await
        {
            Ok(true) => synced += 1,
            Ok(false) => skipped += 1,
            Err(e) => {
                tracing::warn!("Failed to sync workshop record: {}", e);
                failed += 1;
            }
        }
    }

    let success = failed == 0;
    let message = if success {
        format!(
            "Synced {} records to the cloud ({} already present)",
            synced, skipped
        )
    } else {
        format!(
            "Synced {} records, {} already present, {} failed",
            synced, skipped, failed
        )
    };

    SyncReport {
        success,
        message,
        synced,
        skipped,
        failed,
    }
}

/// Stable content-derived key for a buffered record: a v5 uuid over the
/// record's type tag and canonical JSON. Identical buffer entries always
/// map to the same key, which is what makes retries safe.
fn sync_key<T: Serialize>(kind: &str, record: &T) -> String {
    let canonical = serde_json::to_value(record)
        .map(|v| v.to_string())
        .unwrap_or_default();
    Uuid::new_v5(
        &Uuid::NAMESPACE_OID,
        format!("{}:{}", kind, canonical).as_bytes(),
    )
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BufferedRecruitment, ClubMembership, RecruitmentSubmission};

    fn buffered(name: &str) -> BufferedRecruitment {
        BufferedRecruitment {
            submission: RecruitmentSubmission {
                name: name.to_string(),
                year: "1st".to_string(),
                department: "ECE".to_string(),
                usn: "1SI22EC042".to_string(),
                contact_number: "9123456780".to_string(),
                in_college_club: ClubMembership::No,
                club_name: None,
                skills: "CAD".to_string(),
            },
            timestamp: "2025-06-01T10:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_sync_key_stable() {
        let record = buffered("Ravi");
        assert_eq!(
            sync_key("recruitment", &record),
            sync_key("recruitment", &record)
        );
    }

    #[test]
    fn test_sync_key_differs_by_content() {
        assert_ne!(
            sync_key("recruitment", &buffered("Ravi")),
            sync_key("recruitment", &buffered("Asha"))
        );
    }

    #[test]
    fn test_sync_key_differs_by_kind() {
        let record = buffered("Ravi");
        assert_ne!(sync_key("recruitment", &record), sync_key("workshop", &record));
    }
}
