//! CSV export for the admin registrations panel.
//!
//! Header row carries the record's field names; every value is
//! double-quoted with embedded quotes doubled. Rows keep the order the
//! store returned them in.

use chrono::Utc;

use crate::models::{RecruitmentRegistration, WorkshopRegistration};

/// A record type that can be rendered as a CSV row.
pub trait CsvRecord {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

/// Render records to a CSV document with a header row.
pub fn to_csv<T: CsvRecord>(records: &[T]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(T::headers().join(","));
    for record in records {
        let row: Vec<String> = record.row().iter().map(|v| quote(v)).collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Download filename: `<dataset>_<ISO-date>.csv`.
pub fn csv_filename(dataset: &str) -> String {
    format!("{}_{}.csv", dataset, Utc::now().format("%Y-%m-%d"))
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

impl CsvRecord for WorkshopRegistration {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "usn",
            "year",
            "department",
            "phoneNumber",
            "email",
            "members",
            "paymentProof",
            "timestamp",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.name.clone(),
            self.usn.clone(),
            self.year.clone(),
            self.department.clone(),
            self.phone_number.clone(),
            self.email.clone(),
            serde_json::to_string(&self.members).unwrap_or_default(),
            self.payment_proof.clone(),
            self.timestamp.clone(),
        ]
    }
}

impl CsvRecord for RecruitmentRegistration {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "year",
            "department",
            "usn",
            "contactNumber",
            "inCollegeClub",
            "clubName",
            "skills",
            "timestamp",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.name.clone(),
            self.year.clone(),
            self.department.clone(),
            self.usn.clone(),
            self.contact_number.clone(),
            self.in_college_club.as_str().to_string(),
            self.club_name.clone().unwrap_or_default(),
            self.skills.clone(),
            self.timestamp.clone(),
        ]
    }
}
