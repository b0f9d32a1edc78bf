//! Timeline event model matching the frontend TimelineEvent interface.

use serde::{Deserialize, Serialize};

/// Category of a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Achievement,
    #[default]
    Milestone,
    Event,
    Competition,
}

/// Visual weight of a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    #[default]
    Medium,
    Low,
}

/// An entry on the club journey timeline.
///
/// `month` and `date` are optional zero-padded two-digit strings; ordering
/// treats a missing component as "01".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub importance: Importance,
    pub created_at: String,
    pub updated_at: String,
}

impl TimelineEvent {
    /// Sort key: (year, month, date) with "01" substituted for missing parts.
    pub fn chronological_key(&self) -> (String, String, String) {
        (
            self.year.clone(),
            self.month.clone().unwrap_or_else(|| "01".to_string()),
            self.date.clone().unwrap_or_else(|| "01".to_string()),
        )
    }
}

/// Request body for creating a new timeline event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimelineEventRequest {
    pub year: String,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: EventCategory,
    #[serde(default)]
    pub importance: Importance,
}

/// Request body for updating an existing timeline event. Absent fields are kept as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimelineEventRequest {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<EventCategory>,
    #[serde(default)]
    pub importance: Option<Importance>,
}
