//! Content snapshot models for backup export/import.

use serde::{Deserialize, Serialize};

use super::{Project, TimelineEvent};

/// Current snapshot format version. Bump when the export shape changes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Full content snapshot produced by an export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    pub version: u32,
    pub projects: Vec<Project>,
    pub timeline_events: Vec<TimelineEvent>,
}

/// Snapshot accepted by an import. Collections are replaced wholesale when
/// present and left untouched when absent. Exports from before the version
/// tag existed carry no `version` field and are read as version 1.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSnapshot {
    #[serde(default = "default_snapshot_version")]
    pub version: u32,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    #[serde(default)]
    pub timeline_events: Option<Vec<TimelineEvent>>,
}

fn default_snapshot_version() -> u32 {
    1
}
