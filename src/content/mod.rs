//! Local content store for projects and timeline events.
//!
//! The file-backed key-value store is the single owner of this data; every
//! mutation rewrites the affected collection in full. Access is serialized
//! by an internal mutex — the store is a single-writer resource.

mod kv;

pub use kv::FileKv;

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    BufferedRecruitment, BufferedWorkshop, ContentSnapshot, CreateProjectRequest,
    CreateTimelineEventRequest, ImportSnapshot, Project, TimelineEvent, UpdateProjectRequest,
    UpdateTimelineEventRequest, SNAPSHOT_VERSION,
};

const PROJECTS_KEY: &str = "projects";
const TIMELINE_KEY: &str = "timeline_events";
const RECRUITMENT_BUFFER_KEY: &str = "recruitment_buffer";
const WORKSHOP_BUFFER_KEY: &str = "workshop_buffer";

/// Store for all locally-persisted site content.
pub struct ContentStore {
    kv: Mutex<FileKv>,
}

impl ContentStore {
    /// Open the content store rooted at `dir`.
    pub fn open(dir: &Path) -> Result<Self, AppError> {
        let kv = FileKv::open(dir)?;
        Ok(Self { kv: Mutex::new(kv) })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FileKv> {
        self.kv.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Read a collection, treating a missing or unparsable document as empty.
    fn read_collection<T: DeserializeOwned>(kv: &FileKv, key: &str) -> Result<Vec<T>, AppError> {
        match kv.get(key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => Ok(items),
                Err(e) => {
                    tracing::warn!("Unparsable content document '{}', treating as empty: {}", key, e);
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    fn write_collection<T: Serialize>(kv: &FileKv, key: &str, items: &[T]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(items)
            .map_err(|e| AppError::Internal(format!("Failed to serialize '{}': {}", key, e)))?;
        kv.set(key, &json)?;
        Ok(())
    }

    // ==================== PROJECTS ====================

    /// List all projects in insertion order.
    pub fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let kv = self.lock();
        Self::read_collection(&kv, PROJECTS_KEY)
    }

    /// Add a project, assigning an identifier and timestamps.
    pub fn add_project(&self, request: &CreateProjectRequest) -> Result<Project, AppError> {
        let now = Utc::now().to_rfc3339();
        let project = Project {
            id: Uuid::new_v4().to_string(),
            title: request.title.clone(),
            description: request.description.clone(),
            image: request.image.clone(),
            technologies: request.technologies.clone(),
            category: request.category.clone(),
            status: request.status,
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            team_members: request.team_members.clone(),
            achievements: request.achievements.clone(),
            links: request.links.clone(),
            created_at: now.clone(),
            updated_at: now,
        };

        let kv = self.lock();
        let mut projects: Vec<Project> = Self::read_collection(&kv, PROJECTS_KEY)?;
        projects.push(project.clone());
        Self::write_collection(&kv, PROJECTS_KEY, &projects)?;
        Ok(project)
    }

    /// Merge updates into an existing project. Returns `None` if the id is unknown.
    pub fn update_project(
        &self,
        id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<Option<Project>, AppError> {
        let kv = self.lock();
        let mut projects: Vec<Project> = Self::read_collection(&kv, PROJECTS_KEY)?;

        let Some(existing) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(title) = &request.title {
            existing.title = title.clone();
        }
        if let Some(description) = &request.description {
            existing.description = description.clone();
        }
        if let Some(image) = &request.image {
            existing.image = image.clone();
        }
        if let Some(technologies) = &request.technologies {
            existing.technologies = technologies.clone();
        }
        if let Some(category) = &request.category {
            existing.category = category.clone();
        }
        if let Some(status) = request.status {
            existing.status = status;
        }
        existing.start_date = request.start_date.clone().or(existing.start_date.take());
        existing.end_date = request.end_date.clone().or(existing.end_date.take());
        if let Some(team_members) = &request.team_members {
            existing.team_members = team_members.clone();
        }
        if let Some(achievements) = &request.achievements {
            existing.achievements = achievements.clone();
        }
        existing.links = request.links.clone().or(existing.links.take());
        existing.updated_at = Utc::now().to_rfc3339();

        let updated = existing.clone();
        Self::write_collection(&kv, PROJECTS_KEY, &projects)?;
        Ok(Some(updated))
    }

    /// Remove a project. Returns `true` iff something was removed.
    pub fn delete_project(&self, id: &str) -> Result<bool, AppError> {
        let kv = self.lock();
        let mut projects: Vec<Project> = Self::read_collection(&kv, PROJECTS_KEY)?;
        let before = projects.len();
        projects.retain(|p| p.id != id);

        if projects.len() == before {
            return Ok(false);
        }

        Self::write_collection(&kv, PROJECTS_KEY, &projects)?;
        Ok(true)
    }

    // ==================== TIMELINE EVENTS ====================

    /// List all timeline events, most recent first. Ordering is recomputed
    /// on every call, never stored.
    pub fn list_timeline_events(&self) -> Result<Vec<TimelineEvent>, AppError> {
        let kv = self.lock();
        let mut events: Vec<TimelineEvent> = Self::read_collection(&kv, TIMELINE_KEY)?;
        events.sort_by(|a, b| b.chronological_key().cmp(&a.chronological_key()));
        Ok(events)
    }

    /// Add a timeline event, assigning an identifier and timestamps.
    pub fn add_timeline_event(
        &self,
        request: &CreateTimelineEventRequest,
    ) -> Result<TimelineEvent, AppError> {
        let now = Utc::now().to_rfc3339();
        let event = TimelineEvent {
            id: Uuid::new_v4().to_string(),
            year: request.year.clone(),
            month: request.month.clone(),
            date: request.date.clone(),
            title: request.title.clone(),
            description: request.description.clone(),
            category: request.category,
            importance: request.importance,
            created_at: now.clone(),
            updated_at: now,
        };

        let kv = self.lock();
        let mut events: Vec<TimelineEvent> = Self::read_collection(&kv, TIMELINE_KEY)?;
        events.push(event.clone());
        Self::write_collection(&kv, TIMELINE_KEY, &events)?;
        Ok(event)
    }

    /// Merge updates into an existing timeline event. Returns `None` if the id is unknown.
    pub fn update_timeline_event(
        &self,
        id: &str,
        request: &UpdateTimelineEventRequest,
    ) -> Result<Option<TimelineEvent>, AppError> {
        let kv = self.lock();
        let mut events: Vec<TimelineEvent> = Self::read_collection(&kv, TIMELINE_KEY)?;

        let Some(existing) = events.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };

        if let Some(year) = &request.year {
            existing.year = year.clone();
        }
        existing.month = request.month.clone().or(existing.month.take());
        existing.date = request.date.clone().or(existing.date.take());
        if let Some(title) = &request.title {
            existing.title = title.clone();
        }
        if let Some(description) = &request.description {
            existing.description = description.clone();
        }
        if let Some(category) = request.category {
            existing.category = category;
        }
        if let Some(importance) = request.importance {
            existing.importance = importance;
        }
        existing.updated_at = Utc::now().to_rfc3339();

        let updated = existing.clone();
        Self::write_collection(&kv, TIMELINE_KEY, &events)?;
        Ok(Some(updated))
    }

    /// Remove a timeline event. Returns `true` iff something was removed.
    pub fn delete_timeline_event(&self, id: &str) -> Result<bool, AppError> {
        let kv = self.lock();
        let mut events: Vec<TimelineEvent> = Self::read_collection(&kv, TIMELINE_KEY)?;
        let before = events.len();
        events.retain(|e| e.id != id);

        if events.len() == before {
            return Ok(false);
        }

        Self::write_collection(&kv, TIMELINE_KEY, &events)?;
        Ok(true)
    }

    // ==================== EXPORT / IMPORT ====================

    /// Produce a full snapshot of both collections for backup.
    pub fn export_data(&self) -> Result<ContentSnapshot, AppError> {
        let kv = self.lock();
        Ok(ContentSnapshot {
            version: SNAPSHOT_VERSION,
            projects: Self::read_collection(&kv, PROJECTS_KEY)?,
            timeline_events: Self::read_collection(&kv, TIMELINE_KEY)?,
        })
    }

    /// Restore collections from a snapshot. Present collections are replaced
    /// wholesale; absent ones are left untouched.
    pub fn import_data(&self, snapshot: &ImportSnapshot) -> Result<(), AppError> {
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(AppError::Validation(format!(
                "Unsupported snapshot version {} (current is {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }

        let kv = self.lock();
        if let Some(projects) = &snapshot.projects {
            Self::write_collection(&kv, PROJECTS_KEY, projects)?;
        }
        if let Some(events) = &snapshot.timeline_events {
            Self::write_collection(&kv, TIMELINE_KEY, events)?;
        }
        Ok(())
    }

    // ==================== LEGACY REGISTRATION BUFFERS ====================

    /// Recruitment records buffered by the local-storage-era data model.
    pub fn buffered_recruitment(&self) -> Result<Vec<BufferedRecruitment>, AppError> {
        let kv = self.lock();
        Self::read_collection(&kv, RECRUITMENT_BUFFER_KEY)
    }

    /// Workshop records buffered by the local-storage-era data model.
    pub fn buffered_workshop(&self) -> Result<Vec<BufferedWorkshop>, AppError> {
        let kv = self.lock();
        Self::read_collection(&kv, WORKSHOP_BUFFER_KEY)
    }
}
