// src/modules/project/application/ports/outgoing/project_store.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Server-side insert payload. The store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectStoreError {
    #[error("storage error: {0}")]
    StorageError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Storage seam for the persistence API. Engine selection lives behind
/// this port; the bundled adapter is in-memory.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn insert_project(&self, data: NewProject) -> Result<Project, ProjectStoreError>;

    /// Most-recent-first.
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectStoreError>;
}
