// src/modules/project/adapter/outgoing/project_store_memory.rs

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_store::{
    NewProject, ProjectStore, ProjectStoreError,
};

/// In-memory `ProjectStore`. Newest entries sit at the front, so reads
/// come back most-recent-first without sorting.
///
/// Cheap to clone: all clones share the same backing list.
#[derive(Clone, Default)]
pub struct InMemoryProjectStore {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every stored project. Used by the feature-gated test-helper
    /// route and by tests.
    pub async fn clear(&self) {
        self.projects.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.projects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.projects.read().await.is_empty()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn insert_project(&self, data: NewProject) -> Result<Project, ProjectStoreError> {
        let project = Project {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            technologies: data.technologies,
            image_url: data.image_url,
            project_url: data.project_url,
            github_url: data.github_url,
            created_at: Utc::now(),
        };

        self.projects.write().await.insert(0, project.clone());

        Ok(project)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ProjectStoreError> {
        Ok(self.projects.read().await.clone())
    }
}
