use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    ListProjectsError, ListProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_store::{
    ProjectStore, ProjectStoreError,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct ListProjectsService<S>
where
    S: ProjectStore,
{
    store: S,
}

impl<S> ListProjectsService<S>
where
    S: ProjectStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ListProjectsUseCase for ListProjectsService<S>
where
    S: ProjectStore + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, ListProjectsError> {
        self.store.list_projects().await.map_err(|e| match e {
            ProjectStoreError::StorageError(msg) => ListProjectsError::QueryFailed(msg),
        })
    }
}
