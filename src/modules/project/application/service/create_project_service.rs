use async_trait::async_trait;

use crate::modules::project::application::domain::validation::validate_fields;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_store::{
    NewProject, ProjectStore, ProjectStoreError,
};
use crate::modules::project::application::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<S>
where
    S: ProjectStore,
{
    store: S,
}

impl<S> CreateProjectService<S>
where
    S: ProjectStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

// Empty URL strings arriving over the wire mean "not provided".
fn normalize_url(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl<S> CreateProjectUseCase for CreateProjectService<S>
where
    S: ProjectStore + Send + Sync,
{
    async fn execute(&self, data: NewProject) -> Result<Project, CreateProjectError> {
        let data = NewProject {
            title: data.title,
            description: data.description,
            technologies: data.technologies,
            image_url: normalize_url(data.image_url),
            project_url: normalize_url(data.project_url),
            github_url: normalize_url(data.github_url),
        };

        let errors = validate_fields(
            &data.title,
            &data.description,
            &data.technologies,
            data.image_url.as_deref(),
            data.project_url.as_deref(),
            data.github_url.as_deref(),
        );

        if !errors.is_empty() {
            return Err(CreateProjectError::InvalidDraft(errors));
        }

        self.store
            .insert_project(data)
            .await
            .map_err(|e| match e {
                ProjectStoreError::StorageError(msg) => CreateProjectError::StoreError(msg),
            })
    }
}
