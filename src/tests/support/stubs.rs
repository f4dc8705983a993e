use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, ListProjectsError, ListProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_store::NewProject;

/* --------------------------------------------------
 * Project use case stubs
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubCreateProjectUseCase {
    result: Result<Project, CreateProjectError>,
}

impl StubCreateProjectUseCase {
    pub fn store_error(msg: &str) -> Self {
        Self {
            result: Err(CreateProjectError::StoreError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _data: NewProject) -> Result<Project, CreateProjectError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListProjectsUseCase {
    result: Result<Vec<Project>, ListProjectsError>,
}

impl StubListProjectsUseCase {
    pub fn success(projects: Vec<Project>) -> Self {
        Self {
            result: Ok(projects),
        }
    }
}

#[async_trait]
impl ListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(&self) -> Result<Vec<Project>, ListProjectsError> {
        self.result.clone()
    }
}
