use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::domain::validation::ValidationErrors;
use crate::modules::project::application::ports::outgoing::project_store::NewProject;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CreateProjectError {
    /// The payload failed the domain rule table.
    InvalidDraft(ValidationErrors),
    StoreError(String),
}

impl fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProjectError::InvalidDraft(errors) => write!(f, "{}", errors.summary()),
            CreateProjectError::StoreError(msg) => {
                write!(f, "store error: {}", msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: NewProject) -> Result<Project, CreateProjectError>;
}
