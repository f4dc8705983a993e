use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum ListProjectsError {
    QueryFailed(String),
}

impl fmt::Display for ListProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListProjectsError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    /// All persisted projects, most-recent-first.
    async fn execute(&self) -> Result<Vec<Project>, ListProjectsError>;
}
