// src/modules/project/application/ports/outgoing/project_gateway.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Project, ProjectDraft};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Listing projects failed. The detail is for logs only; the visitor
/// sees a fixed message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to load projects: {detail}")]
pub struct ReadFailure {
    pub detail: String,
}

impl ReadFailure {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Creating a project failed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WriteFailure {
    /// The gateway rejected the draft and supplied a message
    /// (the `{ "error": ... }` body).
    #[error("{0}")]
    Rejected(String),

    /// Transport-level or undecodable outcome; no server message to
    /// show. Callers fall back to a fixed string.
    #[error("create request failed: {0}")]
    Transport(String),
}

impl WriteFailure {
    /// The server-provided message, when there is one.
    pub fn message(&self) -> Option<&str> {
        match self {
            WriteFailure::Rejected(msg) => Some(msg),
            WriteFailure::Transport(_) => None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// The persistence boundary as the client core sees it: durable storage
/// and retrieval of project records, reachable only through these two
/// calls.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// All persisted projects in server-determined order.
    async fn list_projects(&self) -> Result<Vec<Project>, ReadFailure>;

    /// Persist a validated draft; returns the stored project including
    /// its assigned id.
    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, WriteFailure>;
}
