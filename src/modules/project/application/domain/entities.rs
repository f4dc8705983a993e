// src/modules/project/application/domain/entities.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Project (persisted entity)
// ──────────────────────────────────────────────────────────
//

/// A persisted portfolio project as it travels over the wire.
///
/// `id` is assigned by the store at creation and immutable afterwards;
/// `created_at` is the ordering key for the list view (newest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,

    /// Ordered, pairwise-distinct technology labels. Never empty.
    pub technologies: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    pub created_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// ProjectDraft (client-side, pre-persistence)
// ──────────────────────────────────────────────────────────
//

/// The in-progress form state for a new project.
///
/// URL fields mirror text inputs: an empty string means "not provided".
/// Invariant: `technologies` holds no duplicate values (case-sensitive)
/// at any point in its lifetime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: String,
    pub project_url: String,
    pub github_url: String,
}

impl ProjectDraft {
    /// True when every field is back at its empty shape.
    pub fn is_empty(&self) -> bool {
        self == &ProjectDraft::default()
    }
}
