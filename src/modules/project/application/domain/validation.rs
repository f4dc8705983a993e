// src/modules/project/application/domain/validation.rs

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::modules::project::application::domain::entities::ProjectDraft;

//
// ──────────────────────────────────────────────────────────
// Fields & messages
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Title,
    Description,
    Technologies,
    ImageUrl,
    ProjectUrl,
    GithubUrl,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::Technologies => "technologies",
            DraftField::ImageUrl => "imageUrl",
            DraftField::ProjectUrl => "projectUrl",
            DraftField::GithubUrl => "githubUrl",
        }
    }
}

pub const MSG_TITLE_REQUIRED: &str = "Title is required";
pub const MSG_DESCRIPTION_REQUIRED: &str = "Description is required";
pub const MSG_TECHNOLOGIES_REQUIRED: &str = "Add at least one technology";
pub const MSG_URL_INVALID: &str = "Enter a valid URL (http:// or https://)";

//
// ──────────────────────────────────────────────────────────
// ValidationErrors
// ──────────────────────────────────────────────────────────
//

/// Field → message mapping. An empty mapping denotes a valid draft.
///
/// Recomputed wholesale on every submit attempt; individual entries are
/// cleared reactively as the user edits the corresponding field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<DraftField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: DraftField) {
        self.0.remove(&field);
    }

    pub fn as_map(&self) -> &BTreeMap<DraftField, String> {
        &self.0
    }

    /// Single human-readable line, for surfaces that can only show one
    /// message (e.g. the gateway's rejection body).
    pub fn summary(&self) -> String {
        self.0
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

//
// ──────────────────────────────────────────────────────────
// Rules
// ──────────────────────────────────────────────────────────
//

// scheme + domain with a dot + arbitrary remainder
fn url_shape() -> &'static Regex {
    static URL_SHAPE: OnceLock<Regex> = OnceLock::new();
    URL_SHAPE.get_or_init(|| Regex::new(r"^https?://.+\..+").expect("url pattern compiles"))
}

/// Optional URL fields: empty/absent is fine, anything else must match
/// the `http(s)://<host>.<tld>/...` shape.
pub fn is_valid_optional_url(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) if v.is_empty() => true,
        Some(v) => url_shape().is_match(v),
    }
}

/// Full rule table from the form contract, never short-circuiting: all
/// applicable field errors are computed together.
pub fn validate_fields(
    title: &str,
    description: &str,
    technologies: &[String],
    image_url: Option<&str>,
    project_url: Option<&str>,
    github_url: Option<&str>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if title.trim().is_empty() {
        errors.insert(DraftField::Title, MSG_TITLE_REQUIRED);
    }

    if description.trim().is_empty() {
        errors.insert(DraftField::Description, MSG_DESCRIPTION_REQUIRED);
    }

    if technologies.is_empty() {
        errors.insert(DraftField::Technologies, MSG_TECHNOLOGIES_REQUIRED);
    }

    if !is_valid_optional_url(image_url) {
        errors.insert(DraftField::ImageUrl, MSG_URL_INVALID);
    }

    if !is_valid_optional_url(project_url) {
        errors.insert(DraftField::ProjectUrl, MSG_URL_INVALID);
    }

    if !is_valid_optional_url(github_url) {
        errors.insert(DraftField::GithubUrl, MSG_URL_INVALID);
    }

    errors
}

/// Validate a client-side draft, where an empty URL string means the
/// field was not provided.
pub fn validate_draft(draft: &ProjectDraft) -> ValidationErrors {
    validate_fields(
        &draft.title,
        &draft.description,
        &draft.technologies,
        Some(draft.image_url.as_str()),
        Some(draft.project_url.as_str()),
        Some(draft.github_url.as_str()),
    )
}
