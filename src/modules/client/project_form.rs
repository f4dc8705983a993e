// src/modules/client/project_form.rs

use std::sync::Arc;

use crate::modules::client::tag_list_editor::{Suggestion, TagListEditor};
use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::modules::project::application::domain::validation::{
    validate_draft, DraftField, ValidationErrors,
};
use crate::modules::project::application::ports::outgoing::project_gateway::ProjectGateway;

/// Shown when the gateway rejects a create without a usable message.
pub const SUBMIT_FALLBACK_ERROR: &str = "Something went wrong. Please try again.";

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// A previous submit has not resolved yet; the submit affordance
    /// should have been disabled.
    #[error("a submission is already in flight")]
    AlreadySubmitting,

    /// The draft failed validation; field errors are recorded on the
    /// controller.
    #[error("draft failed validation")]
    InvalidDraft,

    /// The gateway refused the create. The message is also recorded as
    /// the submission-level error.
    #[error("{0}")]
    Rejected(String),
}

//
// ──────────────────────────────────────────────────────────
// Controller
// ──────────────────────────────────────────────────────────
//

/// Owns the draft being composed, runs the full rule table on submit,
/// and drives the create call. Field edits clear only that field's
/// error; nothing re-validates until the next submit attempt.
pub struct ProjectFormController<G>
where
    G: ProjectGateway,
{
    gateway: Arc<G>,
    draft: ProjectDraft,
    editor: TagListEditor,
    errors: ValidationErrors,
    submission_error: Option<String>,
    submitting: bool,
}

impl<G> ProjectFormController<G>
where
    G: ProjectGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            draft: ProjectDraft::default(),
            editor: TagListEditor::new(),
            errors: ValidationErrors::default(),
            submission_error: None,
            submitting: false,
        }
    }

    //
    // ── State accessors ───────────────────────────────────
    //

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Both submit and cancel are disabled for the in-flight window.
    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    pub fn can_cancel(&self) -> bool {
        !self.submitting
    }

    pub fn pending_tag_input(&self) -> &str {
        self.editor.pending_input()
    }

    pub fn tag_suggestions(&self) -> impl Iterator<Item = Suggestion<'_>> {
        self.editor.suggestions()
    }

    //
    // ── Field edits (each clears its own error) ───────────
    //

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
        self.errors.clear(DraftField::Title);
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
        self.errors.clear(DraftField::Description);
    }

    pub fn set_image_url(&mut self, value: impl Into<String>) {
        self.draft.image_url = value.into();
        self.errors.clear(DraftField::ImageUrl);
    }

    pub fn set_project_url(&mut self, value: impl Into<String>) {
        self.draft.project_url = value.into();
        self.errors.clear(DraftField::ProjectUrl);
    }

    pub fn set_github_url(&mut self, value: impl Into<String>) {
        self.draft.github_url = value.into();
        self.errors.clear(DraftField::GithubUrl);
    }

    //
    // ── Tag edits (delegated to the editor) ───────────────
    //

    pub fn set_pending_tag_input(&mut self, text: impl Into<String>) {
        self.editor.set_pending_input(text);
    }

    pub fn add_technology(&mut self, raw: &str) -> bool {
        let changed = self.editor.add_tag(raw);
        if changed {
            self.sync_technologies();
        }
        changed
    }

    pub fn remove_technology(&mut self, value: &str) -> bool {
        let changed = self.editor.remove_tag(value);
        if changed {
            self.sync_technologies();
        }
        changed
    }

    /// Enter on the tag input. Adds the pending text; never submits the
    /// form.
    pub fn commit_pending_tag(&mut self) -> bool {
        let changed = self.editor.commit_pending();
        if changed {
            self.sync_technologies();
        }
        changed
    }

    // The editor hands back the complete sequence after each change;
    // the draft mirrors it, and a tag edit counts as editing the
    // technologies field.
    fn sync_technologies(&mut self) {
        self.draft.technologies = self.editor.tags().to_vec();
        self.errors.clear(DraftField::Technologies);
    }

    //
    // ── Validation & submission ───────────────────────────
    //

    /// Recomputes the whole error mapping. True when the draft is
    /// submittable.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_draft(&self.draft);
        self.errors.is_empty()
    }

    /// Runs validation, then the single suspend point: the gateway's
    /// create call. Success resets the form to its empty shape; failure
    /// keeps every entered value so the visitor can retry.
    pub async fn submit(&mut self) -> Result<Project, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }

        if !self.validate() {
            return Err(SubmitError::InvalidDraft);
        }

        self.submitting = true;
        self.submission_error = None;

        let result = self.gateway.create_project(&self.draft).await;

        self.submitting = false;

        match result {
            Ok(project) => {
                self.reset();
                Ok(project)
            }
            Err(failure) => {
                let message = failure
                    .message()
                    .unwrap_or(SUBMIT_FALLBACK_ERROR)
                    .to_string();
                self.submission_error = Some(message.clone());
                Err(SubmitError::Rejected(message))
            }
        }
    }

    /// Close the creation surface without persisting. Refused while a
    /// submit is in flight.
    pub fn cancel(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.draft = ProjectDraft::default();
        self.editor.reset();
        self.errors = ValidationErrors::default();
        self.submission_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    use crate::modules::project::application::domain::validation::{
        MSG_TECHNOLOGIES_REQUIRED, MSG_TITLE_REQUIRED, MSG_URL_INVALID,
    };
    use crate::modules::project::application::ports::outgoing::project_gateway::{
        ReadFailure, WriteFailure,
    };

    mock! {
        Gateway {}

        #[async_trait::async_trait]
        impl ProjectGateway for Gateway {
            async fn list_projects(&self) -> Result<Vec<Project>, ReadFailure>;
            async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, WriteFailure>;
        }
    }

    fn persisted(title: &str) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "Y".to_string(),
            technologies: vec!["Go".to_string()],
            image_url: None,
            project_url: None,
            github_url: None,
            created_at: Utc::now(),
        }
    }

    fn filled_form(gateway: MockGateway) -> ProjectFormController<MockGateway> {
        let mut form = ProjectFormController::new(Arc::new(gateway));
        form.set_title("X");
        form.set_description("Y");
        form.add_technology("Go");
        form
    }

    /* --------------------------------------------------
     * Validation
     * -------------------------------------------------- */

    #[test]
    fn validate_reports_all_failures_at_once() {
        let mut form = ProjectFormController::new(Arc::new(MockGateway::new()));
        form.set_image_url("notaurl");

        assert!(!form.validate());

        assert_eq!(form.errors().get(DraftField::Title), Some(MSG_TITLE_REQUIRED));
        assert_eq!(
            form.errors().get(DraftField::Technologies),
            Some(MSG_TECHNOLOGIES_REQUIRED)
        );
        assert_eq!(form.errors().get(DraftField::ImageUrl), Some(MSG_URL_INVALID));
    }

    #[test]
    fn editing_a_field_clears_only_its_own_error() {
        let mut form = ProjectFormController::new(Arc::new(MockGateway::new()));
        form.validate();
        assert!(form.errors().get(DraftField::Title).is_some());
        assert!(form.errors().get(DraftField::Description).is_some());

        form.set_title("X");

        assert!(form.errors().get(DraftField::Title).is_none());
        // no re-validation until the next submit attempt
        assert!(form.errors().get(DraftField::Description).is_some());
    }

    #[test]
    fn adding_a_tag_clears_the_technologies_error() {
        let mut form = ProjectFormController::new(Arc::new(MockGateway::new()));
        form.validate();
        assert!(form.errors().get(DraftField::Technologies).is_some());

        form.add_technology("Go");

        assert!(form.errors().get(DraftField::Technologies).is_none());
        assert_eq!(form.draft().technologies, vec!["Go".to_string()]);
    }

    #[test]
    fn duplicate_tag_leaves_draft_unchanged() {
        let mut form = ProjectFormController::new(Arc::new(MockGateway::new()));
        form.add_technology("React");
        form.add_technology("React");

        assert_eq!(form.draft().technologies, vec!["React".to_string()]);
    }

    /* --------------------------------------------------
     * Submission
     * -------------------------------------------------- */

    #[tokio::test]
    async fn submit_success_returns_project_and_resets_form() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_create_project()
            .times(1)
            .returning(|_| Ok(persisted("X")));

        let mut form = filled_form(gateway);
        form.set_github_url("https://github.com/x/y");

        let created = form.submit().await.unwrap();

        assert_eq!(created.title, "X");
        assert!(form.draft().is_empty());
        assert!(form.errors().is_empty());
        assert!(form.submission_error().is_none());
        assert!(form.can_submit());
        assert!(form.can_cancel());
    }

    #[tokio::test]
    async fn submit_invalid_draft_never_reaches_the_gateway() {
        let mut gateway = MockGateway::new();
        gateway.expect_create_project().times(0);

        let mut form = ProjectFormController::new(Arc::new(gateway));
        form.set_title("X"); // description and technologies still missing

        let err = form.submit().await.unwrap_err();

        assert_eq!(err, SubmitError::InvalidDraft);
        assert!(form.errors().get(DraftField::Description).is_some());
        assert_eq!(form.draft().title, "X");
    }

    #[tokio::test]
    async fn submit_failure_keeps_draft_and_records_server_message() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_create_project()
            .times(1)
            .returning(|_| Err(WriteFailure::Rejected("Title already taken".to_string())));

        let mut form = filled_form(gateway);

        let err = form.submit().await.unwrap_err();

        assert_eq!(err, SubmitError::Rejected("Title already taken".to_string()));
        assert_eq!(form.submission_error(), Some("Title already taken"));
        // draft fully preserved for retry
        assert_eq!(form.draft().title, "X");
        assert_eq!(form.draft().technologies, vec!["Go".to_string()]);
        // both affordances re-enabled once the call resolved
        assert!(form.can_submit());
        assert!(form.can_cancel());
    }

    #[tokio::test]
    async fn submit_failure_without_message_uses_fallback() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_create_project()
            .returning(|_| Err(WriteFailure::Transport("connection refused".to_string())));

        let mut form = filled_form(gateway);

        let _ = form.submit().await.unwrap_err();

        assert_eq!(form.submission_error(), Some(SUBMIT_FALLBACK_ERROR));
    }

    #[tokio::test]
    async fn retry_after_failure_succeeds_without_reentering_data() {
        let mut gateway = MockGateway::new();
        let mut calls = 0;
        gateway.expect_create_project().returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(WriteFailure::Transport("timeout".to_string()))
            } else {
                Ok(persisted("X"))
            }
        });

        let mut form = filled_form(gateway);

        assert!(form.submit().await.is_err());
        assert!(form.submit().await.is_ok());
        assert!(form.draft().is_empty());
    }

    #[test]
    fn cancel_resets_form_when_idle() {
        let mut form = filled_form(MockGateway::new());

        assert!(form.cancel());

        assert!(form.draft().is_empty());
        assert!(form.submission_error().is_none());
    }
}
