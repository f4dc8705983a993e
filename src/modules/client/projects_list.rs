// src/modules/client/projects_list.rs

use std::sync::Arc;

use tracing::{error, warn};

use crate::modules::client::project_form::{ProjectFormController, SubmitError};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_gateway::{
    ProjectGateway, ReadFailure,
};

/// Shown in place of the list when the initial fetch fails. The real
/// cause goes to the log, never to the visitor.
pub const LOAD_FAILURE_MESSAGE: &str = "Could not load projects.";

/// Shown when the list is ready but holds nothing yet.
pub const EMPTY_LIST_MESSAGE: &str = "No projects to show yet.";

//
// ──────────────────────────────────────────────────────────
// State
// ──────────────────────────────────────────────────────────
//

/// The three mutually exclusive list states.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Ready(Vec<Project>),
    Failed(String),
}

/// What one project card renders: title, description, tags, and links
/// only for the URL fields that are present.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCardView {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
}

impl From<&Project> for ProjectCardView {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            image_url: project.image_url.clone(),
            live_url: project.project_url.clone(),
            github_url: project.github_url.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Coordinator
// ──────────────────────────────────────────────────────────
//

/// Owns the authoritative in-memory project list for display and the
/// creation form. The list is mutated only here, always by prepending
/// the freshly persisted project; a successful create never re-fetches.
pub struct ProjectsListCoordinator<G>
where
    G: ProjectGateway,
{
    gateway: Arc<G>,
    form: ProjectFormController<G>,
    state: ListState,
    /// Bumped on teardown so results from a previous activation are
    /// discarded instead of reviving dead state.
    generation: u64,
    activated: bool,
}

impl<G> ProjectsListCoordinator<G>
where
    G: ProjectGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            form: ProjectFormController::new(Arc::clone(&gateway)),
            gateway,
            state: ListState::Loading,
            generation: 0,
            activated: false,
        }
    }

    //
    // ── Accessors ─────────────────────────────────────────
    //

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn form(&self) -> &ProjectFormController<G> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectFormController<G> {
        &mut self.form
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    /// Ready with zero items: render the empty-state message.
    pub fn is_empty(&self) -> bool {
        matches!(&self.state, ListState::Ready(items) if items.is_empty())
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ListState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Card view models, present only once the list is ready.
    pub fn cards(&self) -> Option<Vec<ProjectCardView>> {
        match &self.state {
            ListState::Ready(items) => Some(items.iter().map(ProjectCardView::from).collect()),
            _ => None,
        }
    }

    //
    // ── Activation lifecycle ──────────────────────────────
    //

    /// Marks the coordinator active and hands out a ticket for applying
    /// the fetch result. Returns `None` if already activated: the
    /// initial fetch is issued exactly once per activation, not per
    /// render.
    pub fn begin_activation(&mut self) -> Option<u64> {
        if self.activated {
            return None;
        }
        self.activated = true;
        Some(self.generation)
    }

    /// Applies a fetch outcome. Results carrying a stale ticket (the
    /// view was torn down mid-flight) are discarded.
    pub fn apply_list_result(
        &mut self,
        ticket: u64,
        result: Result<Vec<Project>, ReadFailure>,
    ) {
        if ticket != self.generation {
            warn!("discarding stale project list result");
            return;
        }

        match result {
            Ok(items) => {
                // server-provided ordering is preserved as-is
                self.state = ListState::Ready(items);
            }
            Err(failure) => {
                error!("{}", failure);
                self.state = ListState::Failed(LOAD_FAILURE_MESSAGE.to_string());
            }
        }
    }

    /// Convenience for the common case: issue the fetch and apply it in
    /// one go. No-op when already activated.
    pub async fn activate(&mut self) {
        let Some(ticket) = self.begin_activation() else {
            return;
        };

        let result = self.gateway.list_projects().await;
        self.apply_list_result(ticket, result);
    }

    /// Discards any in-flight fetch result and returns to the initial
    /// state, ready for a fresh activation.
    pub fn teardown(&mut self) {
        self.generation += 1;
        self.activated = false;
        self.state = ListState::Loading;
    }

    //
    // ── Creation ──────────────────────────────────────────
    //

    /// Delegates to the form controller. A persisted project lands at
    /// index 0 of the current items; a failure leaves the list exactly
    /// as it was and surfaces only through the form's submission error.
    pub async fn submit_draft(&mut self) -> Result<Project, SubmitError> {
        let project = self.form.submit().await?;

        match &mut self.state {
            ListState::Ready(items) => items.insert(0, project.clone()),
            // Created before the list resolved: the entry is durable
            // server-side and will surface on the next fetch.
            _ => warn!("project created while list not ready; skipping prepend"),
        }

        Ok(project)
    }
}
