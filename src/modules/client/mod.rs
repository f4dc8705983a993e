//! Visitor-facing composition core for the Projects section: the tag
//! editor, the creation form, and the list coordinator. Everything here
//! reaches persistence only through the `ProjectGateway` port.

pub mod project_form;
pub mod projects_list;
pub mod tag_list_editor;

pub use project_form::{ProjectFormController, SubmitError, SUBMIT_FALLBACK_ERROR};
pub use projects_list::{
    ListState, ProjectCardView, ProjectsListCoordinator, EMPTY_LIST_MESSAGE, LOAD_FAILURE_MESSAGE,
};
pub use tag_list_editor::{Suggestion, TagListEditor, SUGGESTED_TECHNOLOGIES};
