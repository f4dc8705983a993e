mod create_project;
mod list_projects;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use list_projects::{ListProjectsError, ListProjectsUseCase};
