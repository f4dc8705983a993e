mod create_project;
mod list_projects;

pub use create_project::{__path_create_project_handler, create_project_handler, CreateProjectRequest};
pub use list_projects::{__path_list_projects_handler, list_projects_handler};
