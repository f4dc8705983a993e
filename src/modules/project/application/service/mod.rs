mod create_project_service;
mod list_projects_service;

pub use create_project_service::CreateProjectService;
pub use list_projects_service::ListProjectsService;
