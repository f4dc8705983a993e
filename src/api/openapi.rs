use utoipa::OpenApi;

use crate::modules::project::adapter::incoming::web::routes::CreateProjectRequest;
use crate::modules::project::application::domain::entities::Project;
use crate::shared::api::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Projects API",
        version = "1.0.0",
        description = "Create and list portfolio projects"
    ),
    paths(
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::list_projects_handler,
    ),
    components(schemas(CreateProjectRequest, Project, ErrorBody)),
    tags(
        (name = "projects", description = "Project creation and listing"),
    )
)]
pub struct ApiDoc;
