use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::modules::project::application::ports::outgoing::project_store::NewProject;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project persisted", body = Project),
        (status = 422, description = "Payload failed validation", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let new_project = NewProject {
        title: req.title,
        description: req.description,
        technologies: req.technologies,
        image_url: req.image_url,
        project_url: req.project_url,
        github_url: req.github_url,
    };

    match data.project.create.execute(new_project).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::InvalidDraft(errors)) => {
            ApiResponse::unprocessable(&errors.summary())
        }

        Err(CreateProjectError::StoreError(e)) => {
            error!("Store error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
