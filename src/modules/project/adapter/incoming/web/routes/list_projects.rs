use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::ListProjectsError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects, most-recent-first", body = [Project]),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
#[get("/api/projects")]
pub async fn list_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.list.execute().await {
        Ok(projects) => ApiResponse::ok(projects),

        Err(ListProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value as JsonValue;

    use crate::modules::project::application::ports::incoming::use_cases::{
        ListProjectsError, ListProjectsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::project_fixtures::sample_project;

    /* --------------------------------------------------
     * Mock ListProjects Use Case
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockListProjectsUseCase {
        result: Result<Vec<Project>, ListProjectsError>,
    }

    impl MockListProjectsUseCase {
        fn success(data: Vec<Project>) -> Self {
            Self { result: Ok(data) }
        }

        fn error(err: ListProjectsError) -> Self {
            Self { result: Err(err) }
        }
    }

    #[async_trait]
    impl ListProjectsUseCase for MockListProjectsUseCase {
        async fn execute(&self) -> Result<Vec<Project>, ListProjectsError> {
            self.result.clone()
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_list_projects_success() {
        let app_state = TestAppStateBuilder::default()
            .with_list_projects_use_case(MockListProjectsUseCase::success(vec![sample_project()]))
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(list_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: JsonValue = test::read_body_json(resp).await;

        // bare array, no envelope
        let items = body.as_array().expect("list body is a JSON array");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], sample_project().title);
    }

    #[actix_web::test]
    async fn test_list_projects_empty_list_is_ok() {
        let app_state = TestAppStateBuilder::default()
            .with_list_projects_use_case(MockListProjectsUseCase::success(vec![]))
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(list_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_list_projects_internal_error_on_query_failed() {
        let app_state = TestAppStateBuilder::default()
            .with_list_projects_use_case(MockListProjectsUseCase::error(
                ListProjectsError::QueryFailed("store down".to_string()),
            ))
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(list_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["error"], "An unexpected error occurred");
    }
}
