use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::modules::project::adapter::outgoing::project_store_memory::InMemoryProjectStore;
use crate::modules::project::application::ports::outgoing::project_store::ProjectStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No store access
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the project store
#[get("/ready")]
pub async fn readiness(store: web::Data<InMemoryProjectStore>) -> impl Responder {
    let store_status = match store.list_projects().await {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    if store_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            store: store_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            store: store_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_is_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_readiness_reports_store() {
        let store = InMemoryProjectStore::new();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["store"], "ok");
    }
}
