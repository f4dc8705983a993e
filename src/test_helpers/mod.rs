use actix_web::{post, web, HttpResponse};
use serde::Serialize;

use crate::modules::project::adapter::outgoing::project_store_memory::InMemoryProjectStore;

#[derive(Serialize)]
pub struct ResetResponse {
    status: String,
    environment: String,
}

/// Wipe every stored project so e2e runs start from a clean slate.
///
/// Only mounted with the `test-helpers` feature; `start()` refuses to
/// boot with it in production.
#[post("/test/reset")]
async fn reset_state(store: web::Data<InMemoryProjectStore>) -> HttpResponse {
    store.clear().await;

    let environment =
        std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    HttpResponse::Ok().json(ResetResponse {
        status: "reset".to_string(),
        environment,
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(reset_state);
}
