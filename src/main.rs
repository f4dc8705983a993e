use actix_web::{web, App, HttpServer};
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portfolio_projects::api::openapi::ApiDoc;
use portfolio_projects::project::adapter::outgoing::project_store_memory::InMemoryProjectStore;
use portfolio_projects::project::application::project_use_cases::ProjectUseCases;
use portfolio_projects::project::application::service::{
    CreateProjectService, ListProjectsService,
};
use portfolio_projects::shared::api::custom_json_config;
use portfolio_projects::AppState;

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if env == "production" {
            panic!("🚨 FATAL: test-helpers feature enabled in production environment!");
        }
        tracing::warn!(
            "⚠️  Test helper routes are ENABLED for environment: {}",
            env
        );
    }

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // All store clones share one backing list; a real engine slots in
    // behind the ProjectStore port.
    let store = InMemoryProjectStore::new();

    let create_project_use_case = CreateProjectService::new(store.clone());
    let list_projects_use_case = ListProjectsService::new(store.clone());

    let state = AppState {
        project: ProjectUseCases {
            create: Arc::new(create_project_use_case),
            list: Arc::new(list_projects_use_case),
        },
    };

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(portfolio_projects::test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(portfolio_projects::health::health);
    cfg.service(portfolio_projects::health::readiness);
    // Projects
    cfg.service(portfolio_projects::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(portfolio_projects::project::adapter::incoming::web::routes::list_projects_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
