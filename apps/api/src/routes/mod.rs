pub mod health;
pub mod json;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
};
use tracing::warn;

use crate::config::Config;
use crate::errors::panic_response;
use crate::generation::handlers as generation;
use crate::projects::handlers as projects;
use crate::state::AppState;
use crate::status::handlers as status;

pub fn build_router(state: AppState) -> Router {
    with_middleware(api_routes(), state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api", get(health::root_handler))
        .route("/api/", get(health::root_handler))
        // Status checks
        .route(
            "/api/status",
            get(status::handle_list_status).post(status::handle_create_status),
        )
        // Generation
        .route(
            "/api/generate-project",
            post(generation::handle_generate_project),
        )
        .route(
            "/api/project-types",
            get(generation::handle_list_project_types),
        )
        // Saved projects
        .route("/api/projects/save", post(projects::handle_save_project))
        .route("/api/projects/:user_id", get(projects::handle_list_projects))
        .route(
            "/api/project-stats/:user_id",
            get(projects::handle_project_stats),
        )
}

/// Layers shared by every route. Panics become the 500 error envelope.
fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

/// Permissive unless the config names specific origins.
pub fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_is_permissive() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
