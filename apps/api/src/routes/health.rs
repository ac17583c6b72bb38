use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a status object with service version and store availability.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let project_store = if state.projects.is_some() {
        "configured"
    } else {
        "disabled"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "tinkerlab-api",
        "project_store": project_store
    }))
}

/// GET /api/
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}
