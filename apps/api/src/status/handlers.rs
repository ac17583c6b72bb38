use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::status::StatusRecord;
use crate::routes::json::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateStatusRequest {
    #[serde(alias = "clientName")]
    pub client_name: String,
}

/// POST /api/status
pub async fn handle_create_status(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateStatusRequest>,
) -> Result<Json<StatusRecord>, AppError> {
    let record = state.status.create(request.client_name).await;
    tracing::debug!(id = %record.id, "status record created");
    Ok(Json(record))
}

/// GET /api/status
pub async fn handle_list_status(State(state): State<AppState>) -> Json<Vec<StatusRecord>> {
    Json(state.status.list().await)
}
