//! Axum route handlers for saved projects.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::models::project::ProjectRow;
use crate::projects::store::{NewProject, ProjectStats};
use crate::routes::json::ApiJson;
use crate::state::AppState;

/// Body of `POST /api/projects/save`. Everything but `user_id` is optional
/// and `null` counts as absent; generated fields are accepted in either
/// snake_case or camelCase.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SaveProjectRequest {
    /// A string or a number.
    #[serde(alias = "userId")]
    pub user_id: Value,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "projectType")]
    pub project_type: Option<String>,
    pub difficulty: Option<String>,
    #[serde(alias = "estimatedTime")]
    pub estimated_time: Option<String>,
    #[serde(alias = "estimatedCost")]
    pub estimated_cost: Option<String>,
    pub components: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    #[serde(alias = "generatedFromParams")]
    pub generated_from_params: Value,
}

impl SaveProjectRequest {
    pub fn into_new_project(self) -> Result<NewProject, AppError> {
        let user_id = match self.user_id {
            Value::String(id) if !id.trim().is_empty() => id,
            Value::Number(id) => id.to_string(),
            _ => return Err(AppError::Validation("user_id required".to_string())),
        };

        let generated_from_params = match self.generated_from_params {
            Value::Null => json!({}),
            other => other,
        };

        Ok(NewProject {
            user_id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            project_type: self.project_type.unwrap_or_default(),
            difficulty: self.difficulty.unwrap_or_default(),
            estimated_time: self.estimated_time.unwrap_or_default(),
            estimated_cost: self.estimated_cost.unwrap_or_default(),
            components: self.components.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            steps: self.steps.unwrap_or_default(),
            generated_from_params,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ProjectFilter {
    pub status: Option<String>,
}

/// POST /api/projects/save
///
/// Returns the stored row, or `{}` when the store does not echo one.
pub async fn handle_save_project(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SaveProjectRequest>,
) -> Result<Json<Value>, AppError> {
    let store = state.project_store()?;
    let project = request.into_new_project()?;
    let user_id = project.user_id.clone();

    let saved = store.save(project).await?;
    info!(user_id = %user_id, "Project saved");

    let body = match saved {
        Some(row) => serde_json::to_value(row).map_err(anyhow::Error::from)?,
        None => json!({}),
    };
    Ok(Json(body))
}

/// GET /api/projects/:user_id
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(filter): Query<ProjectFilter>,
) -> Result<Json<Vec<ProjectRow>>, AppError> {
    let store = state.project_store()?;
    let status = filter.status.as_deref().filter(|s| !s.is_empty());

    let projects = store.list_for_user(&user_id, status).await?;
    Ok(Json(projects))
}

/// GET /api/project-stats/:user_id
pub async fn handle_project_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProjectStats>, AppError> {
    let store = state.project_store()?;
    let stats = store.stats_for_user(&user_id).await?;
    Ok(Json(stats))
}
