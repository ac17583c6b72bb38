use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A saved project as stored in the `projects` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub project_type: String,
    pub difficulty: String,
    pub estimated_time: String,
    pub estimated_cost: String,
    pub components: Vec<String>,
    pub skills: Vec<String>,
    pub steps: Vec<String>,
    pub generated_from_params: Value,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
