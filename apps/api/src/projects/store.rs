//! Project store, the persistence gateway for saved recommendations.
//!
//! `AppState` carries an `Option<Arc<dyn ProjectStore>>`; handlers ask for it
//! through `AppState::project_store()` and get a 503 when it is absent.
//!
//! The Postgres backend expects a `projects` table:
//!
//! ```sql
//! CREATE TABLE projects (
//!     id                    UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     user_id               TEXT NOT NULL,
//!     title                 TEXT NOT NULL DEFAULT '',
//!     description           TEXT NOT NULL DEFAULT '',
//!     project_type          TEXT NOT NULL DEFAULT '',
//!     difficulty            TEXT NOT NULL DEFAULT '',
//!     estimated_time        TEXT NOT NULL DEFAULT '',
//!     estimated_cost        TEXT NOT NULL DEFAULT '',
//!     components            TEXT[] NOT NULL DEFAULT '{}',
//!     skills                TEXT[] NOT NULL DEFAULT '{}',
//!     steps                 TEXT[] NOT NULL DEFAULT '{}',
//!     generated_from_params JSONB NOT NULL DEFAULT '{}',
//!     status                TEXT NOT NULL DEFAULT 'planning',
//!     created_at            TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::project::ProjectRow;

pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_IN_PROGRESS: &str = "in-progress";
pub const STATUS_PLANNING: &str = "planning";

/// A project ready to be inserted. `user_id` is already validated.
#[derive(Debug, Clone)]
pub struct NewProject {
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
}

/// Per-user counts by project status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: u64,
    pub completed: u64,
    pub in_progress: u64,
    pub planning: u64,
}

impl ProjectStats {
    /// Statuses outside the known three still count toward `total`.
    pub fn from_statuses<'a, I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        statuses
            .into_iter()
            .fold(ProjectStats::default(), |mut stats, status| {
                stats.total += 1;
                match status {
                    STATUS_COMPLETED => stats.completed += 1,
                    STATUS_IN_PROGRESS => stats.in_progress += 1,
                    STATUS_PLANNING => stats.planning += 1,
                    _ => {}
                }
                stats
            })
    }
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Inserts the project and returns the stored row, if the backend echoes one.
    async fn save(&self, project: NewProject) -> Result<Option<ProjectRow>, AppError>;

    /// Newest first. `status` narrows the result to one status value.
    async fn list_for_user(
        &self,
        user_id: &str,
        status: Option<&str>,
    ) -> Result<Vec<ProjectRow>, AppError>;

    async fn stats_for_user(&self, user_id: &str) -> Result<ProjectStats, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PgProjectStore
// ────────────────────────────────────────────────────────────────────────────

pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn save(&self, project: NewProject) -> Result<Option<ProjectRow>, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            INSERT INTO projects
                (user_id, title, description, project_type, difficulty,
                 estimated_time, estimated_cost, components, skills, steps,
                 generated_from_params)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&project.user_id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.project_type)
        .bind(&project.difficulty)
        .bind(&project.estimated_time)
        .bind(&project.estimated_cost)
        .bind(&project.components)
        .bind(&project.skills)
        .bind(&project.steps)
        .bind(&project.generated_from_params)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        status: Option<&str>,
    ) -> Result<Vec<ProjectRow>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT * FROM projects
            WHERE user_id = $1 AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn stats_for_user(&self, user_id: &str) -> Result<ProjectStats, AppError> {
        let statuses: Vec<Option<String>> =
            sqlx::query_scalar("SELECT status FROM projects WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(ProjectStats::from_statuses(
            statuses.iter().map(|s| s.as_deref().unwrap_or_default()),
        ))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory double for handler tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub mod memory {
    use super::*;
    use chrono::{Duration, Utc};
    use tokio::sync::RwLock;
    use uuid::Uuid;

    #[derive(Default)]
    pub struct InMemoryProjectStore {
        rows: RwLock<Vec<ProjectRow>>,
    }

    impl InMemoryProjectStore {
        /// Changes a stored project's status, as the client would after saving.
        pub async fn set_status(&self, id: Uuid, status: &str) {
            let mut rows = self.rows.write().await;
            if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                row.status = status.to_string();
            }
        }
    }

    #[async_trait]
    impl ProjectStore for InMemoryProjectStore {
        async fn save(&self, project: NewProject) -> Result<Option<ProjectRow>, AppError> {
            let mut rows = self.rows.write().await;
            // Strictly increasing timestamps keep newest-first ordering stable.
            let created_at = Utc::now() + Duration::milliseconds(rows.len() as i64);
            let row = ProjectRow {
                id: Uuid::new_v4(),
                user_id: project.user_id,
                title: project.title,
                description: project.description,
                project_type: project.project_type,
                difficulty: project.difficulty,
                estimated_time: project.estimated_time,
                estimated_cost: project.estimated_cost,
                components: project.components,
                skills: project.skills,
                steps: project.steps,
                generated_from_params: project.generated_from_params,
                status: STATUS_PLANNING.to_string(),
                created_at,
            };
            rows.push(row.clone());
            Ok(Some(row))
        }

        async fn list_for_user(
            &self,
            user_id: &str,
            status: Option<&str>,
        ) -> Result<Vec<ProjectRow>, AppError> {
            let mut matching: Vec<ProjectRow> = self
                .rows
                .read()
                .await
                .iter()
                .filter(|r| r.user_id == user_id)
                .filter(|r| status.map_or(true, |s| r.status == s))
                .cloned()
                .collect();
            matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(matching)
        }

        async fn stats_for_user(&self, user_id: &str) -> Result<ProjectStats, AppError> {
            let rows = self.rows.read().await;
            Ok(ProjectStats::from_statuses(
                rows.iter()
                    .filter(|r| r.user_id == user_id)
                    .map(|r| r.status.as_str()),
            ))
        }
    }
}
