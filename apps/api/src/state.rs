use std::sync::Arc;

use crate::errors::AppError;
use crate::projects::ProjectStore;
use crate::status::StatusStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub status: Arc<StatusStore>,
    /// Absent when no database is configured; project routes then answer 503.
    pub projects: Option<Arc<dyn ProjectStore>>,
}

impl AppState {
    pub fn new(projects: Option<Arc<dyn ProjectStore>>) -> Self {
        AppState {
            status: Arc::new(StatusStore::new()),
            projects,
        }
    }

    pub fn project_store(&self) -> Result<Arc<dyn ProjectStore>, AppError> {
        self.projects.clone().ok_or(AppError::StoreUnavailable)
    }
}
