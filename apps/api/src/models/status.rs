use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A health-check record held by the ephemeral status store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusRecord {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusRecord {
    pub fn new(client_name: impl Into<String>) -> Self {
        StatusRecord {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }
}
