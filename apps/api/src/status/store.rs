//! In-process, append-only store of status records.
//!
//! Records live only as long as the process. Appends take the write lock for
//! the duration of a single push, so concurrent creates never lose entries.

use tokio::sync::RwLock;

use crate::models::status::StatusRecord;

#[derive(Debug, Default)]
pub struct StatusStore {
    records: RwLock<Vec<StatusRecord>>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record with a fresh id and the current UTC time, appends it,
    /// and returns a copy.
    pub async fn create(&self, client_name: impl Into<String>) -> StatusRecord {
        let record = StatusRecord::new(client_name);
        self.records.write().await.push(record.clone());
        record
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<StatusRecord> {
        self.records.read().await.clone()
    }
}
