// Saved projects, backed by an optional external store.

pub mod handlers;
pub mod store;

pub use store::{PgProjectStore, ProjectStore};
