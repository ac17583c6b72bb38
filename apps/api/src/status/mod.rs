// Ephemeral status records used as a liveness check by clients.

pub mod handlers;
pub mod store;

pub use store::StatusStore;
