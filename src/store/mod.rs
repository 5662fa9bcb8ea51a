//! Snapshot persistence module

pub mod operations;
pub mod schema;

// Re-export for convenience
pub use operations::{PersistedSnapshot, SnapshotStore, KEY_DATA_DOWNLOADED, KEY_PROGRESS};
pub use schema::initialize_store;
