//! User-scoped persistence for reports and weekly plans.
//!
//! Each collection lives as one serialized JSON array under a single
//! fixed key in a [`KeyValueStore`]. Every operation is a whole-collection
//! read or read-modify-write; that is acceptable at single-user-session
//! scale and deliberately not designed for concurrent writers (two
//! writers race at collection granularity, last write wins).

pub mod kv;
pub mod plans;
pub mod reports;
pub mod sqlite;

use thiserror::Error;

pub use kv::{KeyValueStore, MemoryStore};
pub use plans::PlanStore;
pub use reports::ReportStore;
pub use sqlite::SqliteStore;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal lock failed")]
    LockFailed,
}
