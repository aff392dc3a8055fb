pub mod memory;
pub mod repository;
pub mod sqlite;

pub use memory::*;
pub use repository::*;
pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage lock poisoned")]
    LockPoisoned,

    #[error("No {collection} entry at index {index} (have {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },
}

/// Text key-value namespace the record collections live in.
///
/// Every value is a whole serialized collection; there are no partial
/// updates at this layer.
pub trait KeyValueStore {
    /// Read the raw text stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the text stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
