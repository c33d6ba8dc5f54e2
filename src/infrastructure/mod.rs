// Infrastructure layer module
// Durable snapshot storage adapters
// Follows Hexagonal Architecture

pub mod snapshot;
pub mod storage;

pub use snapshot::{load_roster, save_roster, RosterSnapshot, TEAM_STORAGE_KEY, USER_STORAGE_KEY};
pub use storage::{FileStorage, InMemoryStorage, KeyValueStorage, StorageError};
