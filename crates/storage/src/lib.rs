pub mod repository;
pub mod sqlite;

pub use repository::{InMemorySessionStore, SessionStore, StorageError};
pub use sqlite::{SqliteInitError, SqliteSessionStore};
