use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use trainer_core::difficulty::DEFAULT_DIFFICULTY;
use trainer_core::model::StoryId;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Key names under which the session fields persist.
///
/// Shared by every backend so a session written by one can be read by
/// another.
pub mod keys {
    pub const CURRENT_STORY: &str = "current_story";
    pub const SENTENCE_OFFSET: &str = "sentence_offset";
    pub const DIFFICULTY: &str = "difficulty";
    pub const SEEN_STORIES: &str = "seen_stories";
}

pub(crate) fn encode_seen(stories: &[StoryId]) -> Result<String, StorageError> {
    serde_json::to_string(stories).map_err(|err| StorageError::Serialization(err.to_string()))
}

pub(crate) fn decode_seen(raw: &str) -> Result<Vec<StoryId>, StorageError> {
    serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))
}

pub(crate) fn decode_offset(raw: &str) -> Result<u32, StorageError> {
    raw.parse()
        .map_err(|_| StorageError::Serialization(format!("invalid sentence offset: {raw}")))
}

pub(crate) fn decode_difficulty(raw: &str) -> Result<f64, StorageError> {
    raw.parse()
        .map_err(|_| StorageError::Serialization(format!("invalid difficulty: {raw}")))
}

/// Typed accessor contract over the persisted session fields.
///
/// Reads apply the documented defaults when a field has never been
/// written: no current story, offset 0, mid-range difficulty, empty seen
/// list. The current story persists as a raw string where empty means
/// none. No business logic lives here.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Story in progress, or `None` when the next request must start one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the field cannot be read or decoded.
    async fn get_current_story(&self) -> Result<Option<StoryId>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the field cannot be written.
    async fn set_current_story(&self, story: Option<&StoryId>) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the field cannot be read or decoded.
    async fn get_sentence_offset(&self) -> Result<u32, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the field cannot be written.
    async fn set_sentence_offset(&self, offset: u32) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the field cannot be read or decoded.
    async fn get_difficulty(&self) -> Result<f64, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the field cannot be written.
    async fn set_difficulty(&self, value: f64) -> Result<(), StorageError>;

    /// Completed stories in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the field cannot be read or decoded.
    async fn get_seen_stories(&self) -> Result<Vec<StoryId>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the field cannot be written.
    async fn set_seen_stories(&self, stories: &[StoryId]) -> Result<(), StorageError>;
}

/// Simple in-memory store for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    fields: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .fields
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut guard = self
            .fields
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        guard.insert(key.to_owned(), value);
        Ok(())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_current_story(&self) -> Result<Option<StoryId>, StorageError> {
        Ok(self
            .get(keys::CURRENT_STORY)?
            .filter(|raw| !raw.is_empty())
            .map(StoryId::new))
    }

    async fn set_current_story(&self, story: Option<&StoryId>) -> Result<(), StorageError> {
        let raw = story.map_or(String::new(), |s| s.as_str().to_owned());
        self.set(keys::CURRENT_STORY, raw)
    }

    async fn get_sentence_offset(&self) -> Result<u32, StorageError> {
        self.get(keys::SENTENCE_OFFSET)?
            .map_or(Ok(0), |raw| decode_offset(&raw))
    }

    async fn set_sentence_offset(&self, offset: u32) -> Result<(), StorageError> {
        self.set(keys::SENTENCE_OFFSET, offset.to_string())
    }

    async fn get_difficulty(&self) -> Result<f64, StorageError> {
        self.get(keys::DIFFICULTY)?
            .map_or(Ok(DEFAULT_DIFFICULTY), |raw| decode_difficulty(&raw))
    }

    async fn set_difficulty(&self, value: f64) -> Result<(), StorageError> {
        self.set(keys::DIFFICULTY, value.to_string())
    }

    async fn get_seen_stories(&self) -> Result<Vec<StoryId>, StorageError> {
        self.get(keys::SEEN_STORIES)?
            .map_or(Ok(Vec::new()), |raw| decode_seen(&raw))
    }

    async fn set_seen_stories(&self, stories: &[StoryId]) -> Result<(), StorageError> {
        self.set(keys::SEEN_STORIES, encode_seen(stories)?)
    }
}
