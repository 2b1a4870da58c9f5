use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{
    SessionStore, StorageError, decode_difficulty, decode_offset, decode_seen, encode_seen, keys,
};
use trainer_core::difficulty::DEFAULT_DIFFICULTY;
use trainer_core::model::StoryId;

use super::SqliteSessionStore;

impl SqliteSessionStore {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM session_state WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        row.map(|row| {
            row.try_get("value")
                .map_err(|err| StorageError::Serialization(err.to_string()))
        })
        .transpose()
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO session_state (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn get_current_story(&self) -> Result<Option<StoryId>, StorageError> {
        Ok(self
            .get_value(keys::CURRENT_STORY)
            .await?
            .filter(|raw| !raw.is_empty())
            .map(StoryId::new))
    }

    async fn set_current_story(&self, story: Option<&StoryId>) -> Result<(), StorageError> {
        let raw = story.map_or("", StoryId::as_str);
        self.set_value(keys::CURRENT_STORY, raw).await
    }

    async fn get_sentence_offset(&self) -> Result<u32, StorageError> {
        self.get_value(keys::SENTENCE_OFFSET)
            .await?
            .map_or(Ok(0), |raw| decode_offset(&raw))
    }

    async fn set_sentence_offset(&self, offset: u32) -> Result<(), StorageError> {
        self.set_value(keys::SENTENCE_OFFSET, &offset.to_string())
            .await
    }

    async fn get_difficulty(&self) -> Result<f64, StorageError> {
        self.get_value(keys::DIFFICULTY)
            .await?
            .map_or(Ok(DEFAULT_DIFFICULTY), |raw| decode_difficulty(&raw))
    }

    async fn set_difficulty(&self, value: f64) -> Result<(), StorageError> {
        self.set_value(keys::DIFFICULTY, &value.to_string()).await
    }

    async fn get_seen_stories(&self) -> Result<Vec<StoryId>, StorageError> {
        self.get_value(keys::SEEN_STORIES)
            .await?
            .map_or(Ok(Vec::new()), |raw| decode_seen(&raw))
    }

    async fn set_seen_stories(&self, stories: &[StoryId]) -> Result<(), StorageError> {
        self.set_value(keys::SEEN_STORIES, &encode_seen(stories)?)
            .await
    }
}
