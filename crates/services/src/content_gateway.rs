use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use trainer_core::model::{Sentence, StoryId};

use crate::error::GatewayError;

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

/// Request body for the content service.
///
/// Carries the learner level and the stories to avoid when no story is in
/// progress, or the story pointer when one is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SentenceRequest {
    #[serde(rename_all = "camelCase")]
    NewStory {
        need_new_story: bool,
        user_difficulty: f64,
        seen_stories: Vec<StoryId>,
    },
    #[serde(rename_all = "camelCase")]
    NextSentence {
        story_file: StoryId,
        sentence_index: u32,
    },
}

impl SentenceRequest {
    #[must_use]
    pub fn new_story(user_difficulty: f64, seen_stories: Vec<StoryId>) -> Self {
        Self::NewStory {
            need_new_story: true,
            user_difficulty,
            seen_stories,
        }
    }

    #[must_use]
    pub fn next_sentence(story_file: StoryId, sentence_index: u32) -> Self {
        Self::NextSentence {
            story_file,
            sentence_index,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SentenceResponse {
    #[serde(default)]
    sentence: Option<String>,
    #[serde(default)]
    sentence_difficulty: Option<f64>,
    is_last_sentence: bool,
    #[serde(default)]
    story_file: Option<StoryId>,
    #[serde(default)]
    story_difficulty: Option<f64>,
}

/// Content-service reply, lifted out of the wire shape.
#[derive(Debug, Clone, PartialEq)]
pub enum SentenceReply {
    /// The next sentence to present. `story_difficulty` accompanies the
    /// opening sentence of a newly started story.
    Sentence {
        sentence: Sentence,
        story_difficulty: Option<f64>,
    },
    /// The story in progress has no further sentences.
    EndOfStory,
}

impl SentenceResponse {
    fn into_reply(self) -> Result<SentenceReply, GatewayError> {
        if self.is_last_sentence {
            return Ok(SentenceReply::EndOfStory);
        }

        let text = self
            .sentence
            .ok_or_else(|| GatewayError::InvalidResponse("missing sentence text".into()))?;
        // The service omits the rated difficulty on some story openers.
        let difficulty = self.sentence_difficulty.unwrap_or_default();

        let sentence = match self.story_file {
            Some(story) => Sentence::first_of_story(text, difficulty, story),
            None => Sentence::next(text, difficulty),
        };

        Ok(SentenceReply::Sentence {
            sentence,
            story_difficulty: self.story_difficulty,
        })
    }
}

//
// ─── GATEWAY ───────────────────────────────────────────────────────────────────
//

/// Request/response adapter for the sentence-serving content service.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Fetch the next sentence for the given request.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` when the service cannot be reached, rejects
    /// the request, or returns an unusable body. No retry is performed
    /// here.
    async fn fetch_sentence(
        &self,
        request: &SentenceRequest,
    ) -> Result<SentenceReply, GatewayError>;
}

/// HTTP client for the content service.
#[derive(Clone)]
pub struct HttpContentGateway {
    client: Client,
    base_url: String,
}

impl HttpContentGateway {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build a gateway from `TRAINER_API_BASE_URL`, if set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("TRAINER_API_BASE_URL").ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        Some(Self::new(base_url))
    }

    fn endpoint(&self) -> String {
        format!("{}/get-sentence", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ContentGateway for HttpContentGateway {
    async fn fetch_sentence(
        &self,
        request: &SentenceRequest,
    ) -> Result<SentenceReply, GatewayError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::HttpStatus(response.status()));
        }

        let body: SentenceResponse = response.json().await?;
        body.into_reply()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_story_request_uses_wire_field_names() {
        let request = SentenceRequest::new_story(1.5, vec![StoryId::new("a.json")]);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "needNewStory": true,
                "userDifficulty": 1.5,
                "seenStories": ["a.json"],
            })
        );
    }

    #[test]
    fn next_sentence_request_uses_wire_field_names() {
        let request = SentenceRequest::next_sentence(StoryId::new("a.json"), 3);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "storyFile": "a.json",
                "sentenceIndex": 3,
            })
        );
    }

    #[test]
    fn response_with_story_fields_opens_a_story() {
        let raw = json!({
            "sentence": "Le chat dort.",
            "sentenceDifficulty": 1.2,
            "isLastSentence": false,
            "storyFile": "s1.json",
            "storyDifficulty": 1.4,
        });
        let response: SentenceResponse = serde_json::from_value(raw).unwrap();
        let reply = response.into_reply().unwrap();

        let SentenceReply::Sentence {
            sentence,
            story_difficulty,
        } = reply
        else {
            panic!("expected a sentence");
        };
        assert!(sentence.is_first_of_story);
        assert_eq!(sentence.story_id, Some(StoryId::new("s1.json")));
        assert_eq!(story_difficulty, Some(1.4));
    }

    #[test]
    fn continuation_response_has_no_story_fields() {
        let raw = json!({
            "sentence": "Il rêve.",
            "sentenceDifficulty": 0.8,
            "isLastSentence": false,
        });
        let response: SentenceResponse = serde_json::from_value(raw).unwrap();
        let reply = response.into_reply().unwrap();

        let SentenceReply::Sentence { sentence, .. } = reply else {
            panic!("expected a sentence");
        };
        assert!(!sentence.is_first_of_story);
        assert_eq!(sentence.story_id, None);
    }

    #[test]
    fn terminal_response_may_carry_only_the_marker() {
        let raw = json!({ "isLastSentence": true });
        let response: SentenceResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.into_reply().unwrap(), SentenceReply::EndOfStory);
    }

    #[test]
    fn missing_sentence_on_non_terminal_response_is_invalid() {
        let raw = json!({ "isLastSentence": false });
        let response: SentenceResponse = serde_json::from_value(raw).unwrap();
        assert!(matches!(
            response.into_reply(),
            Err(GatewayError::InvalidResponse(_))
        ));
    }
}
