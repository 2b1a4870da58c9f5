use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use trainer_core::model::ScoringVerdict;

use crate::error::GatewayError;

#[derive(Debug, Serialize)]
struct ScoreRequest<'a> {
    original: &'a str,
    translation: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreResponse {
    is_correct: bool,
    #[serde(default)]
    wrong_morphemes: Option<Vec<String>>,
}

impl ScoreResponse {
    fn into_verdict(self) -> ScoringVerdict {
        ScoringVerdict::new(self.is_correct, self.wrong_morphemes.unwrap_or_default())
    }
}

/// Request/response adapter for the translation-scoring service.
#[async_trait]
pub trait ScoringGateway: Send + Sync {
    /// Score a submitted translation against the original sentence.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` when the service cannot be reached, rejects
    /// the request, or returns an unusable body. No retry is performed
    /// here.
    async fn score_translation(
        &self,
        original: &str,
        submitted: &str,
    ) -> Result<ScoringVerdict, GatewayError>;
}

/// HTTP client for the scoring service.
#[derive(Clone)]
pub struct HttpScoringGateway {
    client: Client,
    base_url: String,
}

impl HttpScoringGateway {
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
        format!("{}/score_translation", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ScoringGateway for HttpScoringGateway {
    async fn score_translation(
        &self,
        original: &str,
        submitted: &str,
    ) -> Result<ScoringVerdict, GatewayError> {
        let payload = ScoreRequest {
            original,
            translation: submitted,
        };

        let response = self
            .client
            .post(self.endpoint())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::HttpStatus(response.status()));
        }

        let body: ScoreResponse = response.json().await?;
        Ok(body.into_verdict())
    }
}
