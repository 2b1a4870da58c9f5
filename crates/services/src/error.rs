//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use trainer_core::difficulty::DifficultyError;

/// Errors surfaced by the content and scoring gateways.
///
/// A gateway never retries on its own; the failure reaches the engine,
/// which decides what the round does with it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors emitted by `SessionEngine`.
///
/// Round-level trouble (empty submission, an unreachable gateway) is
/// reported through session events instead; these are the failures where
/// the transition no-ops.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Difficulty(#[from] DifficultyError),
}
