#![forbid(unsafe_code)]

pub mod content_gateway;
pub mod engine;
pub mod error;
pub mod scoring_gateway;
pub mod stats;

pub use content_gateway::{ContentGateway, HttpContentGateway, SentenceReply, SentenceRequest};
pub use engine::{SessionEngine, SessionEvent, SessionPhase};
pub use error::{EngineError, GatewayError};
pub use scoring_gateway::{HttpScoringGateway, ScoringGateway};
pub use stats::{RoundTally, SessionStats};
