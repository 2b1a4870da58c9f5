mod ids;
mod scoring;
mod sentence;
mod session;

pub use ids::StoryId;
pub use scoring::{ScoringVerdict, TranslationAttempt};
pub use sentence::Sentence;
pub use session::SessionState;
