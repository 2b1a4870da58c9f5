use chrono::{DateTime, Utc};

/// Per-session counts of resolved rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundTally {
    pub accepted: u32,
    pub rejected: u32,
    pub skipped: u32,
}

/// Display-only snapshot of session progress for the stats panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStats {
    /// Current learner level.
    pub difficulty: f64,
    /// Stories completed this session.
    pub stories_completed: usize,
    /// Rated level of the story in progress, when the service provided
    /// one.
    pub story_difficulty: Option<f64>,
    pub rounds: RoundTally,
    pub started_at: DateTime<Utc>,
}
