use super::ids::StoryId;
use crate::difficulty::{DifficultyError, DifficultyTracker};

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// The single owned value describing where the learner is in the session.
///
/// Holds the adaptive difficulty level, the story in progress (if any),
/// the offset of the next sentence to fetch within it, and the
/// insertion-ordered set of stories completed so far. Mutated exclusively
/// by the session engine's transition handlers and persisted write-through
/// after every transition, so it is never ambient global state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    difficulty: DifficultyTracker,
    current_story: Option<StoryId>,
    sentence_offset: u32,
    seen_stories: Vec<StoryId>,
}

impl SessionState {
    /// Fresh session: mid-range difficulty, no story, nothing seen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            difficulty: DifficultyTracker::new(),
            current_story: None,
            sentence_offset: 0,
            seen_stories: Vec::new(),
        }
    }

    /// Rebuild a session from its persisted fields.
    ///
    /// The seen list is deduplicated preserving first-seen order, since
    /// it is a set serialized as an ordered list.
    ///
    /// # Errors
    ///
    /// Returns `DifficultyError` if the persisted difficulty is not a
    /// finite number.
    pub fn from_persisted(
        difficulty: f64,
        current_story: Option<StoryId>,
        sentence_offset: u32,
        seen_stories: Vec<StoryId>,
    ) -> Result<Self, DifficultyError> {
        let difficulty = DifficultyTracker::from_value(difficulty)?;

        let mut deduped: Vec<StoryId> = Vec::with_capacity(seen_stories.len());
        for story in seen_stories {
            if !deduped.contains(&story) {
                deduped.push(story);
            }
        }

        Ok(Self {
            difficulty,
            current_story,
            sentence_offset,
            seen_stories: deduped,
        })
    }

    #[must_use]
    pub fn difficulty(&self) -> f64 {
        self.difficulty.value()
    }

    /// Apply one graded round to the difficulty and return the new level.
    pub fn adjust_difficulty(&mut self, correct: bool) -> f64 {
        self.difficulty.adjust(correct)
    }

    #[must_use]
    pub fn current_story(&self) -> Option<&StoryId> {
        self.current_story.as_ref()
    }

    /// Offset of the next sentence to fetch; meaningless without a
    /// current story.
    #[must_use]
    pub fn sentence_offset(&self) -> u32 {
        self.sentence_offset
    }

    #[must_use]
    pub fn seen_stories(&self) -> &[StoryId] {
        &self.seen_stories
    }

    /// Enter a newly started story; the opening sentence was just served,
    /// so the next fetch is at offset 1.
    pub fn begin_story(&mut self, story: StoryId) {
        self.current_story = Some(story);
        self.sentence_offset = 1;
    }

    /// Record that one more sentence of the current story was served.
    pub fn advance_sentence(&mut self) {
        self.sentence_offset += 1;
    }

    /// Add the current story to the seen set, once.
    ///
    /// Returns the completed story's id, or `None` when no story is in
    /// progress. The story pointer and offset are left untouched; they
    /// reset only via [`SessionState::reset_story`].
    pub fn mark_story_seen(&mut self) -> Option<StoryId> {
        let story = self.current_story.clone()?;
        if !self.seen_stories.contains(&story) {
            self.seen_stories.push(story.clone());
        }
        Some(story)
    }

    /// Leave the completed story behind so the next request starts a new
    /// one.
    pub fn reset_story(&mut self) {
        self.current_story = None;
        self.sentence_offset = 0;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
