use super::ids::StoryId;

/// A sentence served by the content service, live for exactly one round.
///
/// Owned by the session engine from receipt until the round resolves
/// (translation accepted or skipped). At most one instance is live at a
/// time.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Source-language text the learner translates.
    pub text: String,
    /// Rated difficulty of this sentence on the `[0.0, 3.0]` scale.
    pub difficulty: f64,
    /// Story the sentence belongs to; set only when this sentence opened
    /// the story (continuation responses do not repeat the id).
    pub story_id: Option<StoryId>,
    pub is_first_of_story: bool,
}

impl Sentence {
    /// A continuation sentence within the story already in progress.
    #[must_use]
    pub fn next(text: impl Into<String>, difficulty: f64) -> Self {
        Self {
            text: text.into(),
            difficulty,
            story_id: None,
            is_first_of_story: false,
        }
    }

    /// The opening sentence of a newly started story.
    #[must_use]
    pub fn first_of_story(text: impl Into<String>, difficulty: f64, story_id: StoryId) -> Self {
        Self {
            text: text.into(),
            difficulty,
            story_id: Some(story_id),
            is_first_of_story: true,
        }
    }
}
