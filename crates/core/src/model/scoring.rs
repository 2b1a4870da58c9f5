/// One translation attempt, consumed by the scoring service and discarded
/// after the verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationAttempt {
    pub original: String,
    pub submitted: String,
}

impl TranslationAttempt {
    #[must_use]
    pub fn new(original: impl Into<String>, submitted: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            submitted: submitted.into(),
        }
    }
}

/// Verdict returned by the scoring service for one attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringVerdict {
    pub is_correct: bool,
    /// Literal substrings of the original that were translated wrongly.
    /// Empty for a correct verdict; no uniqueness or non-overlap
    /// guarantee otherwise.
    pub wrong_spans: Vec<String>,
}

impl ScoringVerdict {
    /// Build a verdict, dropping any spans that accompany a correct one.
    #[must_use]
    pub fn new(is_correct: bool, wrong_spans: Vec<String>) -> Self {
        Self {
            is_correct,
            wrong_spans: if is_correct { Vec::new() } else { wrong_spans },
        }
    }

    #[must_use]
    pub fn correct() -> Self {
        Self::new(true, Vec::new())
    }

    #[must_use]
    pub fn incorrect(wrong_spans: Vec<String>) -> Self {
        Self::new(false, wrong_spans)
    }
}
