use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use storage::repository::SessionStore;
use trainer_core::model::{Sentence, SessionState, StoryId, TranslationAttempt};

use crate::content_gateway::{ContentGateway, SentenceReply, SentenceRequest};
use crate::error::EngineError;
use crate::scoring_gateway::ScoringGateway;
use crate::stats::{RoundTally, SessionStats};

//
// ─── PHASES AND EVENTS ─────────────────────────────────────────────────────────
//

/// Where the engine sits within the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No sentence displayed; waiting for an advance action.
    Idle,
    /// A fetch failed or is pending; advance may be re-issued.
    AwaitingSentence,
    /// A sentence is live; waiting for a translation or a skip.
    Active,
    /// End-of-story marker shown; waiting for an explicit new story.
    StoryComplete,
}

/// State-change notifications for the presentation layer.
///
/// Transition handlers return these in issue order. An accepted
/// translation is followed in the same batch by the events of the
/// implicit advance, so there is no idle gap between a correct answer
/// and the next prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A sentence is now live and awaits translation.
    SentencePresented(Sentence),
    /// The current story ran out of sentences; waiting for the learner
    /// to start a new one.
    StoryFinished(StoryId),
    /// The submission was blank after trimming; nothing was scored.
    EmptySubmission,
    /// The translation was accepted and the level stepped down.
    Accepted { difficulty: f64 },
    /// The translation was rejected; the same sentence stays live for a
    /// retry. `wrong_spans` are literal substrings of the original to
    /// highlight.
    Rejected {
        wrong_spans: Vec<String>,
        difficulty: f64,
    },
    /// The live sentence was discarded without scoring.
    Skipped,
    /// The content service could not serve a sentence; advance may be
    /// re-issued.
    ContentUnavailable { reason: String },
    /// The scoring service was unreachable; the same sentence stays live
    /// and the level does not move.
    ScoringUnavailable { reason: String },
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Round-by-round state machine for one practice session.
///
/// Owns the [`SessionState`] value and is the only writer to it. Each
/// transition handler takes `&mut self` and runs to completion, so at
/// most one content request and one scoring request are ever in flight
/// and responses apply in issue order. Handlers compute the next state,
/// persist the changed fields through the store, and only then commit
/// the value in memory; a failed persist surfaces a storage error with
/// the in-memory state unchanged.
pub struct SessionEngine {
    state: SessionState,
    phase: SessionPhase,
    live_sentence: Option<Sentence>,
    story_difficulty: Option<f64>,
    rounds: RoundTally,
    started_at: DateTime<Utc>,
    store: Arc<dyn SessionStore>,
    content: Arc<dyn ContentGateway>,
    scoring: Arc<dyn ScoringGateway>,
}

impl SessionEngine {
    /// Begin a fresh session and persist its default fields.
    ///
    /// `started_at` should come from the caller's clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the defaults cannot be written.
    pub async fn start(
        store: Arc<dyn SessionStore>,
        content: Arc<dyn ContentGateway>,
        scoring: Arc<dyn ScoringGateway>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, EngineError> {
        let state = SessionState::new();
        store.set_difficulty(state.difficulty()).await?;
        store.set_current_story(None).await?;
        store.set_sentence_offset(0).await?;
        store.set_seen_stories(&[]).await?;

        Ok(Self::assemble(state, store, content, scoring, started_at))
    }

    /// Resume the session recorded in the store.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the persisted fields cannot be read or
    /// hold an invalid difficulty.
    pub async fn restore(
        store: Arc<dyn SessionStore>,
        content: Arc<dyn ContentGateway>,
        scoring: Arc<dyn ScoringGateway>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, EngineError> {
        let difficulty = store.get_difficulty().await?;
        let current_story = store.get_current_story().await?;
        let sentence_offset = store.get_sentence_offset().await?;
        let seen_stories = store.get_seen_stories().await?;

        let state =
            SessionState::from_persisted(difficulty, current_story, sentence_offset, seen_stories)?;

        Ok(Self::assemble(state, store, content, scoring, started_at))
    }

    fn assemble(
        state: SessionState,
        store: Arc<dyn SessionStore>,
        content: Arc<dyn ContentGateway>,
        scoring: Arc<dyn ScoringGateway>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            state,
            phase: SessionPhase::Idle,
            live_sentence: None,
            story_difficulty: None,
            rounds: RoundTally::default(),
            started_at,
            store,
            content,
            scoring,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn live_sentence(&self) -> Option<&Sentence> {
        self.live_sentence.as_ref()
    }

    #[must_use]
    pub fn difficulty(&self) -> f64 {
        self.state.difficulty()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Snapshot for the display-only stats panel.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            difficulty: self.state.difficulty(),
            stories_completed: self.state.seen_stories().len(),
            story_difficulty: self.story_difficulty,
            rounds: self.rounds,
            started_at: self.started_at,
        }
    }

    /// Request the next sentence.
    ///
    /// Valid in `Idle` and `AwaitingSentence` (retrying a failed fetch);
    /// ignored in any other phase so a round in progress is never
    /// interrupted.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the updated story pointer cannot
    /// be persisted; the in-memory state is left as it was.
    pub async fn advance(&mut self) -> Result<Vec<SessionEvent>, EngineError> {
        match self.phase {
            SessionPhase::Idle | SessionPhase::AwaitingSentence => {}
            SessionPhase::Active | SessionPhase::StoryComplete => return Ok(Vec::new()),
        }
        self.phase = SessionPhase::AwaitingSentence;

        let request = match self.state.current_story() {
            Some(story) => {
                SentenceRequest::next_sentence(story.clone(), self.state.sentence_offset())
            }
            None => SentenceRequest::new_story(
                self.state.difficulty(),
                self.state.seen_stories().to_vec(),
            ),
        };

        let reply = match self.content.fetch_sentence(&request).await {
            Ok(reply) => reply,
            Err(err) => {
                return Ok(vec![SessionEvent::ContentUnavailable {
                    reason: err.to_string(),
                }]);
            }
        };

        match reply {
            SentenceReply::EndOfStory => {
                let mut next = self.state.clone();
                let Some(story) = next.mark_story_seen() else {
                    // The service closed a story that was never opened;
                    // nothing to record.
                    self.phase = SessionPhase::Idle;
                    return Ok(Vec::new());
                };

                self.store.set_seen_stories(next.seen_stories()).await?;
                self.state = next;
                self.phase = SessionPhase::StoryComplete;
                Ok(vec![SessionEvent::StoryFinished(story)])
            }
            SentenceReply::Sentence {
                sentence,
                story_difficulty,
            } => {
                let mut next = self.state.clone();
                if let Some(story) = sentence.story_id.clone() {
                    next.begin_story(story);
                } else {
                    next.advance_sentence();
                }

                self.store.set_current_story(next.current_story()).await?;
                self.store
                    .set_sentence_offset(next.sentence_offset())
                    .await?;
                self.state = next;
                if sentence.is_first_of_story {
                    self.story_difficulty = story_difficulty;
                }
                self.live_sentence = Some(sentence.clone());
                self.phase = SessionPhase::Active;
                Ok(vec![SessionEvent::SentencePresented(sentence)])
            }
        }
    }

    /// Score a submitted translation for the live sentence.
    ///
    /// Valid only in `Active`; ignored otherwise. A blank submission is
    /// answered locally without a scoring call. An accepted translation
    /// immediately issues the next advance; a rejected one (or an
    /// unreachable scoring service) keeps the same sentence live for a
    /// retry. The level moves at most once per resolved round and only
    /// on a real verdict.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the adjusted difficulty cannot
    /// be persisted; the in-memory state is left as it was.
    pub async fn submit(&mut self, submitted: &str) -> Result<Vec<SessionEvent>, EngineError> {
        if self.phase != SessionPhase::Active {
            return Ok(Vec::new());
        }
        let Some(sentence) = self.live_sentence.clone() else {
            return Ok(Vec::new());
        };

        let submitted = submitted.trim();
        if submitted.is_empty() {
            return Ok(vec![SessionEvent::EmptySubmission]);
        }

        let attempt = TranslationAttempt::new(sentence.text, submitted);
        let verdict = match self
            .scoring
            .score_translation(&attempt.original, &attempt.submitted)
            .await
        {
            Ok(verdict) => verdict,
            Err(err) => {
                return Ok(vec![SessionEvent::ScoringUnavailable {
                    reason: err.to_string(),
                }]);
            }
        };

        let mut next = self.state.clone();
        let difficulty = next.adjust_difficulty(verdict.is_correct);
        self.store.set_difficulty(difficulty).await?;
        self.state = next;

        if verdict.is_correct {
            self.live_sentence = None;
            self.rounds.accepted += 1;
            self.phase = SessionPhase::Idle;

            let mut events = vec![SessionEvent::Accepted { difficulty }];
            events.extend(self.advance().await?);
            Ok(events)
        } else {
            self.rounds.rejected += 1;
            Ok(vec![SessionEvent::Rejected {
                wrong_spans: verdict.wrong_spans,
                difficulty,
            }])
        }
    }

    /// Discard the live sentence without scoring and fetch the next one.
    ///
    /// Debug escape hatch, not a graded round: the level never moves.
    /// Valid only in `Active`; ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the follow-up advance cannot
    /// persist its story pointer.
    pub async fn force_skip(&mut self) -> Result<Vec<SessionEvent>, EngineError> {
        if self.phase != SessionPhase::Active {
            return Ok(Vec::new());
        }

        self.live_sentence = None;
        self.rounds.skipped += 1;
        self.phase = SessionPhase::AwaitingSentence;

        let mut events = vec![SessionEvent::Skipped];
        events.extend(self.advance().await?);
        Ok(events)
    }

    /// Leave the completed story behind and begin a new one.
    ///
    /// Valid only in `StoryComplete`; ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Storage` if the cleared story pointer cannot
    /// be persisted; the in-memory state is left as it was.
    pub async fn start_new_story(&mut self) -> Result<Vec<SessionEvent>, EngineError> {
        if self.phase != SessionPhase::StoryComplete {
            return Ok(Vec::new());
        }

        let mut next = self.state.clone();
        next.reset_story();
        self.store.set_current_story(None).await?;
        self.store.set_sentence_offset(0).await?;
        self.state = next;
        self.story_difficulty = None;
        self.phase = SessionPhase::Idle;

        self.advance().await
    }
}

impl fmt::Debug for SessionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEngine")
            .field("phase", &self.phase)
            .field("state", &self.state)
            .field("live_sentence", &self.live_sentence)
            .field("rounds", &self.rounds)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use storage::repository::InMemorySessionStore;
    use trainer_core::model::ScoringVerdict;

    use crate::error::GatewayError;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[derive(Default)]
    struct ScriptedContent {
        replies: Mutex<VecDeque<Result<SentenceReply, GatewayError>>>,
        requests: Mutex<Vec<SentenceRequest>>,
    }

    impl ScriptedContent {
        fn push(&self, reply: Result<SentenceReply, GatewayError>) {
            self.replies.lock().unwrap().push_back(reply);
        }

        fn requests(&self) -> Vec<SentenceRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ContentGateway for ScriptedContent {
        async fn fetch_sentence(
            &self,
            request: &SentenceRequest,
        ) -> Result<SentenceReply, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected sentence fetch")
        }
    }

    #[derive(Default)]
    struct ScriptedScoring {
        verdicts: Mutex<VecDeque<Result<ScoringVerdict, GatewayError>>>,
        calls: Mutex<u32>,
    }

    impl ScriptedScoring {
        fn push(&self, verdict: Result<ScoringVerdict, GatewayError>) {
            self.verdicts.lock().unwrap().push_back(verdict);
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl ScoringGateway for ScriptedScoring {
        async fn score_translation(
            &self,
            _original: &str,
            _submitted: &str,
        ) -> Result<ScoringVerdict, GatewayError> {
            *self.calls.lock().unwrap() += 1;
            self.verdicts
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected scoring call")
        }
    }

    struct Harness {
        engine: SessionEngine,
        store: InMemorySessionStore,
        content: Arc<ScriptedContent>,
        scoring: Arc<ScriptedScoring>,
    }

    async fn harness() -> Harness {
        let store = InMemorySessionStore::new();
        let content = Arc::new(ScriptedContent::default());
        let scoring = Arc::new(ScriptedScoring::default());
        let engine = SessionEngine::start(
            Arc::new(store.clone()),
            content.clone(),
            scoring.clone(),
            fixed_now(),
        )
        .await
        .unwrap();

        Harness {
            engine,
            store,
            content,
            scoring,
        }
    }

    fn opener() -> SentenceReply {
        SentenceReply::Sentence {
            sentence: Sentence::first_of_story("Le chat dort.", 1.2, StoryId::new("s1.json")),
            story_difficulty: Some(1.4),
        }
    }

    fn continuation(text: &str) -> SentenceReply {
        SentenceReply::Sentence {
            sentence: Sentence::next(text, 0.9),
            story_difficulty: None,
        }
    }

    async fn activate(h: &mut Harness) {
        h.content.push(Ok(opener()));
        h.engine.advance().await.unwrap();
        assert_eq!(h.engine.phase(), SessionPhase::Active);
    }

    #[tokio::test]
    async fn first_advance_requests_a_new_story() {
        let mut h = harness().await;
        h.content.push(Ok(opener()));

        let events = h.engine.advance().await.unwrap();

        let requests = h.content.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0],
            SentenceRequest::new_story(1.5, Vec::new())
        );
        assert!(matches!(events[0], SessionEvent::SentencePresented(_)));
        assert_eq!(
            h.engine.state().current_story(),
            Some(&StoryId::new("s1.json"))
        );
        assert_eq!(h.engine.state().sentence_offset(), 1);
        assert_eq!(h.store.get_sentence_offset().await.unwrap(), 1);
        assert_eq!(
            h.store.get_current_story().await.unwrap(),
            Some(StoryId::new("s1.json"))
        );
    }

    #[tokio::test]
    async fn continuing_advance_sends_the_story_pointer() {
        let mut h = harness().await;
        activate(&mut h).await;
        h.content.push(Ok(continuation("Il rêve.")));
        h.scoring.push(Ok(ScoringVerdict::correct()));

        h.engine.submit("The cat sleeps.").await.unwrap();

        let requests = h.content.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[1],
            SentenceRequest::next_sentence(StoryId::new("s1.json"), 1)
        );
        assert_eq!(h.engine.state().sentence_offset(), 2);
    }

    #[tokio::test]
    async fn advance_is_ignored_while_a_sentence_is_live() {
        let mut h = harness().await;
        activate(&mut h).await;

        let events = h.engine.advance().await.unwrap();

        assert!(events.is_empty());
        assert_eq!(h.content.requests().len(), 1);
        assert_eq!(h.engine.phase(), SessionPhase::Active);
    }

    #[tokio::test]
    async fn last_sentence_completes_the_story_exactly_once() {
        let mut h = harness().await;
        activate(&mut h).await;
        h.content.push(Ok(SentenceReply::EndOfStory));
        h.scoring.push(Ok(ScoringVerdict::correct()));

        let events = h.engine.submit("The cat sleeps.").await.unwrap();

        assert_eq!(
            events[1],
            SessionEvent::StoryFinished(StoryId::new("s1.json"))
        );
        assert_eq!(h.engine.phase(), SessionPhase::StoryComplete);
        assert_eq!(h.engine.state().seen_stories(), &[StoryId::new("s1.json")]);
        assert_eq!(
            h.store.get_seen_stories().await.unwrap(),
            vec![StoryId::new("s1.json")]
        );
        // pointer and offset hold until the learner starts a new story
        assert_eq!(
            h.engine.state().current_story(),
            Some(&StoryId::new("s1.json"))
        );
        assert_eq!(h.engine.state().sentence_offset(), 1);

        // a stray advance changes nothing
        let ignored = h.engine.advance().await.unwrap();
        assert!(ignored.is_empty());
        assert_eq!(h.engine.state().seen_stories().len(), 1);
    }

    #[tokio::test]
    async fn start_new_story_resets_pointer_and_refetches() {
        let mut h = harness().await;
        activate(&mut h).await;
        h.content.push(Ok(SentenceReply::EndOfStory));
        h.scoring.push(Ok(ScoringVerdict::correct()));
        h.engine.submit("The cat sleeps.").await.unwrap();

        let next_opener = SentenceReply::Sentence {
            sentence: Sentence::first_of_story("La mer brille.", 1.1, StoryId::new("s2.json")),
            story_difficulty: Some(1.0),
        };
        h.content.push(Ok(next_opener));

        let events = h.engine.start_new_story().await.unwrap();

        assert!(matches!(events[0], SessionEvent::SentencePresented(_)));
        let requests = h.content.requests();
        let last = requests.last().unwrap();
        assert_eq!(
            *last,
            SentenceRequest::new_story(1.4, vec![StoryId::new("s1.json")])
        );
        assert_eq!(
            h.engine.state().current_story(),
            Some(&StoryId::new("s2.json"))
        );
        assert_eq!(h.engine.state().sentence_offset(), 1);
    }

    #[tokio::test]
    async fn empty_submission_never_reaches_the_scorer() {
        let mut h = harness().await;
        activate(&mut h).await;

        let events = h.engine.submit("   ").await.unwrap();

        assert_eq!(events, vec![SessionEvent::EmptySubmission]);
        assert_eq!(h.scoring.calls(), 0);
        assert!((h.engine.difficulty() - 1.5).abs() < 1e-9);
        assert_eq!(h.engine.phase(), SessionPhase::Active);
    }

    #[tokio::test]
    async fn accepted_translation_steps_down_and_auto_advances() {
        let mut h = harness().await;
        activate(&mut h).await;
        h.content.push(Ok(continuation("Il rêve.")));
        h.scoring.push(Ok(ScoringVerdict::correct()));

        let events = h.engine.submit("The cat sleeps.").await.unwrap();

        assert!(matches!(
            events[0],
            SessionEvent::Accepted { difficulty } if (difficulty - 1.4).abs() < 1e-9
        ));
        assert!(matches!(events[1], SessionEvent::SentencePresented(_)));
        assert!((h.store.get_difficulty().await.unwrap() - 1.4).abs() < 1e-9);
        // exactly one automatic fetch on top of the opener
        assert_eq!(h.content.requests().len(), 2);
        assert_eq!(h.engine.live_sentence().unwrap().text, "Il rêve.");
    }

    #[tokio::test]
    async fn rejected_translation_steps_up_and_keeps_the_sentence() {
        let mut h = harness().await;
        activate(&mut h).await;
        h.scoring
            .push(Ok(ScoringVerdict::incorrect(vec!["chat".into()])));

        let events = h.engine.submit("The dog sleeps.").await.unwrap();

        assert_eq!(
            events,
            vec![SessionEvent::Rejected {
                wrong_spans: vec!["chat".into()],
                difficulty: h.engine.difficulty(),
            }]
        );
        assert!((h.engine.difficulty() - 1.6).abs() < 1e-9);
        assert!((h.store.get_difficulty().await.unwrap() - 1.6).abs() < 1e-9);
        assert_eq!(h.engine.phase(), SessionPhase::Active);
        assert_eq!(h.engine.live_sentence().unwrap().text, "Le chat dort.");
        // no advance was issued
        assert_eq!(h.content.requests().len(), 1);
    }

    #[tokio::test]
    async fn scoring_failure_leaves_the_level_alone() {
        let mut h = harness().await;
        activate(&mut h).await;
        h.scoring
            .push(Err(GatewayError::InvalidResponse("scorer down".into())));

        let events = h.engine.submit("The cat sleeps.").await.unwrap();

        assert!(matches!(events[0], SessionEvent::ScoringUnavailable { .. }));
        assert!((h.engine.difficulty() - 1.5).abs() < 1e-9);
        assert_eq!(h.engine.phase(), SessionPhase::Active);
        assert_eq!(h.engine.live_sentence().unwrap().text, "Le chat dort.");
    }

    #[tokio::test]
    async fn force_skip_never_touches_the_level() {
        let mut h = harness().await;
        activate(&mut h).await;
        h.content.push(Ok(continuation("Il rêve.")));

        let events = h.engine.force_skip().await.unwrap();

        assert_eq!(events[0], SessionEvent::Skipped);
        assert!(matches!(events[1], SessionEvent::SentencePresented(_)));
        assert!((h.engine.difficulty() - 1.5).abs() < 1e-9);
        assert_eq!(h.scoring.calls(), 0);
        assert_eq!(h.engine.stats().rounds.skipped, 1);
    }

    #[tokio::test]
    async fn content_failure_keeps_the_engine_retryable() {
        let mut h = harness().await;
        h.content
            .push(Err(GatewayError::InvalidResponse("service down".into())));

        let events = h.engine.advance().await.unwrap();

        assert!(matches!(events[0], SessionEvent::ContentUnavailable { .. }));
        assert_eq!(h.engine.phase(), SessionPhase::AwaitingSentence);
        assert_eq!(h.engine.state().current_story(), None);

        // the retry goes through untouched
        h.content.push(Ok(opener()));
        let events = h.engine.advance().await.unwrap();
        assert!(matches!(events[0], SessionEvent::SentencePresented(_)));
        assert_eq!(h.engine.phase(), SessionPhase::Active);
    }

    #[tokio::test]
    async fn submit_outside_an_active_round_is_ignored() {
        let mut h = harness().await;

        let events = h.engine.submit("anything").await.unwrap();

        assert!(events.is_empty());
        assert_eq!(h.scoring.calls(), 0);
    }

    #[tokio::test]
    async fn restore_picks_up_the_persisted_session() {
        let store = InMemorySessionStore::new();
        store.set_difficulty(2.2).await.unwrap();
        store
            .set_current_story(Some(&StoryId::new("s7.json")))
            .await
            .unwrap();
        store.set_sentence_offset(5).await.unwrap();
        store
            .set_seen_stories(&[StoryId::new("s1.json")])
            .await
            .unwrap();

        let content = Arc::new(ScriptedContent::default());
        let scoring = Arc::new(ScriptedScoring::default());
        let mut engine = SessionEngine::restore(
            Arc::new(store),
            content.clone(),
            scoring,
            fixed_now(),
        )
        .await
        .unwrap();

        assert!((engine.difficulty() - 2.2).abs() < 1e-9);
        assert_eq!(engine.state().sentence_offset(), 5);

        content.push(Ok(continuation("Suite de l'histoire.")));
        engine.advance().await.unwrap();
        assert_eq!(
            content.requests()[0],
            SentenceRequest::next_sentence(StoryId::new("s7.json"), 5)
        );
    }
}
