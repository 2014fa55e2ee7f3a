//! The application engine a UI shell embeds.
//!
//! `CoachEngine` owns the learner's mutable state (deck, progress,
//! active lesson session) and wires the persistence and voice ports.
//! Every learner action is a synchronous state transition followed by
//! an explicit best-effort persistence write; a failed write warns
//! and the session continues on in-memory state.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use coach_core::content::{self, DrillPhrase};
use coach_core::progress::DEFAULT_DAILY_GOAL;
use coach_core::{
    dictionary, Block, Card, CoreError, Deck, Lesson, LessonOutcome, LessonSession, PairOutcome,
    Progress, ReviewQuality, ReviewScheduler, SchedulerConfig, StageScheduler, Step, StreakRecord,
    VocabEntry,
};

use crate::error::{EngineError, Result};
use crate::store::{keys, KeyValueStore};
use crate::voice::{Listening, VoicePort};

/// Engine tunables.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub scheduler: SchedulerConfig,
    /// XP awarded for a successful card recall.
    pub review_xp_success: u32,
    /// XP awarded for a failed recall; showing up still counts.
    pub review_xp_failure: u32,
    /// Locale the content is spoken in.
    pub speech_locale: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scheduler: SchedulerConfig::default(),
            review_xp_success: 5,
            review_xp_failure: 1,
            speech_locale: content::CONTENT_LOCALE.to_string(),
        }
    }
}

/// Result of reviewing one flashcard.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    /// The card as rescheduled.
    pub card: Card,
    pub awarded_xp: u32,
    /// Streak count after the post-review check.
    pub streak_count: u32,
}

pub struct CoachEngine {
    store: Arc<dyn KeyValueStore>,
    voice: Arc<dyn VoicePort>,
    scheduler: StageScheduler,
    config: EngineConfig,
    vocabulary: Vec<VocabEntry>,
    lessons: Vec<Lesson>,
    drills: Vec<DrillPhrase>,
    deck: Deck,
    progress: Progress,
    session: Option<LessonSession>,
}

impl CoachEngine {
    /// Build an engine over the given ports, loading persisted state
    /// or seeding fresh defaults. `now` seeds the due time of a brand
    /// new deck.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        voice: Arc<dyn VoicePort>,
        config: EngineConfig,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let scheduler = StageScheduler::new(config.scheduler.clone())?;
        let vocabulary = content::starter_vocabulary();
        let lessons = content::starter_lessons();
        let drills = content::drill_phrases();

        let deck = store.get_or(keys::DECK, Deck::from_vocabulary(&vocabulary, now));
        let progress = Progress {
            xp: store.get_or(keys::XP, 0),
            daily_goal: store.get_or(keys::GOAL, DEFAULT_DAILY_GOAL),
            streak: store.get_or(keys::STREAK, StreakRecord::default()),
        };
        tracing::info!(
            cards = deck.len(),
            xp = progress.xp,
            streak = progress.streak.count,
            "engine initialized"
        );

        Ok(Self {
            store,
            voice,
            scheduler,
            config,
            vocabulary,
            lessons,
            drills,
            deck,
            progress,
            session: None,
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn vocabulary(&self) -> &[VocabEntry] {
        &self.vocabulary
    }

    pub fn drill_phrases(&self) -> &[DrillPhrase] {
        &self.drills
    }

    // ----- flashcards -----

    /// Cards due for review at `now`, in deck order.
    pub fn due_cards(&self, now: DateTime<Utc>) -> Vec<&Card> {
        self.deck.due_cards(now)
    }

    /// Review a card: reschedule it, persist the deck, award review
    /// XP, and re-check the streak.
    pub fn review_card(
        &mut self,
        card_id: i64,
        quality: ReviewQuality,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome> {
        self.deck = self.deck.review(card_id, quality, now, &self.scheduler)?;
        self.persist_deck();

        let card = self
            .deck
            .get(card_id)
            .cloned()
            .ok_or(CoreError::CardNotFound(card_id))?;
        tracing::debug!(card_id, stage = card.stage, "card rescheduled");

        let awarded_xp = if self.scheduler.is_success(quality) {
            self.config.review_xp_success
        } else {
            self.config.review_xp_failure
        };
        self.award_xp(awarded_xp, now.date_naive());

        Ok(ReviewOutcome {
            card,
            awarded_xp,
            streak_count: self.progress.streak.count,
        })
    }

    /// Untyped variant for shells that pass the review value through
    /// as an integer. Unknown values grade as a failed recall.
    pub fn review_card_raw(
        &mut self,
        card_id: i64,
        quality: u8,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome> {
        let quality = ReviewQuality::from_value(quality).unwrap_or(ReviewQuality::Hard);
        self.review_card(card_id, quality, now)
    }

    /// Speak a card's term through the voice port.
    pub fn pronounce_card(&self, card_id: i64) -> Result<()> {
        let card = self
            .deck
            .get(card_id)
            .ok_or(CoreError::CardNotFound(card_id))?;
        self.voice.speak(&card.term, &self.config.speech_locale);
        Ok(())
    }

    // ----- lessons -----

    /// Begin a lesson session, replacing any session in progress.
    pub fn start_lesson(&mut self, lesson_id: &str) -> Result<()> {
        let lesson = self
            .lessons
            .iter()
            .find(|lesson| lesson.id == lesson_id)
            .ok_or_else(|| EngineError::LessonNotFound(lesson_id.to_string()))?
            .clone();
        tracing::info!(lesson = %lesson.id, "lesson started");
        self.session = Some(LessonSession::new(lesson));
        Ok(())
    }

    /// Drop the active session without crediting anything.
    pub fn abandon_lesson(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(lesson = %session.lesson().id, "lesson abandoned");
        }
    }

    /// The block the learner is on, if a session is active.
    pub fn current_block(&self) -> Option<&Block> {
        self.session.as_ref().and_then(|s| s.current_block())
    }

    pub fn answer_choice(&mut self, option: usize) -> Result<bool> {
        Ok(self.session_mut()?.answer_choice(option))
    }

    pub fn submit_typed(&mut self, typed: &str) -> Result<bool> {
        Ok(self.session_mut()?.submit_typed(typed))
    }

    pub fn match_pair(&mut self, left: &str, right: &str) -> Result<PairOutcome> {
        Ok(self.session_mut()?.match_pair(left, right))
    }

    /// Advance the active session. On completion the lesson's reward
    /// XP is credited exactly once, the streak re-checked, and the
    /// outcome returned; otherwise `None`.
    pub fn advance_lesson(&mut self, now: DateTime<Utc>) -> Result<Option<LessonOutcome>> {
        match self.session_mut()?.advance() {
            Step::Continue(_) => Ok(None),
            Step::Completed(outcome) => {
                self.session = None;
                self.award_xp(outcome.reward_xp, now.date_naive());
                tracing::info!(
                    lesson = %outcome.lesson_id,
                    xp = outcome.reward_xp,
                    correct = outcome.correct,
                    "lesson completed"
                );
                Ok(Some(outcome))
            }
        }
    }

    /// Speak the current block's text, where it has any.
    pub fn play_block_audio(&self) -> Result<()> {
        let block = self.current_block().ok_or(EngineError::NoActiveSession)?;
        match block {
            Block::Note { text } | Block::Audio { text } => {
                self.voice.speak(text, &self.config.speech_locale);
            }
            _ => {}
        }
        Ok(())
    }

    // ----- progress -----

    /// Change the daily XP goal. The streak is re-checked right away,
    /// so lowering the goal below today's XP can credit today (at
    /// most once, as always).
    pub fn set_daily_goal(&mut self, goal: u32, today: NaiveDate) -> Result<()> {
        self.progress = self.progress.set_daily_goal(goal)?;
        self.recheck_streak(today);
        self.persist_progress();
        Ok(())
    }

    /// Clear all persisted state and return to a fresh profile.
    /// Irreversible.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        for key in keys::ALL {
            if let Err(err) = self.store.remove(key) {
                tracing::warn!(key, %err, "failed to clear stored value");
            }
        }
        self.deck = Deck::from_vocabulary(&self.vocabulary, now);
        self.progress = Progress::default();
        self.session = None;
        tracing::info!("profile reset");
    }

    // ----- dictionary & speech practice -----

    /// Case-insensitive substring lookup over the vocabulary.
    pub fn search_dictionary(&self, query: &str) -> Vec<&VocabEntry> {
        dictionary::search(&self.vocabulary, query)
    }

    /// Speak arbitrary text (drill phrases, dictionary entries).
    pub fn speak(&self, text: &str) {
        self.voice.speak(text, &self.config.speech_locale);
    }

    /// Start a one-shot recognition request; supersedes any pending
    /// one.
    pub fn start_listening(&self) -> Listening {
        self.voice.start_listening(&self.config.speech_locale)
    }

    // ----- internals -----

    fn session_mut(&mut self) -> Result<&mut LessonSession> {
        self.session.as_mut().ok_or(EngineError::NoActiveSession)
    }

    fn award_xp(&mut self, amount: u32, today: NaiveDate) {
        self.progress = self.progress.add_xp(amount);
        self.recheck_streak(today);
        self.persist_progress();
    }

    fn recheck_streak(&mut self, today: NaiveDate) {
        let before = self.progress.streak.count;
        self.progress = self.progress.check_streak(today);
        if self.progress.streak.count > before {
            tracing::info!(
                streak = self.progress.streak.count,
                "daily goal met, streak credited"
            );
        }
    }

    fn persist_deck(&self) {
        if let Err(err) = self.store.set(keys::DECK, &self.deck) {
            tracing::warn!(%err, "failed to persist deck");
        }
    }

    fn persist_progress(&self) {
        let writes = [
            self.store.set(keys::XP, &self.progress.xp),
            self.store.set(keys::GOAL, &self.progress.daily_goal),
            self.store.set(keys::STREAK, &self.progress.streak),
        ];
        for result in writes {
            if let Err(err) = result {
                tracing::warn!(%err, "failed to persist progress");
            }
        }
    }
}
