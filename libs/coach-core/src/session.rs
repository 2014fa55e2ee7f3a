//! Lesson session state machine.
//!
//! A session steps through a lesson's blocks in order. Grading never
//! gates advancement: answers feed a statistics counter, and the
//! learner may move on regardless of correctness. Completion is
//! reported exactly once, when `advance` leaves the final block.

use crate::lesson::{Block, Lesson, MatchPair};
use crate::matching::compare_answers;

/// Outcome of one pairing attempt in a matching block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Correct pairing; removed from the remaining set.
    Matched,
    /// Final correct pairing; every pair has now matched once.
    BlockComplete,
    /// Wrong pairing; the error counter advanced.
    Mismatch,
    /// The left token is not part of the remaining set (already
    /// matched, or not a matching block).
    Rejected,
}

/// What `advance` did.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Moved to the block at this index.
    Continue(usize),
    /// Left the final block; the session is finished.
    Completed(LessonOutcome),
}

/// Session statistics, reported once on completion. The caller is
/// responsible for crediting `reward_xp` to the progress tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonOutcome {
    pub lesson_id: String,
    pub reward_xp: u32,
    /// Interactive blocks answered correctly.
    pub correct: u32,
    /// Interactive blocks that received at least one answer.
    pub answered: u32,
    /// Wrong pairing attempts across all matching blocks.
    pub matching_errors: u32,
}

/// Steps a learner through one lesson and tallies correctness.
/// Created when the lesson starts; discarded after completion.
#[derive(Debug, Clone)]
pub struct LessonSession {
    lesson: Lesson,
    index: usize,
    completed: bool,
    correct: u32,
    answered: u32,
    matching_errors: u32,
    block_answered: bool,
    block_credited: bool,
    block_errors: u32,
    remaining_pairs: Vec<MatchPair>,
}

impl LessonSession {
    pub fn new(lesson: Lesson) -> Self {
        assert!(!lesson.blocks.is_empty(), "lesson has no blocks");
        let mut session = Self {
            lesson,
            index: 0,
            completed: false,
            correct: 0,
            answered: 0,
            matching_errors: 0,
            block_answered: false,
            block_credited: false,
            block_errors: 0,
            remaining_pairs: Vec::new(),
        };
        session.enter_block();
        session
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    pub fn block_index(&self) -> usize {
        self.index
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn matching_errors(&self) -> u32 {
        self.matching_errors
    }

    /// The block the learner is on, or `None` once completed.
    pub fn current_block(&self) -> Option<&Block> {
        if self.completed {
            None
        } else {
            Some(&self.lesson.blocks[self.index])
        }
    }

    /// Unmatched pairs left in the current matching block.
    pub fn remaining_pairs(&self) -> &[MatchPair] {
        &self.remaining_pairs
    }

    /// Grade a multiple-choice answer. Returns whether `option` was
    /// the correct index; never gates advancement.
    pub fn answer_choice(&mut self, option: usize) -> bool {
        let Some(Block::MultipleChoice { answer, .. }) = self.current_block() else {
            return false;
        };
        let ok = *answer == option;
        self.note_answer(ok);
        ok
    }

    /// Grade a typed answer, case- and whitespace-insensitively.
    pub fn submit_typed(&mut self, typed: &str) -> bool {
        let Some(Block::TypedAnswer { answer, .. }) = self.current_block() else {
            return false;
        };
        let ok = compare_answers(typed, answer).is_correct;
        self.note_answer(ok);
        ok
    }

    /// Attempt to pair a left token with a right token in the current
    /// matching block. Wrong pairings count errors but never block
    /// completion; the block is complete once every pair has matched.
    pub fn match_pair(&mut self, left: &str, right: &str) -> PairOutcome {
        if !matches!(self.current_block(), Some(Block::MatchingPairs { .. })) {
            return PairOutcome::Rejected;
        }
        let Some(position) = self.remaining_pairs.iter().position(|p| p.left == left) else {
            return PairOutcome::Rejected;
        };

        if self.remaining_pairs[position].right == right {
            self.remaining_pairs.remove(position);
            if self.remaining_pairs.is_empty() {
                // A flawless block counts towards the correct tally.
                self.note_answer(self.block_errors == 0);
                PairOutcome::BlockComplete
            } else {
                PairOutcome::Matched
            }
        } else {
            self.block_errors += 1;
            self.matching_errors += 1;
            PairOutcome::Mismatch
        }
    }

    /// Whether the current block still requires pairing work. Non-
    /// matching blocks report `true`.
    pub fn matching_complete(&self) -> bool {
        self.remaining_pairs.is_empty()
    }

    /// Move to the next block, or complete the session after the
    /// final one.
    ///
    /// # Panics
    /// Panics when called on an already-completed session; with
    /// correct wiring that is a programming error.
    pub fn advance(&mut self) -> Step {
        assert!(!self.completed, "advance on a completed lesson session");

        self.index += 1;
        if self.index == self.lesson.blocks.len() {
            self.completed = true;
            Step::Completed(LessonOutcome {
                lesson_id: self.lesson.id.clone(),
                reward_xp: self.lesson.reward_xp,
                correct: self.correct,
                answered: self.answered,
                matching_errors: self.matching_errors,
            })
        } else {
            self.enter_block();
            Step::Continue(self.index)
        }
    }

    fn enter_block(&mut self) {
        self.block_answered = false;
        self.block_credited = false;
        self.block_errors = 0;
        self.remaining_pairs = match self.current_block() {
            Some(Block::MatchingPairs { pairs, .. }) => pairs.clone(),
            _ => Vec::new(),
        };
    }

    /// Statistics accounting: each block counts at most once as
    /// answered and at most once as correct, however often the
    /// learner retries.
    fn note_answer(&mut self, ok: bool) {
        if !self.block_answered {
            self.block_answered = true;
            self.answered += 1;
        }
        if ok && !self.block_credited {
            self.block_credited = true;
            self.correct += 1;
        }
    }
}
