//! Lesson content: an ordered sequence of heterogeneous exercise
//! blocks. Content is static and never mutated at runtime.

use serde::{Deserialize, Serialize};

/// One left/right token pair in a matching exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    pub left: String,
    pub right: String,
}

impl MatchPair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// One atomic exercise unit within a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Informational text; no interaction.
    Note { text: String },
    /// Listen-and-repeat prompt, voiced through the voice port.
    Audio { text: String },
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        /// Index of the correct option.
        answer: usize,
    },
    TypedAnswer {
        prompt: String,
        answer: String,
    },
    MatchingPairs {
        prompt: String,
        pairs: Vec<MatchPair>,
    },
}

impl Block {
    /// Whether the learner answers this block, as opposed to reading
    /// or listening through it.
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            Block::MultipleChoice { .. } | Block::TypedAnswer { .. } | Block::MatchingPairs { .. }
        )
    }
}

/// A lesson: titled block sequence with a completion reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    /// XP granted once, when the lesson completes.
    pub reward_xp: u32,
    pub blocks: Vec<Block>,
}
