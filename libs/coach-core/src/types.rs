//! Core types for the language-learning engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single vocabulary flashcard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    /// Term in the target language.
    pub term: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Mastery level; always a valid index into the interval table.
    pub stage: u8,
    /// Earliest instant the card may be presented again.
    pub next_due: DateTime<Utc>,
}

/// Learner's recall verdict after seeing a card's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewQuality {
    Hard,
    Okay,
    Good,
    Easy,
}

impl ReviewQuality {
    /// Numeric value on the 1-5 review scale.
    pub fn to_value(self) -> u8 {
        match self {
            Self::Hard => 1,
            Self::Okay => 3,
            Self::Good => 4,
            Self::Easy => 5,
        }
    }

    /// Parse a numeric review value. Unknown values yield `None`;
    /// callers taking untyped input should grade those as failure.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Hard),
            3 => Some(Self::Okay),
            4 => Some(Self::Good),
            5 => Some(Self::Easy),
            _ => None,
        }
    }

    /// Map a plain right/wrong signal onto the quality scale.
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Good
        } else {
            Self::Hard
        }
    }
}

/// Gamification state: XP accumulator, daily goal, streak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub xp: u32,
    pub daily_goal: u32,
    pub streak: StreakRecord,
}

/// Consecutive days on which the daily goal was met.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakRecord {
    /// Calendar day the streak was last credited for, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_credited: Option<NaiveDate>,
    pub count: u32,
}

/// Static vocabulary row used to seed the deck and back the dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub term: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
