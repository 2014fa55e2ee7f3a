//! Interval-table spaced repetition scheduling.
//!
//! A card's mastery stage indexes a fixed ascending table of review
//! intervals. A successful recall advances the stage, a failed one
//! regresses it; the stage clamps at both ends of the table.

use crate::error::{CoreError, Result};
use crate::types::{Card, ReviewQuality};
use chrono::{DateTime, Duration, Utc};

/// Review intervals in days, indexed by mastery stage.
pub const DEFAULT_INTERVALS_DAYS: [i64; 5] = [1, 2, 4, 7, 15];

/// Minimum quality value counted as a successful recall.
pub const DEFAULT_SUCCESS_THRESHOLD: u8 = 3;

/// Scheduler parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerConfig {
    pub intervals_days: Vec<i64>,
    pub success_threshold: u8,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            intervals_days: DEFAULT_INTERVALS_DAYS.to_vec(),
            success_threshold: DEFAULT_SUCCESS_THRESHOLD,
        }
    }
}

impl SchedulerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.intervals_days.is_empty() {
            return Err(CoreError::EmptyIntervalTable);
        }
        Ok(())
    }
}

/// Trait for review schedulers.
pub trait ReviewScheduler {
    /// Compute the card's state after a review. Pure function of its
    /// inputs; the result's stage and due time are always consistent
    /// with the interval table.
    fn schedule(&self, card: &Card, quality: ReviewQuality, now: DateTime<Utc>) -> Card;

    /// Whether the given quality counts as a successful recall.
    fn is_success(&self, quality: ReviewQuality) -> bool;
}

/// Scheduler that walks a fixed ascending interval table.
#[derive(Debug, Clone)]
pub struct StageScheduler {
    config: SchedulerConfig,
}

impl Default for StageScheduler {
    fn default() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }
}

impl StageScheduler {
    pub fn new(config: SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    fn last_stage(&self) -> u8 {
        (self.config.intervals_days.len() - 1).min(u8::MAX as usize) as u8
    }
}

impl ReviewScheduler for StageScheduler {
    fn schedule(&self, card: &Card, quality: ReviewQuality, now: DateTime<Utc>) -> Card {
        let stage = if self.is_success(quality) {
            card.stage.saturating_add(1).min(self.last_stage())
        } else {
            card.stage.saturating_sub(1).min(self.last_stage())
        };
        let interval = self.config.intervals_days[stage as usize];

        Card {
            stage,
            next_due: now + Duration::days(interval),
            ..card.clone()
        }
    }

    fn is_success(&self, quality: ReviewQuality) -> bool {
        quality.to_value() >= self.config.success_threshold
    }
}
