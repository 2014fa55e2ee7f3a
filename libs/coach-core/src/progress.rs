//! XP, daily goal, and streak bookkeeping.

use crate::error::{CoreError, Result};
use crate::types::{Progress, StreakRecord};
use chrono::NaiveDate;

/// Lowest accepted daily goal, in XP.
pub const GOAL_MIN: u32 = 10;

/// Highest accepted daily goal, in XP.
pub const GOAL_MAX: u32 = 200;

/// Goal applied to fresh profiles and after a reset.
pub const DEFAULT_DAILY_GOAL: u32 = 30;

impl Default for Progress {
    fn default() -> Self {
        Self {
            xp: 0,
            daily_goal: DEFAULT_DAILY_GOAL,
            streak: StreakRecord::default(),
        }
    }
}

impl Progress {
    /// Credit earned XP. The total never decreases and has no upper
    /// bound; only an explicit reset clears it.
    pub fn add_xp(&self, amount: u32) -> Progress {
        Progress {
            xp: self.xp.saturating_add(amount),
            ..self.clone()
        }
    }

    /// Whether the XP total currently meets the daily goal.
    pub fn goal_met(&self) -> bool {
        self.xp >= self.daily_goal
    }

    /// Credit the streak for `today` if the goal is met and today has
    /// not been credited yet. Idempotent within one calendar day.
    pub fn check_streak(&self, today: NaiveDate) -> Progress {
        if self.goal_met() && self.streak.last_credited != Some(today) {
            Progress {
                streak: StreakRecord {
                    last_credited: Some(today),
                    count: self.streak.count + 1,
                },
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }

    /// Replace the daily goal. Goals outside `GOAL_MIN..=GOAL_MAX`
    /// are rejected, not clamped.
    pub fn set_daily_goal(&self, goal: u32) -> Result<Progress> {
        if !(GOAL_MIN..=GOAL_MAX).contains(&goal) {
            return Err(CoreError::GoalOutOfRange {
                goal,
                min: GOAL_MIN,
                max: GOAL_MAX,
            });
        }
        Ok(Progress {
            daily_goal: goal,
            ..self.clone()
        })
    }
}
