//! Typed-answer grading.

use serde::{Deserialize, Serialize};

/// Result of comparing a typed answer to the expected one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub is_correct: bool,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized expected answer (for display).
    pub expected_normalized: String,
}

/// Compare a typed answer to the expected answer.
///
/// Comparison trims surrounding whitespace, collapses internal runs
/// to single spaces, and ignores case; otherwise the match is exact.
/// No fuzzy matching, no partial credit.
pub fn compare_answers(typed: &str, expected: &str) -> MatchResult {
    let typed_normalized = normalize_whitespace(typed);
    let expected_normalized = normalize_whitespace(expected);
    let is_correct = typed_normalized.to_lowercase() == expected_normalized.to_lowercase();

    MatchResult {
        is_correct,
        typed_normalized,
        expected_normalized,
    }
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
