//! Spaced-repetition review scheduling.
//!
//! # Responsibility
//! - Map a self-reported recall grade to a fixed next-review interval.
//! - Keep the per-session due-card bound in one place.
//!
//! # Invariants
//! - The interval depends only on the latest self-report, never on review
//!   history or streaks. This is a deliberate fixed-interval policy, not
//!   SM-2/Leitner.
//! - Unknown grade tokens are rejected, never defaulted.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Maximum number of due cards handed out for a single review session.
/// Callers needing more must paginate.
pub const DUE_SESSION_LIMIT: u32 = 20;

/// Scheduling errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The self-report token is not one of `easy|medium|hard`.
    UnknownPerformance(String),
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPerformance(token) => {
                write!(f, "unknown review performance `{token}`; expected easy|medium|hard")
            }
        }
    }
}

impl Error for ScheduleError {}

/// Self-reported recall grade for one flashcard review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewPerformance {
    /// Recalled without effort; push the card out a week.
    Easy,
    /// Recalled with hesitation; revisit in a few days.
    Medium,
    /// Failed or barely recalled; see it again tomorrow.
    Hard,
}

impl ReviewPerformance {
    /// Fixed days until the next review for this grade.
    pub fn interval_days(self) -> i64 {
        match self {
            Self::Easy => 7,
            Self::Medium => 3,
            Self::Hard => 1,
        }
    }

    /// Wire token for this grade.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for ReviewPerformance {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Exact tokens only, matching the serde wire names; case or
        // whitespace variants are caller bugs, not grades.
        match value {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(ScheduleError::UnknownPerformance(other.to_string())),
        }
    }
}

impl Display for ReviewPerformance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes the next review timestamp after a review at `reviewed_at_ms`.
pub fn next_review_at(reviewed_at_ms: i64, performance: ReviewPerformance) -> i64 {
    reviewed_at_ms + performance.interval_days() * MS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::{next_review_at, ReviewPerformance, ScheduleError, MS_PER_DAY};
    use std::str::FromStr;

    #[test]
    fn interval_mapping_is_fixed() {
        assert_eq!(ReviewPerformance::Easy.interval_days(), 7);
        assert_eq!(ReviewPerformance::Medium.interval_days(), 3);
        assert_eq!(ReviewPerformance::Hard.interval_days(), 1);
    }

    #[test]
    fn parse_accepts_exact_tokens_only() {
        assert_eq!(
            ReviewPerformance::from_str("easy").unwrap(),
            ReviewPerformance::Easy
        );
        assert_eq!(
            ReviewPerformance::from_str("medium").unwrap(),
            ReviewPerformance::Medium
        );
        assert_eq!(
            ReviewPerformance::from_str("hard").unwrap(),
            ReviewPerformance::Hard
        );
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        for token in ["trivial", "Easy", " medium ", "EASY", ""] {
            let err = ReviewPerformance::from_str(token).unwrap_err();
            assert_eq!(err, ScheduleError::UnknownPerformance(token.to_string()));
        }
    }

    #[test]
    fn next_review_adds_whole_days() {
        let now = 1_700_000_000_000;
        assert_eq!(
            next_review_at(now, ReviewPerformance::Hard),
            now + MS_PER_DAY
        );
        assert_eq!(
            next_review_at(now, ReviewPerformance::Easy),
            now + 7 * MS_PER_DAY
        );
    }

    #[test]
    fn wire_tokens_are_lowercase() {
        assert_eq!(ReviewPerformance::Easy.as_str(), "easy");
        assert_eq!(ReviewPerformance::Hard.to_string(), "hard");
    }
}
