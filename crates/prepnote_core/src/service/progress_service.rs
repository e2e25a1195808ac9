//! Progress dashboard service.
//!
//! # Responsibility
//! - Assemble one snapshot from the flashcard, test-result, and activity
//!   stores for dashboard rendering.
//!
//! # Invariants
//! - The snapshot is a point-in-time read; it never mutates state.
//! - Test aggregates cover a trailing 30-day window; activities are capped
//!   at the 10 newest.

use crate::model::activity::Activity;
use crate::repo::activity_repo::ActivityRepository;
use crate::repo::flashcard_repo::{FlashcardRepository, RepoResult, ReviewStats};
use crate::repo::test_result_repo::{TestResultRepository, TestStats};
use crate::schedule::MS_PER_DAY;

/// Number of activity lines included in the snapshot.
const SNAPSHOT_ACTIVITY_LIMIT: u32 = 10;

/// Trailing window for test aggregates, in days.
const TEST_WINDOW_DAYS: i64 = 30;

/// Progress snapshot for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Flashcard counters as of the snapshot instant.
    pub stats: ReviewStats,
    /// Test aggregates over the trailing 30 days.
    pub tests: TestStats,
    /// Newest activities first, capped at 10.
    pub recent_activities: Vec<Activity>,
}

/// Read-only service assembling the progress snapshot.
pub struct ProgressService<R, T, A>
where
    R: FlashcardRepository,
    T: TestResultRepository,
    A: ActivityRepository,
{
    cards: R,
    tests: T,
    activities: A,
}

impl<R, T, A> ProgressService<R, T, A>
where
    R: FlashcardRepository,
    T: TestResultRepository,
    A: ActivityRepository,
{
    /// Creates a service using the provided repository implementations.
    pub fn new(cards: R, tests: T, activities: A) -> Self {
        Self {
            cards,
            tests,
            activities,
        }
    }

    /// Builds the snapshot as of `as_of_ms`.
    pub fn snapshot(&self, as_of_ms: i64) -> RepoResult<ProgressSnapshot> {
        let stats = self.cards.review_stats(as_of_ms)?;
        let tests = self.tests.test_stats(as_of_ms - TEST_WINDOW_DAYS * MS_PER_DAY)?;
        let recent_activities = self.activities.recent_activities(SNAPSHOT_ACTIVITY_LIMIT)?;
        Ok(ProgressSnapshot {
            stats,
            tests,
            recent_activities,
        })
    }
}
