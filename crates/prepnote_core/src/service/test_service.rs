//! Test use-case service.
//!
//! # Responsibility
//! - Score a submitted prelims answer sheet and persist the result.
//! - Record the activity line shown on the dashboard feed.
//!
//! # Invariants
//! - One result row and one activity line per recorded test.
//! - Scoring is pure arithmetic; no external evaluation is involved.

use crate::model::test_result::{score_prelims, PrelimsScore, TestKind};
use crate::repo::activity_repo::ActivityRepository;
use crate::repo::flashcard_repo::RepoError;
use crate::repo::test_result_repo::TestResultRepository;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for test use-cases.
#[derive(Debug)]
pub enum TestServiceError {
    /// The caller submitted a test with no questions.
    EmptyTest,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for TestServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTest => write!(f, "no questions provided"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TestServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyTest => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for TestServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper for test scoring and persistence.
pub struct TestService<T: TestResultRepository, A: ActivityRepository> {
    results: T,
    activities: A,
}

impl<T: TestResultRepository, A: ActivityRepository> TestService<T, A> {
    /// Creates a service using the provided repository implementations.
    pub fn new(results: T, activities: A) -> Self {
        Self { results, activities }
    }

    /// Scores a prelims answer sheet, persists the result, and logs the
    /// activity line.
    ///
    /// # Contract
    /// - `responses[i]` is matched against `answer_key[i]`; a missing
    ///   response counts as incorrect.
    /// - The persisted percentage is the half-up rounding of
    ///   `score / total * 100`.
    ///
    /// # Errors
    /// - `EmptyTest` when `answer_key` is empty.
    /// - `Repo` on persistence failure.
    pub fn record_prelims(
        &self,
        answer_key: &[&str],
        responses: &[Option<&str>],
        now_ms: i64,
    ) -> Result<PrelimsScore, TestServiceError> {
        if answer_key.is_empty() {
            return Err(TestServiceError::EmptyTest);
        }

        let outcome = score_prelims(answer_key, responses);
        self.results.record_test_result(
            TestKind::Prelims,
            outcome.score,
            outcome.total,
            outcome.percentage,
            now_ms,
        )?;
        self.activities.record_activity(
            &format!(
                "Completed Prelims test - Score: {}/{}",
                outcome.score, outcome.total
            ),
            now_ms,
        )?;

        info!(
            "event=test_recorded module=service status=ok kind=prelims score={} total={} percentage={}",
            outcome.score, outcome.total, outcome.percentage
        );

        Ok(outcome)
    }
}
