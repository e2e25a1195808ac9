//! Review use-case service.
//!
//! # Responsibility
//! - Serve the due-card queue for one review session.
//! - Translate a recall grade into the persisted next-review schedule.
//!
//! # Invariants
//! - One `record_review` call bumps `times_reviewed` by exactly 1.
//! - The due queue is bounded by `DUE_SESSION_LIMIT`.

use crate::model::flashcard::{Flashcard, FlashcardId};
use crate::repo::flashcard_repo::{FlashcardRepository, RepoError};
use crate::schedule::{next_review_at, ReviewPerformance, DUE_SESSION_LIMIT};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for review use-cases.
#[derive(Debug)]
pub enum ReviewServiceError {
    /// Target flashcard does not exist.
    CardNotFound(FlashcardId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ReviewServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CardNotFound(id) => write!(f, "flashcard not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReviewServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CardNotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ReviewServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::CardNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Result of recording one review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub card_id: FlashcardId,
    /// Days until the card comes back.
    pub interval_days: i64,
    /// New schedule, epoch milliseconds.
    pub next_review: i64,
}

/// Use-case service wrapper for the review loop.
pub struct ReviewService<R: FlashcardRepository> {
    repo: R,
}

impl<R: FlashcardRepository> ReviewService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the due queue as of `as_of_ms`, most overdue first.
    ///
    /// Capped at [`DUE_SESSION_LIMIT`] to keep one session tractable.
    pub fn due_cards(&self, as_of_ms: i64) -> Result<Vec<Flashcard>, ReviewServiceError> {
        Ok(self.repo.due_flashcards(as_of_ms, DUE_SESSION_LIMIT)?)
    }

    /// Records one review and reschedules the card.
    ///
    /// # Contract
    /// - `next_review` becomes `now_ms` plus the grade's fixed interval.
    /// - `times_reviewed` grows by exactly 1, atomically with the schedule
    ///   update.
    pub fn record_review(
        &self,
        id: FlashcardId,
        performance: ReviewPerformance,
        now_ms: i64,
    ) -> Result<ReviewOutcome, ReviewServiceError> {
        let next_review = next_review_at(now_ms, performance);
        self.repo.apply_review(id, next_review)?;

        info!(
            "event=review_recorded module=service status=ok card={id} grade={performance} interval_days={}",
            performance.interval_days()
        );

        Ok(ReviewOutcome {
            card_id: id,
            interval_days: performance.interval_days(),
            next_review,
        })
    }
}
