//! Flashcard domain model.
//!
//! # Responsibility
//! - Define the canonical flashcard record shared by store and services.
//! - Validate the question/answer/review-time invariants before persistence.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another card.
//! - `times_reviewed` only ever grows, by exactly 1 per review.
//! - `next_review` is never earlier than `created_at` at creation time.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every flashcard.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type FlashcardId = Uuid;

/// Topic assigned when the caller provides none.
pub const DEFAULT_TOPIC: &str = "general";

/// Canonical flashcard record.
///
/// `next_review` starts equal to `created_at`, so a freshly saved card is
/// immediately due for its first review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Stable global ID used for review updates and auditing.
    pub uuid: FlashcardId,
    /// Prompt side of the card.
    pub question: String,
    /// Answer side of the card.
    pub answer: String,
    /// Free-text grouping label, `"general"` when the caller gave none.
    pub topic: String,
    /// Unix epoch milliseconds, set once at creation.
    pub created_at: i64,
    /// Unix epoch milliseconds. Mutated only by review updates.
    pub next_review: i64,
    /// Number of completed reviews. Never decremented.
    pub times_reviewed: u32,
}

impl Flashcard {
    /// Creates a new flashcard with a generated stable ID.
    ///
    /// # Invariants
    /// - `next_review` is initialized to `created_at_ms`.
    /// - `times_reviewed` starts at 0.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        topic: Option<&str>,
        created_at_ms: i64,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), question, answer, topic, created_at_ms)
    }

    /// Creates a flashcard with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        uuid: FlashcardId,
        question: impl Into<String>,
        answer: impl Into<String>,
        topic: Option<&str>,
        created_at_ms: i64,
    ) -> Self {
        let topic = match topic.map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => DEFAULT_TOPIC.to_string(),
        };
        Self {
            uuid,
            question: question.into(),
            answer: answer.into(),
            topic,
            created_at: created_at_ms,
            next_review: created_at_ms,
            times_reviewed: 0,
        }
    }

    /// Checks record-level invariants before persistence.
    ///
    /// # Errors
    /// - `EmptyQuestion` / `EmptyAnswer` when either side is blank.
    /// - `NextReviewBeforeCreation` when the schedule points before creation.
    pub fn validate(&self) -> Result<(), FlashcardValidationError> {
        if self.question.trim().is_empty() {
            return Err(FlashcardValidationError::EmptyQuestion);
        }
        if self.answer.trim().is_empty() {
            return Err(FlashcardValidationError::EmptyAnswer);
        }
        if self.times_reviewed == 0 && self.next_review < self.created_at {
            return Err(FlashcardValidationError::NextReviewBeforeCreation);
        }
        Ok(())
    }

    /// Returns whether this card is due for review at `as_of_ms`.
    pub fn is_due(&self, as_of_ms: i64) -> bool {
        self.next_review <= as_of_ms
    }
}

/// Validation failures for flashcard records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardValidationError {
    EmptyQuestion,
    EmptyAnswer,
    NextReviewBeforeCreation,
}

impl Display for FlashcardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQuestion => write!(f, "flashcard question must not be empty"),
            Self::EmptyAnswer => write!(f, "flashcard answer must not be empty"),
            Self::NextReviewBeforeCreation => {
                write!(f, "flashcard next_review must not be earlier than created_at")
            }
        }
    }
}

impl Error for FlashcardValidationError {}

/// Bulk-save input shape as received from the caller.
///
/// Drafts arrive in batches; an incomplete draft is skipped, never failing
/// the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardDraft {
    pub question: String,
    pub answer: String,
}

impl FlashcardDraft {
    /// Returns whether both sides carry non-blank text.
    pub fn is_complete(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }
}
