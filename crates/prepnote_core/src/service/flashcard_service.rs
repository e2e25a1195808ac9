//! Flashcard use-case service.
//!
//! # Responsibility
//! - Bulk-save flashcard drafts with silent skipping of incomplete entries.
//! - Record an activity line for successful saves.
//!
//! # Invariants
//! - A batch never fails because of individual incomplete drafts.
//! - One activity line is written per batch with at least one saved card.

use crate::model::flashcard::{Flashcard, FlashcardDraft, FlashcardId};
use crate::repo::activity_repo::ActivityRepository;
use crate::repo::flashcard_repo::{
    FlashcardListQuery, FlashcardRepository, RepoError, RepoResult,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for flashcard use-cases.
#[derive(Debug)]
pub enum FlashcardServiceError {
    /// The caller submitted a batch with no drafts at all.
    EmptyBatch,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for FlashcardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBatch => write!(f, "no flashcards provided"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FlashcardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyBatch => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for FlashcardServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Outcome of a bulk save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSaveOutcome {
    /// Cards persisted, in submission order.
    pub saved: Vec<Flashcard>,
    /// Drafts skipped for missing question or answer.
    pub skipped: u32,
}

/// Use-case service wrapper for flashcard persistence.
pub struct FlashcardService<R: FlashcardRepository, A: ActivityRepository> {
    cards: R,
    activities: A,
}

impl<R: FlashcardRepository, A: ActivityRepository> FlashcardService<R, A> {
    /// Creates a service using the provided repository implementations.
    pub fn new(cards: R, activities: A) -> Self {
        Self { cards, activities }
    }

    /// Persists a batch of drafts, skipping incomplete entries silently.
    ///
    /// # Contract
    /// - Drafts with a blank question or answer are counted in `skipped`,
    ///   never failing the batch.
    /// - All saved cards share `topic` (default `"general"`) and are due
    ///   immediately (`next_review == created_at == now_ms`).
    /// - One activity line is recorded when at least one card was saved.
    ///
    /// # Errors
    /// - `EmptyBatch` when `drafts` is empty.
    /// - `Repo` on persistence failure of a complete draft.
    pub fn save_batch(
        &self,
        drafts: &[FlashcardDraft],
        topic: Option<&str>,
        now_ms: i64,
    ) -> Result<BatchSaveOutcome, FlashcardServiceError> {
        if drafts.is_empty() {
            return Err(FlashcardServiceError::EmptyBatch);
        }

        let mut saved = Vec::new();
        let mut skipped: u32 = 0;

        for draft in drafts {
            if !draft.is_complete() {
                skipped += 1;
                continue;
            }

            let card = Flashcard::new(
                draft.question.trim(),
                draft.answer.trim(),
                topic,
                now_ms,
            );
            self.cards.create_flashcard(&card)?;
            saved.push(card);
        }

        if !saved.is_empty() {
            self.activities.record_activity(
                &format!("Saved {} flashcard(s) to revision system", saved.len()),
                now_ms,
            )?;
        }

        info!(
            "event=flashcards_saved module=service status=ok saved={} skipped={}",
            saved.len(),
            skipped
        );

        Ok(BatchSaveOutcome { saved, skipped })
    }

    /// Gets one flashcard by stable ID.
    pub fn get_flashcard(&self, id: FlashcardId) -> RepoResult<Option<Flashcard>> {
        self.cards.get_flashcard(id)
    }

    /// Lists flashcards using filter and pagination options.
    pub fn list_flashcards(&self, query: &FlashcardListQuery) -> RepoResult<Vec<Flashcard>> {
        self.cards.list_flashcards(query)
    }
}
