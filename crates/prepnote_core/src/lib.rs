//! Core domain logic for prepnote, a study-assistant for exam preparation.
//! This crate is the single source of truth for business invariants:
//! flashcard persistence, spaced-repetition scheduling, similarity-based
//! retrieval, and progress reporting.

pub mod db;
pub mod logging;
pub mod markup;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use markup::math::{split_math_segments, MathSegment};
pub use model::activity::Activity;
pub use model::flashcard::{
    Flashcard, FlashcardDraft, FlashcardId, FlashcardValidationError, DEFAULT_TOPIC,
};
pub use model::test_result::{score_prelims, AnswerFeedback, PrelimsScore, TestKind, TestResult};
pub use repo::activity_repo::{ActivityRepository, SqliteActivityRepository};
pub use repo::flashcard_repo::{
    FlashcardListQuery, FlashcardRepository, RepoError, RepoResult, ReviewStats,
    SqliteFlashcardRepository,
};
pub use repo::test_result_repo::{SqliteTestResultRepository, TestResultRepository, TestStats};
pub use schedule::{
    next_review_at, ReviewPerformance, ScheduleError, DUE_SESSION_LIMIT, MS_PER_DAY,
};
pub use search::embedding::{cosine_similarity, embed, SimilarityError, EMBEDDING_DIM};
pub use search::similar::{rank_documents, Document, RankedDocument, DEFAULT_TOP_K};
pub use service::flashcard_service::{BatchSaveOutcome, FlashcardService, FlashcardServiceError};
pub use service::progress_service::{ProgressService, ProgressSnapshot};
pub use service::review_service::{ReviewOutcome, ReviewService, ReviewServiceError};
pub use service::test_service::{TestService, TestServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
