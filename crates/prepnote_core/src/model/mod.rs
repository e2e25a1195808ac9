//! Domain model for the study-assistant core.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep validation rules next to the records they protect.
//!
//! # Invariants
//! - Every flashcard is identified by a stable `FlashcardId`.
//! - Timestamps are epoch milliseconds throughout the core.

pub mod activity;
pub mod flashcard;
pub mod test_result;
