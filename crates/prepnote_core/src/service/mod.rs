//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep API/UI layers decoupled from storage details.

pub mod flashcard_service;
pub mod progress_service;
pub mod review_service;
pub mod test_service;
