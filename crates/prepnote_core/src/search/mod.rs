//! Text-similarity retrieval entry points.
//!
//! # Responsibility
//! - Expose a deterministic, dependency-free text embedding.
//! - Rank candidate documents against a query by cosine similarity.
//!
//! This is coarse lexical retrieval, not semantic search: good enough to
//! surface related notes in a small corpus, and explicitly not a search
//! engine.

pub mod embedding;
pub mod similar;
