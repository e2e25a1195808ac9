//! Hash-bucket bag-of-characters embedding and cosine similarity.
//!
//! # Responsibility
//! - Map arbitrary text to a fixed-length numeric vector, deterministically.
//! - Score vector pairs by cosine similarity.
//!
//! # Invariants
//! - `embed` output always has length [`EMBEDDING_DIM`].
//! - Non-blank input embeds to a unit vector; blank input embeds to the zero
//!   vector.
//! - The bucket formula `(code_unit + word_idx * 13) % 384` is load-bearing
//!   for compatibility with previously computed vectors and must not change.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed embedding width.
pub const EMBEDDING_DIM: usize = 384;

/// Per-word bucket offset multiplier. Mixes word position into the bucket so
/// the same character in different words lands in different buckets.
const WORD_STRIDE: usize = 13;

/// Similarity computation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// The two vectors have different lengths; there is no meaningful angle
    /// between them and silently truncating would hide caller bugs.
    DimensionMismatch { left: usize, right: usize },
}

impl Display for SimilarityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { left, right } => {
                write!(f, "vector dimension mismatch: {left} vs {right}")
            }
        }
    }
}

impl Error for SimilarityError {}

/// Embeds text into a 384-dimensional L2-normalized vector.
///
/// The text is lowercased and split on whitespace runs (empty tokens
/// discarded). Each UTF-16 code unit of each word increments one bucket,
/// offset by the word's position. The accumulator is then normalized to unit
/// length; empty or whitespace-only input yields the zero vector.
///
/// Pure and deterministic: equal input produces a bit-identical vector.
pub fn embed(text: &str) -> Vec<f64> {
    let mut accumulator = vec![0.0f64; EMBEDDING_DIM];

    for (word_idx, word) in text.to_lowercase().split_whitespace().enumerate() {
        for code_unit in word.encode_utf16() {
            let bucket = (code_unit as usize + word_idx * WORD_STRIDE) % EMBEDDING_DIM;
            accumulator[bucket] += 1.0;
        }
    }

    let norm = accumulator.iter().map(|value| value * value).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in &mut accumulator {
            *value /= norm;
        }
    }

    accumulator
}

/// Cosine similarity between two equal-length vectors.
///
/// A zero-magnitude operand carries no similarity signal and scores `0.0`
/// rather than producing NaN.
///
/// # Errors
/// - [`SimilarityError::DimensionMismatch`] when the lengths differ.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / denominator)
}
