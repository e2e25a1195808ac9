//! Test result domain model and prelims scoring.
//!
//! # Responsibility
//! - Define the persisted test-result record.
//! - Score a prelims answer sheet against its key with pure arithmetic.
//!
//! # Invariants
//! - `score <= total`; `percentage` is the half-up rounding of
//!   `score / total * 100`.
//! - Scoring never divides by zero: an empty key yields percentage 0.

use serde::{Deserialize, Serialize};

/// Kind of test whose result is persisted.
///
/// Only prelims tests are scored locally; mains evaluation is free-form
/// feedback produced outside this crate and leaves no result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    Prelims,
}

impl TestKind {
    /// Wire/storage token for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prelims => "prelims",
        }
    }
}

/// One persisted test result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Row id assigned by the store.
    pub id: i64,
    pub kind: TestKind,
    /// Correctly answered questions.
    pub score: u32,
    /// Questions in the test.
    pub total: u32,
    /// Rounded percentage score.
    pub percentage: u32,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Per-question verdict returned to the caller alongside the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    /// Whether the response matched the key.
    pub correct: bool,
    /// The expected answer, echoed for display.
    pub correct_answer: String,
}

/// Outcome of scoring one prelims answer sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrelimsScore {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    /// One entry per question, in question order.
    pub feedback: Vec<AnswerFeedback>,
}

/// Scores responses against the answer key.
///
/// A missing response (unanswered question) counts as incorrect; responses
/// beyond the key length are ignored. Comparison is exact: option tokens are
/// matched as-is.
pub fn score_prelims(answer_key: &[&str], responses: &[Option<&str>]) -> PrelimsScore {
    let mut score: u32 = 0;
    let feedback: Vec<AnswerFeedback> = answer_key
        .iter()
        .enumerate()
        .map(|(idx, expected)| {
            let correct = responses.get(idx).copied().flatten() == Some(*expected);
            if correct {
                score += 1;
            }
            AnswerFeedback {
                correct,
                correct_answer: (*expected).to_string(),
            }
        })
        .collect();

    let total = answer_key.len() as u32;
    let percentage = if total == 0 {
        0
    } else {
        (f64::from(score) / f64::from(total) * 100.0).round() as u32
    };

    PrelimsScore {
        score,
        total,
        percentage,
        feedback,
    }
}
