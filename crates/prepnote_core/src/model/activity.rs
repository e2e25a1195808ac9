//! Activity log record.
//!
//! Append-only audit lines shown on the progress dashboard. Rows are written
//! by services when something user-visible happened (for example a bulk
//! flashcard save) and are never updated afterwards.

use serde::{Deserialize, Serialize};

/// One recorded activity line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Row id assigned by the store.
    pub id: i64,
    /// Human-readable description of what happened.
    pub description: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}
