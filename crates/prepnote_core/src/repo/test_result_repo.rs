//! Test result repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist scored test results.
//! - Serve the dashboard aggregates (tests completed, average score).
//!
//! # Invariants
//! - Result rows are never updated or deleted by core code.
//! - Aggregates only consider rows at or after the caller's window start.

use crate::model::test_result::{TestKind, TestResult};
use crate::repo::flashcard_repo::{RepoError, RepoResult};
use rusqlite::{params, Connection};

/// Aggregate counters over persisted test results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestStats {
    /// Results recorded within the window.
    pub tests_completed: u32,
    /// Rounded mean of `percentage` within the window; 0 when empty.
    pub average_score: u32,
}

/// Repository interface for test results.
pub trait TestResultRepository {
    /// Appends one result row, returning its row id.
    fn record_test_result(
        &self,
        kind: TestKind,
        score: u32,
        total: u32,
        percentage: u32,
        created_at_ms: i64,
    ) -> RepoResult<i64>;
    /// Returns aggregates over results with `created_at >= since_ms`.
    fn test_stats(&self, since_ms: i64) -> RepoResult<TestStats>;
    /// Returns up to `limit` newest results, newest first.
    fn recent_test_results(&self, limit: u32) -> RepoResult<Vec<TestResult>>;
}

/// SQLite-backed test result repository.
pub struct SqliteTestResultRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTestResultRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TestResultRepository for SqliteTestResultRepository<'_> {
    fn record_test_result(
        &self,
        kind: TestKind,
        score: u32,
        total: u32,
        percentage: u32,
        created_at_ms: i64,
    ) -> RepoResult<i64> {
        if score > total {
            return Err(RepoError::InvalidData(format!(
                "test score {score} exceeds total {total}"
            )));
        }

        self.conn.execute(
            "INSERT INTO test_results (test_type, score, total, percentage, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![kind.as_str(), score, total, percentage, created_at_ms],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn test_stats(&self, since_ms: i64) -> RepoResult<TestStats> {
        let stats = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(AVG(percentage), 0.0)
             FROM test_results
             WHERE created_at >= ?1;",
            params![since_ms],
            |row| {
                let tests_completed: u32 = row.get(0)?;
                let average: f64 = row.get(1)?;
                Ok(TestStats {
                    tests_completed,
                    average_score: average.round() as u32,
                })
            },
        )?;

        Ok(stats)
    }

    fn recent_test_results(&self, limit: u32) -> RepoResult<Vec<TestResult>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, test_type, score, total, percentage, created_at
             FROM test_results
             ORDER BY created_at DESC, id DESC
             LIMIT ?1;",
        )?;

        let mut rows = stmt.query(params![limit])?;
        let mut results = Vec::new();

        while let Some(row) = rows.next()? {
            let type_text: String = row.get("test_type")?;
            let kind = parse_test_kind(&type_text).ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "invalid test type `{type_text}` in test_results.test_type"
                ))
            })?;

            results.push(TestResult {
                id: row.get("id")?,
                kind,
                score: row.get("score")?,
                total: row.get("total")?,
                percentage: row.get("percentage")?,
                created_at: row.get("created_at")?,
            });
        }

        Ok(results)
    }
}

fn parse_test_kind(value: &str) -> Option<TestKind> {
    match value {
        "prelims" => Some(TestKind::Prelims),
        _ => None,
    }
}
