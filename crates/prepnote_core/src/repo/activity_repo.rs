//! Activity log repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Record append-only activity lines.
//! - Serve the recent-activity feed for the progress snapshot.
//!
//! # Invariants
//! - Activity rows are never updated or deleted by core code.
//! - The recent feed is ordered newest first, deterministically.

use crate::model::activity::Activity;
use crate::repo::flashcard_repo::{RepoError, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface for the activity log.
pub trait ActivityRepository {
    /// Appends one activity line, returning its row id.
    fn record_activity(&self, description: &str, created_at_ms: i64) -> RepoResult<i64>;
    /// Returns up to `limit` newest activities, newest first.
    fn recent_activities(&self, limit: u32) -> RepoResult<Vec<Activity>>;
}

/// SQLite-backed activity repository.
pub struct SqliteActivityRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteActivityRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ActivityRepository for SqliteActivityRepository<'_> {
    fn record_activity(&self, description: &str, created_at_ms: i64) -> RepoResult<i64> {
        if description.trim().is_empty() {
            return Err(RepoError::InvalidData(
                "activity description must not be empty".to_string(),
            ));
        }

        self.conn.execute(
            "INSERT INTO activities (description, created_at) VALUES (?1, ?2);",
            params![description, created_at_ms],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn recent_activities(&self, limit: u32) -> RepoResult<Vec<Activity>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description, created_at
             FROM activities
             ORDER BY created_at DESC, id DESC
             LIMIT ?1;",
        )?;

        let mut rows = stmt.query(params![limit])?;
        let mut activities = Vec::new();

        while let Some(row) = rows.next()? {
            activities.push(Activity {
                id: row.get("id")?,
                description: row.get("description")?,
                created_at: row.get("created_at")?,
            });
        }

        Ok(activities)
    }
}
