//! Flashcard repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and review-queue APIs over `flashcards` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Flashcard::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `apply_review` is one UPDATE statement, so concurrent reviews of the
//!   same card cannot lose counter increments.

use crate::db::DbError;
use crate::model::flashcard::{Flashcard, FlashcardId, FlashcardValidationError};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const FLASHCARD_SELECT_SQL: &str = "SELECT
    uuid,
    question,
    answer,
    topic,
    times_reviewed,
    next_review,
    created_at
FROM flashcards";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for flashcard persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(FlashcardValidationError),
    Db(DbError),
    NotFound(FlashcardId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "flashcard not found: {id}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted flashcard data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<FlashcardValidationError> for RepoError {
    fn from(value: FlashcardValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing flashcards.
#[derive(Debug, Clone, Default)]
pub struct FlashcardListQuery {
    pub topic: Option<String>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Aggregate counters for the progress snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewStats {
    /// All stored cards.
    pub total_cards: u32,
    /// Cards reviewed at least once.
    pub cards_reviewed: u32,
    /// Cards currently due (`next_review <= as_of`).
    pub cards_due: u32,
}

/// Repository interface for flashcard persistence and the review queue.
pub trait FlashcardRepository {
    fn create_flashcard(&self, card: &Flashcard) -> RepoResult<FlashcardId>;
    fn get_flashcard(&self, id: FlashcardId) -> RepoResult<Option<Flashcard>>;
    fn list_flashcards(&self, query: &FlashcardListQuery) -> RepoResult<Vec<Flashcard>>;
    /// Returns cards with `next_review <= as_of_ms`, most overdue first.
    fn due_flashcards(&self, as_of_ms: i64, limit: u32) -> RepoResult<Vec<Flashcard>>;
    /// Sets `next_review` and bumps `times_reviewed` in one atomic statement.
    fn apply_review(&self, id: FlashcardId, next_review_ms: i64) -> RepoResult<()>;
    fn review_stats(&self, as_of_ms: i64) -> RepoResult<ReviewStats>;
}

/// SQLite-backed flashcard repository.
pub struct SqliteFlashcardRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFlashcardRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl FlashcardRepository for SqliteFlashcardRepository<'_> {
    fn create_flashcard(&self, card: &Flashcard) -> RepoResult<FlashcardId> {
        card.validate()?;

        self.conn.execute(
            "INSERT INTO flashcards (
                uuid,
                question,
                answer,
                topic,
                times_reviewed,
                next_review,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                card.uuid.to_string(),
                card.question.as_str(),
                card.answer.as_str(),
                card.topic.as_str(),
                card.times_reviewed,
                card.next_review,
                card.created_at,
            ],
        )?;

        Ok(card.uuid)
    }

    fn get_flashcard(&self, id: FlashcardId) -> RepoResult<Option<Flashcard>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{FLASHCARD_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_flashcard_row(row)?));
        }

        Ok(None)
    }

    fn list_flashcards(&self, query: &FlashcardListQuery) -> RepoResult<Vec<Flashcard>> {
        let mut sql = format!("{FLASHCARD_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(topic) = query.topic.as_deref() {
            sql.push_str(" AND topic = ?");
            bind_values.push(Value::Text(topic.to_string()));
        }

        sql.push_str(" ORDER BY created_at DESC, uuid ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut cards = Vec::new();

        while let Some(row) = rows.next()? {
            cards.push(parse_flashcard_row(row)?);
        }

        Ok(cards)
    }

    fn due_flashcards(&self, as_of_ms: i64, limit: u32) -> RepoResult<Vec<Flashcard>> {
        let mut stmt = self.conn.prepare(&format!(
            "{FLASHCARD_SELECT_SQL}
             WHERE next_review <= ?1
             ORDER BY next_review ASC, uuid ASC
             LIMIT ?2;"
        ))?;

        let mut rows = stmt.query(params![as_of_ms, limit])?;
        let mut cards = Vec::new();

        while let Some(row) = rows.next()? {
            cards.push(parse_flashcard_row(row)?);
        }

        Ok(cards)
    }

    fn apply_review(&self, id: FlashcardId, next_review_ms: i64) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE flashcards
             SET
                next_review = ?1,
                times_reviewed = times_reviewed + 1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?2;",
            params![next_review_ms, id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn review_stats(&self, as_of_ms: i64) -> RepoResult<ReviewStats> {
        let stats = self.conn.query_row(
            "SELECT
                COUNT(*),
                COALESCE(SUM(CASE WHEN times_reviewed > 0 THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN next_review <= ?1 THEN 1 ELSE 0 END), 0)
             FROM flashcards;",
            params![as_of_ms],
            |row| {
                Ok(ReviewStats {
                    total_cards: row.get(0)?,
                    cards_reviewed: row.get(1)?,
                    cards_due: row.get(2)?,
                })
            },
        )?;

        Ok(stats)
    }
}

fn parse_flashcard_row(row: &Row<'_>) -> RepoResult<Flashcard> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in flashcards.uuid"))
    })?;

    let times_reviewed: i64 = row.get("times_reviewed")?;
    let times_reviewed = u32::try_from(times_reviewed).map_err(|_| {
        RepoError::InvalidData(format!(
            "negative times_reviewed value `{times_reviewed}` in flashcards.times_reviewed"
        ))
    })?;

    let card = Flashcard {
        uuid,
        question: row.get("question")?,
        answer: row.get("answer")?,
        topic: row.get("topic")?,
        created_at: row.get("created_at")?,
        next_review: row.get("next_review")?,
        times_reviewed,
    };
    card.validate()?;
    Ok(card)
}
