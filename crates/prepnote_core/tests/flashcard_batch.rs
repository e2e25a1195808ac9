use prepnote_core::db::open_db_in_memory;
use prepnote_core::{
    ActivityRepository, FlashcardDraft, FlashcardListQuery, FlashcardRepository,
    FlashcardService, FlashcardServiceError, ProgressService, SqliteActivityRepository,
    SqliteFlashcardRepository, SqliteTestResultRepository, DEFAULT_TOPIC,
};
use rusqlite::Connection;

fn service(conn: &Connection) -> FlashcardService<SqliteFlashcardRepository<'_>, SqliteActivityRepository<'_>> {
    FlashcardService::new(
        SqliteFlashcardRepository::new(conn),
        SqliteActivityRepository::new(conn),
    )
}

fn draft(question: &str, answer: &str) -> FlashcardDraft {
    FlashcardDraft {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

#[test]
fn save_batch_persists_complete_drafts() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let outcome = service
        .save_batch(
            &[draft("q1", "a1"), draft("q2", "a2")],
            Some("polity"),
            1_000,
        )
        .unwrap();

    assert_eq!(outcome.saved.len(), 2);
    assert_eq!(outcome.skipped, 0);

    let stored = SqliteFlashcardRepository::new(&conn)
        .list_flashcards(&FlashcardListQuery::default())
        .unwrap();
    assert_eq!(stored.len(), 2);
    for card in &stored {
        assert_eq!(card.topic, "polity");
        assert_eq!(card.created_at, 1_000);
        assert_eq!(card.next_review, 1_000);
        assert_eq!(card.times_reviewed, 0);
    }
}

#[test]
fn save_batch_skips_incomplete_drafts_without_failing() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let outcome = service
        .save_batch(
            &[
                draft("complete", "answer"),
                draft("", "no question"),
                draft("no answer", "   "),
            ],
            None,
            0,
        )
        .unwrap();

    assert_eq!(outcome.saved.len(), 1);
    assert_eq!(outcome.skipped, 2);
    assert_eq!(outcome.saved[0].question, "complete");
    assert_eq!(outcome.saved[0].topic, DEFAULT_TOPIC);
}

#[test]
fn save_batch_rejects_empty_input() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service.save_batch(&[], None, 0).unwrap_err();
    assert!(matches!(err, FlashcardServiceError::EmptyBatch));
}

#[test]
fn save_batch_records_one_activity_line() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    service
        .save_batch(&[draft("q1", "a1"), draft("q2", "a2")], None, 9_000)
        .unwrap();

    let activities = SqliteActivityRepository::new(&conn)
        .recent_activities(10)
        .unwrap();
    assert_eq!(activities.len(), 1);
    assert!(activities[0].description.contains("2 flashcard(s)"));
    assert_eq!(activities[0].created_at, 9_000);
}

#[test]
fn all_skipped_batch_records_no_activity() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let outcome = service.save_batch(&[draft("", "")], None, 0).unwrap();
    assert_eq!(outcome.saved.len(), 0);
    assert_eq!(outcome.skipped, 1);

    let activities = SqliteActivityRepository::new(&conn)
        .recent_activities(10)
        .unwrap();
    assert!(activities.is_empty());
}

#[test]
fn progress_snapshot_combines_stats_and_recent_activities() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    service
        .save_batch(&[draft("q1", "a1"), draft("q2", "a2")], None, 1_000)
        .unwrap();

    let progress = ProgressService::new(
        SqliteFlashcardRepository::new(&conn),
        SqliteTestResultRepository::new(&conn),
        SqliteActivityRepository::new(&conn),
    );
    let snapshot = progress.snapshot(2_000).unwrap();
    assert_eq!(snapshot.stats.total_cards, 2);
    assert_eq!(snapshot.stats.cards_reviewed, 0);
    assert_eq!(snapshot.stats.cards_due, 2);
    assert_eq!(snapshot.tests.tests_completed, 0);
    assert_eq!(snapshot.tests.average_score, 0);
    assert_eq!(snapshot.recent_activities.len(), 1);
}

#[test]
fn drafts_deserialize_from_wire_shape() {
    let batch: Vec<FlashcardDraft> = serde_json::from_str(
        r#"[
            {"question": "Who chairs the Rajya Sabha?", "answer": "The Vice-President"},
            {"question": "", "answer": "orphan answer"}
        ]"#,
    )
    .unwrap();

    assert_eq!(batch.len(), 2);
    assert!(batch[0].is_complete());
    assert!(!batch[1].is_complete());
}
