use prepnote_core::db::open_db_in_memory;
use prepnote_core::{
    Flashcard, FlashcardRepository, ReviewPerformance, ReviewService, ReviewServiceError,
    SqliteFlashcardRepository, DUE_SESSION_LIMIT, MS_PER_DAY,
};
use uuid::Uuid;

#[test]
fn due_cards_returns_overdue_cards_most_overdue_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFlashcardRepository::new(&conn);

    let as_of = 100 * MS_PER_DAY;
    let two_days_overdue = card_due_at(as_of - 2 * MS_PER_DAY);
    let one_day_overdue = card_due_at(as_of - MS_PER_DAY);
    let tomorrow = card_due_at(as_of + MS_PER_DAY);
    // Insert out of order to prove ordering comes from the query.
    repo.create_flashcard(&tomorrow).unwrap();
    repo.create_flashcard(&one_day_overdue).unwrap();
    repo.create_flashcard(&two_days_overdue).unwrap();

    let service = ReviewService::new(SqliteFlashcardRepository::new(&conn));
    let due = service.due_cards(as_of).unwrap();

    assert_eq!(due.len(), 2);
    assert_eq!(due[0].uuid, two_days_overdue.uuid);
    assert_eq!(due[1].uuid, one_day_overdue.uuid);
}

#[test]
fn due_cards_is_capped_per_session() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFlashcardRepository::new(&conn);

    for i in 0..(DUE_SESSION_LIMIT + 5) {
        let card = card_due_at(i64::from(i) * 1_000);
        repo.create_flashcard(&card).unwrap();
    }

    let service = ReviewService::new(SqliteFlashcardRepository::new(&conn));
    let due = service.due_cards(i64::from(DUE_SESSION_LIMIT + 5) * 1_000).unwrap();
    assert_eq!(due.len(), DUE_SESSION_LIMIT as usize);
}

#[test]
fn record_review_reschedules_by_grade_interval() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFlashcardRepository::new(&conn);
    let card = card_due_at(0);
    repo.create_flashcard(&card).unwrap();

    let service = ReviewService::new(SqliteFlashcardRepository::new(&conn));
    let now = 50 * MS_PER_DAY;
    let outcome = service
        .record_review(card.uuid, ReviewPerformance::Medium, now)
        .unwrap();

    assert_eq!(outcome.interval_days, 3);
    assert_eq!(outcome.next_review, now + 3 * MS_PER_DAY);

    let loaded = repo.get_flashcard(card.uuid).unwrap().unwrap();
    assert_eq!(loaded.next_review, outcome.next_review);
    assert_eq!(loaded.times_reviewed, 1);
}

#[test]
fn each_review_bumps_counter_by_exactly_one() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFlashcardRepository::new(&conn);
    let card = card_due_at(0);
    repo.create_flashcard(&card).unwrap();

    let service = ReviewService::new(SqliteFlashcardRepository::new(&conn));
    for (round, grade) in [
        ReviewPerformance::Hard,
        ReviewPerformance::Medium,
        ReviewPerformance::Easy,
    ]
    .into_iter()
    .enumerate()
    {
        service.record_review(card.uuid, grade, 0).unwrap();
        let loaded = repo.get_flashcard(card.uuid).unwrap().unwrap();
        assert_eq!(loaded.times_reviewed as usize, round + 1);
    }
}

#[test]
fn reviewing_missing_card_reports_card_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ReviewService::new(SqliteFlashcardRepository::new(&conn));

    let id = Uuid::new_v4();
    let err = service
        .record_review(id, ReviewPerformance::Easy, 0)
        .unwrap_err();
    assert!(matches!(err, ReviewServiceError::CardNotFound(missing) if missing == id));
}

fn card_due_at(next_review_ms: i64) -> Flashcard {
    let mut card = Flashcard::new("question", "answer", None, 0);
    card.next_review = next_review_ms;
    card
}
