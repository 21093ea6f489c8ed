mod common;

use common::*;
use owdle_core::{DailyStateStore, daily_storage_key};
use owdle_persistence::{DailyStateRepository, FileStorage, KeyValueStore, MemoryStorage};
use owdle_types::{GameMode, GameVariant};

#[test]
fn test_daily_round_resumes_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("owdle.json");

    {
        let mut session = create_session(DailyStateRepository::new(FileStorage::new(&path)));
        let round = session.start_round(GameMode::Daily, "UTC");
        assert_eq!(round.answer().name, "Mercy");

        session.submit_guess("Tracer").unwrap();
        session.submit_guess("ana").unwrap();
    }

    let mut session = create_session(DailyStateRepository::new(FileStorage::new(&path)));
    let round = session.start_round(GameMode::Daily, "UTC");
    let names: Vec<&str> = round.guessed_names().collect();
    assert_eq!(names, vec!["Tracer", "Ana"]);
    assert!(!round.solved());

    let outcome = session.submit_guess("Mercy").unwrap();
    assert!(outcome.just_won);

    let key = daily_storage_key("owdle-daily", GameVariant::Classic, "2026-10-15");
    let raw = FileStorage::new(&path).get_item(&key).unwrap().unwrap();
    assert_eq!(raw, r#"{"guesses":["Tracer","Ana","Mercy"],"solved":true}"#);
}

#[test]
fn test_corrupt_file_starts_fresh_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("owdle.json");
    std::fs::write(&path, "]]").unwrap();

    let mut session = create_session(DailyStateRepository::new(FileStorage::new(&path)));
    assert!(session.start_round(GameMode::Daily, "UTC").guesses().is_empty());

    // The game keeps going even though nothing can be saved
    let outcome = session.submit_guess("Winston").unwrap();
    assert!(!outcome.solved);
    assert_eq!(session.round().unwrap().guesses().len(), 1);
}

#[test]
fn test_unavailable_storage_still_plays() {
    let mut session = create_session(DailyStateRepository::new(MemoryStorage::unavailable()));
    assert_eq!(session.start_round(GameMode::Daily, "UTC").answer().name, "Mercy");

    session.submit_guess("Tracer").unwrap();
    assert!(session.submit_guess("Mercy").unwrap().solved);
    assert!(session.store().load("owdle-daily-classic-2026-10-15").is_none());
}

#[test]
fn test_fixture_daily_pick() {
    let roster = create_test_roster();
    assert_eq!(roster.len(), 7);
    assert_eq!(roster.heroes()[3].name, "Mercy");
}

#[test]
fn test_stale_record_drops_unknown_heroes() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(
            "owdle-daily-classic-2026-10-15",
            r#"{"guesses":["Ghost","Tracer","Tracer"],"solved":false}"#,
        )
        .unwrap();

    let mut session = create_session(DailyStateRepository::new(storage));
    let round = session.start_round(GameMode::Daily, "UTC");
    let names: Vec<&str> = round.guessed_names().collect();
    assert_eq!(names, vec!["Tracer"]);
}
