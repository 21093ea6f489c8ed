#![allow(dead_code)]

use chrono::{DateTime, Utc};
use owdle_core::{DailyStateStore, FixedClock, GameSession, Roster, SessionOptions};
use owdle_types::{GameVariant, Hero};

pub fn noon() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-10-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn create_test_hero(name: &str, role: &str) -> Hero {
    Hero {
        name: name.to_string(),
        species: "Human".to_string(),
        gender: "Female".to_string(),
        continent: "Europe".to_string(),
        affiliation: "Overwatch".into(),
        role: role.to_string(),
        year: 2016,
        ..Default::default()
    }
}

/// Seven heroes: on 2026-10-15 the classic daily pick is index 3 (Mercy).
pub fn create_test_roster() -> Roster {
    Roster::new(vec![
        create_test_hero("Tracer", "Damage"),
        create_test_hero("Soldier: 76", "Damage"),
        create_test_hero("Ana", "Support"),
        create_test_hero("Mercy", "Support"),
        create_test_hero("Reinhardt", "Tank"),
        create_test_hero("Winston", "Tank"),
        create_test_hero("Zenyatta", "Support"),
    ])
    .unwrap()
}

pub fn create_session<S: DailyStateStore>(store: S) -> GameSession<S, FixedClock> {
    GameSession::new(
        create_test_roster(),
        GameVariant::Classic,
        store,
        FixedClock::new(noon()),
        SessionOptions::default(),
    )
    .with_rng_seed(7)
}
