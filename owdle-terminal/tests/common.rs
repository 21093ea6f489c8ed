#![allow(dead_code)]

use chrono::{DateTime, Utc};
use owdle_core::{FixedClock, GameSession, SessionOptions};
use owdle_persistence::{DailyStateRepository, MemoryStorage};
use owdle_terminal::load_roster;
use owdle_types::{GameVariant, Locale};

pub type TestSession = GameSession<DailyStateRepository<MemoryStorage>, FixedClock>;

pub fn noon() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-10-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Session over the bundled roster at noon UTC on 2026-10-15.
pub fn create_bundled_session(variant: GameVariant, locale: Locale) -> TestSession {
    let options = SessionOptions {
        locale,
        ..Default::default()
    };
    GameSession::new(
        load_roster(None).unwrap(),
        variant,
        DailyStateRepository::new(MemoryStorage::new()),
        FixedClock::new(noon()),
        options,
    )
    .with_rng_seed(3)
}
