#![allow(dead_code)]

use chrono::{DateTime, Utc};
use owdle_core::{FixedClock, GameSession, MemoryDailyStore, RoundEvent, RoundEventHandler, Roster, SessionOptions};
use owdle_types::{Affiliation, GameVariant, Hero, QuoteLine};
use std::sync::{Arc, Mutex};

/// Noon UTC on the reference day used across the tests.
pub const REFERENCE_NOON: &str = "2026-10-15T12:00:00Z";
pub const REFERENCE_DATE: &str = "2026-10-15";

pub fn instant(text: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(text).unwrap().with_timezone(&Utc)
}

pub fn reference_clock() -> FixedClock {
    FixedClock::new(instant(REFERENCE_NOON))
}

/// Creates a hero with the attributes the comparator looks at
pub fn create_test_hero(
    name: &str,
    species: &str,
    role: &str,
    subrole: &str,
    affiliation: Affiliation,
    year: i32,
) -> Hero {
    Hero {
        name: name.to_string(),
        species: species.to_string(),
        gender: "Female".to_string(),
        continent: "Europe".to_string(),
        affiliation,
        role: role.to_string(),
        subrole: Some(subrole.to_string()),
        year,
        ..Default::default()
    }
}

/// Seven heroes, in a fixed order the daily picks depend on.
///
/// On 2026-10-15 the classic pick (seed 1) is index 3 (Mercy), the quote pick
/// (seed 9937) is index 0 (Tracer) and the silhouette pick is index 1.
pub fn create_test_heroes() -> Vec<Hero> {
    let mut tracer = create_test_hero("Tracer", "Human", "Damage", "Flanker", "Overwatch".into(), 2016);
    tracer.aliases = vec!["Lena".to_string()];
    tracer.quotes = vec![
        QuoteLine {
            en: "Cheers, love! The cavalry's here!".to_string(),
            fr: "Salut, chéri ! La cavalerie est là !".to_string(),
        },
        QuoteLine {
            en: "Ever get that feeling of déjà vu?".to_string(),
            fr: "Vous avez déjà eu une impression de déjà-vu ?".to_string(),
        },
    ];

    let mut soldier = create_test_hero("Soldier: 76", "Human", "Damage", "Specialist", vec!["Overwatch"].into(), 2016);
    soldier.name_fr = Some("Soldat : 76".to_string());
    soldier.aliases = vec!["Jack Morrison".to_string()];

    let lucio = create_test_hero("Lúcio", "Human", "Support", "Tactician", "Freedom Fighters".into(), 2016);

    let mut mercy = create_test_hero("Mercy", "Human", "Support", "Medic", "Overwatch".into(), 2016);
    mercy.name_fr = Some("Ange".to_string());

    let reinhardt = create_test_hero("Reinhardt", "Human", "Tank", "Initiator", "Overwatch".into(), 2016);

    let mut widowmaker = create_test_hero("Widowmaker", "Human", "Damage", "Sharpshooter", "Talon".into(), 2016);
    widowmaker.name_fr = Some("Fatale".to_string());
    widowmaker.aliases = vec!["Widow".to_string()];

    let winston = create_test_hero("Winston", "Gorilla", "Tank", "Initiator", "Overwatch".into(), 2016);

    vec![tracer, soldier, lucio, mercy, reinhardt, widowmaker, winston]
}

pub fn create_test_roster() -> Roster {
    Roster::new(create_test_heroes()).unwrap()
}

/// Session at the reference instant backed by the given store
pub fn create_session<'a>(
    variant: GameVariant,
    store: &'a mut MemoryDailyStore,
) -> GameSession<&'a mut MemoryDailyStore, FixedClock> {
    GameSession::new(
        create_test_roster(),
        variant,
        store,
        reference_clock(),
        SessionOptions::default(),
    )
    .with_rng_seed(42)
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<RoundEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<RoundEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count_matching(&self, check_fn: impl Fn(&RoundEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|event| check_fn(event)).count()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&RoundEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl RoundEventHandler for EventCollector {
    fn handle_event(&mut self, event: RoundEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn names(heroes: &[&Hero]) -> Vec<String> {
    heroes.iter().map(|hero| hero.name.clone()).collect()
}
