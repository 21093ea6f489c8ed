pub mod commands;
pub mod config;
pub mod render;
pub mod text;

use std::path::Path;

use anyhow::Result;
use owdle_core::Roster;
use tracing::info;

/// Sample roster compiled into the binary.
pub const BUNDLED_HEROES: &str = include_str!("../data/heroes.json");

/// The roster file at `path`, or the bundled sample without one.
pub fn load_roster(path: Option<&Path>) -> Result<Roster> {
    match path {
        Some(path) => Roster::from_file(path),
        None => {
            info!("Using bundled hero data");
            Roster::from_json(BUNDLED_HEROES)
        }
    }
}
