use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use owdle_core::DEFAULT_SUGGESTION_LIMIT;
use owdle_types::{GameMode, GameVariant, Locale};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub roster_path: Option<PathBuf>,
    pub storage_path: PathBuf,
    pub time_zone: String,
    pub variant: GameVariant,
    pub mode: GameMode,
    pub lang: Option<Locale>,
    pub suggestion_limit: usize,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Invalid values fall back to their default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            roster_path: lookup("OWDLE_ROSTER").map(PathBuf::from),
            storage_path: lookup("OWDLE_STORAGE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("owdle-state.json")),
            time_zone: lookup("OWDLE_TIME_ZONE").unwrap_or_else(|| "UTC".to_string()),
            variant: parse_or(&lookup, "OWDLE_VARIANT", GameVariant::Classic),
            mode: parse_or(&lookup, "OWDLE_MODE", GameMode::Daily),
            lang: lookup("OWDLE_LANG").and_then(|value| parse_value("OWDLE_LANG", &value)),
            suggestion_limit: parse_or(&lookup, "OWDLE_SUGGESTION_LIMIT", DEFAULT_SUGGESTION_LIMIT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    lookup(name)
        .and_then(|value| parse_value(name, &value))
        .unwrap_or(default)
}

fn parse_value<T>(name: &str, value: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring {}: {}", name, e);
            None
        }
    }
}
