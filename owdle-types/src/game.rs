use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ParseValueError;

/// Columns of the classic grid, compared one by one against the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AttributeKey {
    Name,
    Species,
    Role,
    Continent,
    Affiliation,
    Gender,
    Year,
}

impl AttributeKey {
    /// Classic grid column order.
    pub const ALL: [AttributeKey; 7] = [
        AttributeKey::Name,
        AttributeKey::Species,
        AttributeKey::Role,
        AttributeKey::Continent,
        AttributeKey::Affiliation,
        AttributeKey::Gender,
        AttributeKey::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::Name => "name",
            AttributeKey::Species => "species",
            AttributeKey::Role => "role",
            AttributeKey::Continent => "continent",
            AttributeKey::Affiliation => "affiliation",
            AttributeKey::Gender => "gender",
            AttributeKey::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Verdict {
    Correct, // Every value matches
    Partial, // Shared affiliation, or same role with another subrole
    Wrong,
}

/// Direction of the answer's release year relative to a wrong guess. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum YearHint {
    GuessTooEarly,
    GuessTooLate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AttributeResult {
    pub key: AttributeKey,
    pub verdict: Verdict,
    pub year_hint: Option<YearHint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GameMode {
    #[default]
    #[serde(alias = "unlimited")]
    Random,
    Daily,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Random => "random",
            GameMode::Daily => "daily",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "random" | "unlimited" => Ok(GameMode::Random),
            "daily" => Ok(GameMode::Daily),
            other => Err(ParseValueError::new("mode", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GameVariant {
    #[default]
    Classic,
    Silhouette,
    Quote,
}

impl GameVariant {
    /// Name used in storage keys, so daily progress of each variant stays apart.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameVariant::Classic => "classic",
            GameVariant::Silhouette => "silhouette",
            GameVariant::Quote => "quote",
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameVariant {
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "classic" => Ok(GameVariant::Classic),
            "silhouette" => Ok(GameVariant::Silhouette),
            "quote" => Ok(GameVariant::Quote),
            other => Err(ParseValueError::new("variant", other)),
        }
    }
}

/// Persisted progress of one daily round, keyed by variant and calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyRecord {
    pub guesses: Vec<String>, // Hero names in submission order
    #[serde(default)]
    pub solved: bool,
}
