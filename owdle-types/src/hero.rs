use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Locale;

/// Immutable roster entry. `name` is the stable key used for guess history and persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Hero {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_fr: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub affiliation: Affiliation,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subrole: Option<String>,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quotes: Vec<QuoteLine>,
}

impl Hero {
    /// Name shown to a player reading the given locale.
    pub fn display_name(&self, locale: Locale) -> &str {
        match (locale, &self.name_fr) {
            (Locale::Fr, Some(name_fr)) => name_fr,
            _ => &self.name,
        }
    }

    /// The name of the other locale, accepted as input alongside the display name.
    pub fn alt_name(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::Fr => Some(&self.name),
            Locale::En => self.name_fr.as_deref(),
        }
    }
}

/// A hero belongs to one affiliation or to several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Affiliation {
    One(String),
    Many(Vec<String>),
}

impl Affiliation {
    pub fn values(&self) -> Vec<&str> {
        match self {
            Affiliation::One(value) => vec![value.as_str()],
            Affiliation::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for Affiliation {
    fn default() -> Self {
        Affiliation::Many(Vec::new())
    }
}

impl From<&str> for Affiliation {
    fn from(value: &str) -> Self {
        Affiliation::One(value.to_string())
    }
}

impl From<Vec<&str>> for Affiliation {
    fn from(values: Vec<&str>) -> Self {
        Affiliation::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// One voice line, written in both locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteLine {
    pub en: String,
    pub fr: String,
}

impl QuoteLine {
    pub fn text(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Fr => &self.fr,
        }
    }
}
