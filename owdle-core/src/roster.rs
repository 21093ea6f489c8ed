use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use owdle_types::Hero;
use tracing::info;

/// The full list of guessable heroes, in data-file order.
#[derive(Debug, Clone)]
pub struct Roster {
    heroes: Vec<Hero>,
}

impl Roster {
    /// Build a roster, rejecting empty lists, blank names and duplicate names.
    pub fn new(heroes: Vec<Hero>) -> Result<Self> {
        if heroes.is_empty() {
            return Err(anyhow!("Roster contains no heroes"));
        }

        let mut seen = HashSet::new();
        for hero in &heroes {
            if hero.name.trim().is_empty() {
                return Err(anyhow!("Roster contains a hero with a blank name"));
            }
            if !seen.insert(hero.name.as_str()) {
                return Err(anyhow!("Duplicate hero name in roster: {}", hero.name));
            }
        }

        Ok(Self { heroes })
    }

    /// Parse the hero data file (a JSON array of heroes).
    pub fn from_json(json: &str) -> Result<Self> {
        let heroes: Vec<Hero> = serde_json::from_str(json).context("Invalid hero data")?;
        Self::new(heroes)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read hero data from {}", path.display()))?;
        let roster = Self::from_json(&json)?;

        info!("Loaded {} heroes from {}", roster.len(), path.display());
        Ok(roster)
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Lookup by canonical name, the persistence key.
    pub fn find_by_name(&self, name: &str) -> Option<&Hero> {
        self.heroes.iter().find(|hero| hero.name == name)
    }

    /// Heroes not yet guessed, in roster order.
    pub fn available<'a, I>(&self, guessed: I) -> Vec<&Hero>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let guessed: HashSet<&str> = guessed.into_iter().collect();
        self.heroes
            .iter()
            .filter(|hero| !guessed.contains(hero.name.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = r#"[
        {"name": "Tracer", "aliases": ["Lena"], "species": "Human", "role": "Damage", "year": 2016},
        {"name": "Mercy", "nameFr": "Ange", "species": "Human", "role": "Support", "year": 2016},
        {"name": "Orisa", "species": "Omnic", "role": "Tank", "year": 2017}
    ]"#;

    #[test]
    fn test_roster_from_json() {
        let roster = Roster::from_json(DATA).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.heroes()[0].name, "Tracer");
        assert_eq!(roster.find_by_name("Mercy").unwrap().name_fr.as_deref(), Some("Ange"));
        assert!(roster.find_by_name("mercy").is_none());
    }

    #[test]
    fn test_available_excludes_guessed() {
        let roster = Roster::from_json(DATA).unwrap();
        let available: Vec<&str> = roster
            .available(["Mercy"])
            .iter()
            .map(|hero| hero.name.as_str())
            .collect();
        assert_eq!(available, vec!["Tracer", "Orisa"]);
        assert_eq!(roster.available(std::iter::empty::<&str>()).len(), 3);
    }

    #[test]
    fn test_rejects_invalid_rosters() {
        let empty = Roster::from_json("[]");
        assert!(empty.unwrap_err().to_string().contains("no heroes"));

        let duplicate = Roster::from_json(
            r#"[{"name": "Tracer", "year": 2016}, {"name": "Tracer", "year": 2016}]"#,
        );
        assert!(duplicate.unwrap_err().to_string().contains("Duplicate hero name"));

        let blank = Roster::from_json(r#"[{"name": "  ", "year": 2016}]"#);
        assert!(blank.is_err());

        assert!(Roster::from_json("not json").is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = Roster::from_file("/definitely/not/here/heroes.json");
        assert!(result.unwrap_err().to_string().contains("Failed to read hero data"));
    }
}
