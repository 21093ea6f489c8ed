use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Soft, user-facing rejection of a submitted guess. The round is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum GuessError {
    #[error("Empty guess")]
    EmptyInput,
    #[error("Unknown hero: {query}")]
    UnknownHero { query: String },
    #[error("Hero already guessed: {name}")]
    AlreadyGuessed { name: String },
    #[error("Round already solved")]
    RoundSolved,
    #[error("No round in progress")]
    NoActiveRound,
}

impl GuessError {
    /// Key of the localized message shown to the player, if any.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            GuessError::EmptyInput => None,
            GuessError::UnknownHero { .. } => Some("unknownHero"),
            GuessError::AlreadyGuessed { .. } => Some("alreadyGuessed"),
            GuessError::RoundSolved => Some("roundSolved"),
            GuessError::NoActiveRound => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {kind}: {value:?}")]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseValueError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
