use owdle_types::{GameMode, GameVariant, Locale};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Suggest(String),
    NewRound,
    Mode(GameMode),
    Variant(GameVariant),
    Lang(Locale),
    ToggleTheme,
    Help,
    Quit,
}

impl Command {
    /// `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if let Some(query) = line.strip_prefix('?') {
            return Some(Command::Suggest(query.trim().to_string()));
        }

        let Some(rest) = line.strip_prefix(':') else {
            return Some(Command::Guess(line.to_string()));
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let argument = parts.next().map(str::to_lowercase);

        let command = match (name.as_str(), argument.as_deref()) {
            ("new", _) => Command::NewRound,
            ("mode", Some(value)) => value.parse().map(Command::Mode).unwrap_or(Command::Help),
            ("variant", Some(value)) => value.parse().map(Command::Variant).unwrap_or(Command::Help),
            ("lang", Some(value)) => value.parse().map(Command::Lang).unwrap_or(Command::Help),
            ("theme", _) => Command::ToggleTheme,
            ("quit" | "q" | "exit", _) => Command::Quit,
            _ => Command::Help,
        };
        Some(command)
    }
}

pub const HELP_TEXT: &str = "\
Type a hero name to guess.
  ?text                 list matching heroes
  :new                  start a new round
  :mode daily|random    switch mode and start a new round
  :variant classic|silhouette|quote
  :lang en|fr           switch language
  :theme                toggle light/dark theme
  :quit                 leave";
