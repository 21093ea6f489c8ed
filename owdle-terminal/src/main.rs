use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;

use owdle_core::{DailyStateStore, GameSession, Roster, SessionOptions, SystemClock};
use owdle_persistence::{DailyStateRepository, FileStorage, PreferencesRepository};
use owdle_terminal::{
    commands::{Command, HELP_TEXT},
    config::Config,
    load_roster, render, text,
};
use owdle_types::{GameVariant, Locale};

type Session = GameSession<DailyStateRepository<FileStorage>, SystemClock>;

fn new_session(roster: Roster, variant: GameVariant, config: &Config, locale: Locale) -> Session {
    let options = SessionOptions {
        locale,
        suggestion_limit: config.suggestion_limit,
        ..Default::default()
    };
    let store = DailyStateRepository::new(FileStorage::new(&config.storage_path));
    GameSession::new(roster, variant, store, SystemClock, options)
}

fn print_round<S: DailyStateStore>(session: &GameSession<S>) {
    let Some(round) = session.round() else {
        return;
    };
    println!("{}", render::render_round(round, session.locale()));
    if let Some(time) = session.countdown() {
        println!("{}", text::countdown(&time, session.locale()));
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    info!("Starting Owdle...");

    let config = Config::new();
    let roster = load_roster(config.roster_path.as_deref())?;
    info!("Loaded {} heroes", roster.len());

    let mut preferences = PreferencesRepository::new(FileStorage::new(&config.storage_path));
    let url_lang = config.lang.map(|lang| lang.as_str());
    let mut locale = preferences.initial_locale(url_lang);
    info!(
        "Storage at {}, time zone {}, theme {}",
        config.storage_path.display(),
        config.time_zone,
        preferences.initial_theme()
    );

    let mut mode = config.mode;
    let mut session = new_session(roster.clone(), config.variant, &config, locale);
    session.start_round(mode, &config.time_zone);
    print_round(&session);
    prompt()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(command) = Command::parse(&line) else {
            prompt()?;
            continue;
        };

        match command {
            Command::Guess(guess) => match session.submit_guess(&guess) {
                Ok(outcome) => {
                    println!("{}", render::guess_row(&outcome.hero, &outcome.results, locale));
                    if outcome.just_won {
                        print_round(&session);
                    }
                }
                Err(e) => {
                    if let Some(message) = text::guess_error(&e, locale) {
                        println!("{}", message);
                    }
                }
            },
            Command::Suggest(query) => {
                let names: Vec<&str> = session
                    .suggestions(&query)
                    .into_iter()
                    .map(|hero| hero.display_name(locale))
                    .collect();
                println!("{}", names.join(", "));
            }
            Command::NewRound => {
                session.start_round(mode, &config.time_zone);
                print_round(&session);
            }
            Command::Mode(next) => {
                mode = next;
                session.start_round(mode, &config.time_zone);
                print_round(&session);
            }
            Command::Variant(variant) => {
                session = new_session(roster.clone(), variant, &config, locale);
                session.start_round(mode, &config.time_zone);
                print_round(&session);
            }
            Command::Lang(next) => {
                if preferences.set_locale(next, url_lang) {
                    info!("Locale set to {}", next);
                }
                locale = next;
                session.set_locale(next);
                print_round(&session);
            }
            Command::ToggleTheme => {
                let theme = preferences.toggle_theme();
                println!("Theme: {}", theme);
            }
            Command::Help => println!("{}", HELP_TEXT),
            Command::Quit => break,
        }

        prompt()?;
    }

    info!("Goodbye.");
    Ok(())
}
