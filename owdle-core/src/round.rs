use owdle_types::{
    AttributeResult, DailyRecord, GameMode, GameVariant, GuessError, Hero, Locale, QuoteLine,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::comparator::AttributeComparator;
use crate::daily::{
    Clock, SeedOffset, SystemClock, daily_index, date_key_at, format_countdown,
    time_until_next_midnight,
};
use crate::matcher::{DEFAULT_SUGGESTION_LIMIT, HeroMatcher};
use crate::round_events::{RoundEvent, RoundEventBus, RoundEventHandler};
use crate::roster::Roster;
use crate::store::{DEFAULT_STORAGE_PREFIX, DailyStateStore, daily_storage_key};
use crate::variant::{GuessOrder, QUOTE_LINE_SEED, SilhouetteFrame, VariantRules, missing_quote};

/// One round: the hidden answer and the guesses made against it.
#[derive(Debug, Clone)]
pub struct Round {
    variant: GameVariant,
    mode: GameMode,
    time_zone: String,
    guess_order: GuessOrder,
    answer: Hero,
    guesses: Vec<Hero>, // Submission order
    solved: bool,
    date_key: Option<String>, // Daily rounds only, fixed at round start
    quote: Option<QuoteLine>,
    silhouette: Option<SilhouetteFrame>,
}

impl Round {
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    pub fn answer(&self) -> &Hero {
        &self.answer
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn date_key(&self) -> Option<&str> {
        self.date_key.as_deref()
    }

    /// Guesses in submission order.
    pub fn guesses(&self) -> &[Hero] {
        &self.guesses
    }

    /// Guesses in the order the variant lists them.
    pub fn display_guesses(&self) -> Vec<&Hero> {
        match self.guess_order {
            GuessOrder::Chronological => self.guesses.iter().collect(),
            GuessOrder::NewestFirst => self.guesses.iter().rev().collect(),
        }
    }

    pub fn is_guessed(&self, name: &str) -> bool {
        self.guesses.iter().any(|guess| guess.name == name)
    }

    pub fn guessed_names(&self) -> impl Iterator<Item = &str> {
        self.guesses.iter().map(|guess| guess.name.as_str())
    }

    /// Voice line to guess from (quote variant).
    pub fn quote(&self) -> Option<&QuoteLine> {
        self.quote.as_ref()
    }

    /// Portrait framing (silhouette variant).
    pub fn silhouette(&self) -> Option<&SilhouetteFrame> {
        self.silhouette.as_ref()
    }

    pub fn silhouette_blur(&self) -> f64 {
        SilhouetteFrame::blur(self.guesses.len(), self.solved)
    }

    pub fn to_record(&self) -> DailyRecord {
        DailyRecord {
            guesses: self.guessed_names().map(str::to_string).collect(),
            solved: self.solved,
        }
    }
}

/// Result of an accepted guess.
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub hero: Hero,
    pub results: Vec<AttributeResult>,
    pub solved: bool,
    pub just_won: bool, // This guess solved the round
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub locale: Locale,
    pub storage_prefix: String,
    pub suggestion_limit: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

/// Everything one game variant needs, passed around explicitly: roster,
/// rules, storage, clock, randomness and the current round.
pub struct GameSession<S: DailyStateStore, C: Clock = SystemClock> {
    roster: Roster,
    rules: VariantRules,
    options: SessionOptions,
    matcher: HeroMatcher,
    store: S,
    clock: C,
    rng: StdRng,
    event_bus: RoundEventBus,
    round: Option<Round>,
}

impl<S: DailyStateStore, C: Clock> GameSession<S, C> {
    pub fn new(roster: Roster, variant: GameVariant, store: S, clock: C, options: SessionOptions) -> Self {
        let matcher = HeroMatcher::new(options.locale).with_suggestion_limit(options.suggestion_limit);
        Self {
            roster,
            rules: VariantRules::for_variant(variant),
            options,
            matcher,
            store,
            clock,
            rng: StdRng::from_os_rng(),
            event_bus: RoundEventBus::new(),
            round: None,
        }
    }

    /// Reproducible random picks, for tests.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn add_handler(&mut self, handler: Box<dyn RoundEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn variant(&self) -> GameVariant {
        self.rules.variant
    }

    pub fn locale(&self) -> Locale {
        self.options.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.options.locale = locale;
        self.matcher = HeroMatcher::new(locale).with_suggestion_limit(self.options.suggestion_limit);
    }

    pub fn matcher(&self) -> &HeroMatcher {
        &self.matcher
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Start a round with the variant's own seed offset.
    pub fn start_round(&mut self, mode: GameMode, time_zone: &str) -> &Round {
        let seed = self.rules.seed.clone();
        self.start_round_with_seed(mode, time_zone, &seed)
    }

    /// Pick the answer, clear the guesses and, for a daily round, resume
    /// today's saved progress if there is any.
    pub fn start_round_with_seed(&mut self, mode: GameMode, time_zone: &str, seed: &SeedOffset) -> &Round {
        let variant = self.rules.variant;
        let heroes = self.roster.heroes();

        let date_key = match mode {
            GameMode::Daily => Some(date_key_at(time_zone, self.clock.now())),
            GameMode::Random => None,
        };
        let answer = match &date_key {
            Some(key) => heroes[daily_index(heroes.len(), key, seed)].clone(),
            None => heroes[self.rng.random_range(0..heroes.len())].clone(),
        };

        let quote = match variant {
            GameVariant::Quote => Some(self.pick_quote(&answer, date_key.as_deref())),
            _ => None,
        };
        let silhouette = match variant {
            GameVariant::Silhouette => Some(SilhouetteFrame::random(&mut self.rng)),
            _ => None,
        };

        let mut round = Round {
            variant,
            mode,
            time_zone: time_zone.to_string(),
            guess_order: self.rules.guess_order,
            answer,
            guesses: Vec::new(),
            solved: false,
            date_key,
            quote,
            silhouette,
        };
        debug!(%variant, %mode, time_zone, answer = %round.answer.name, "Round started");
        self.event_bus.publish(RoundEvent::RoundStarted { variant, mode });

        if let Some(key) = round.date_key.clone() {
            let storage_key = daily_storage_key(&self.options.storage_prefix, variant, &key);
            if let Some(record) = self.store.load(&storage_key) {
                for name in &record.guesses {
                    // Names dropped from the roster since the save are skipped
                    if let Some(hero) = self.roster.find_by_name(name) {
                        if !round.is_guessed(&hero.name) {
                            round.guesses.push(hero.clone());
                        }
                    }
                }
                round.solved = record.solved;

                debug!(storage_key, guesses = round.guesses.len(), solved = round.solved, "Resumed daily round");
                self.event_bus.publish(RoundEvent::RoundResumed {
                    variant,
                    date_key: key,
                    guess_count: round.guesses.len(),
                    solved: round.solved,
                });
            }
        }

        self.round.insert(round)
    }

    fn pick_quote(&mut self, answer: &Hero, date_key: Option<&str>) -> QuoteLine {
        if answer.quotes.is_empty() {
            return missing_quote(answer);
        }

        let index = match date_key {
            Some(key) => daily_index(answer.quotes.len(), key, &QUOTE_LINE_SEED),
            None => self.rng.random_range(0..answer.quotes.len()),
        };
        answer.quotes[index].clone()
    }

    /// Resolve `text` to a hero and record it as the next guess.
    ///
    /// Failures are soft: the round is unchanged and the error carries the
    /// message key to show.
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, GuessError> {
        let variant = self.rules.variant;
        let resolved = match self.round.as_mut() {
            Some(round) => {
                resolve_guess(&self.matcher, &self.roster, round, text).map(|hero| (round, hero))
            }
            None => Err(GuessError::NoActiveRound),
        };

        let (round, hero) = match resolved {
            Ok(resolved) => resolved,
            Err(error) => {
                debug!(text, %error, "Guess rejected");
                self.event_bus.publish(RoundEvent::GuessRejected {
                    variant,
                    error: error.clone(),
                });
                return Err(error);
            }
        };

        let just_won = !round.solved && hero.name == round.answer.name;
        round.guesses.push(hero.clone());
        round.solved = hero.name == round.answer.name;
        let results = AttributeComparator::evaluate_guess(&hero, &round.answer);

        if let (GameMode::Daily, Some(key)) = (round.mode, round.date_key.as_deref()) {
            let storage_key = daily_storage_key(&self.options.storage_prefix, variant, key);
            self.store.save(&storage_key, &round.to_record());
        }

        let attempts = round.guesses.len();
        let answer = round.answer.name.clone();
        let solved = round.solved;

        debug!(hero = %hero.name, attempts, solved, "Guess accepted");
        self.event_bus.publish(RoundEvent::GuessAccepted {
            variant,
            hero_name: hero.name.clone(),
            attempt: attempts,
        });
        if just_won {
            self.event_bus.publish(RoundEvent::RoundSolved {
                variant,
                answer,
                attempts,
            });
        }

        Ok(GuessOutcome {
            hero,
            results,
            solved,
            just_won,
        })
    }

    /// Suggestions for a partial query, excluding heroes already guessed.
    pub fn suggestions(&self, query: &str) -> Vec<&Hero> {
        let available = match &self.round {
            Some(round) => self.roster.available(round.guessed_names()),
            None => self.roster.heroes().iter().collect(),
        };
        self.matcher.suggestions(query, available)
    }

    /// `HH:MM:SS` until the next daily hero, for daily rounds.
    pub fn countdown(&self) -> Option<String> {
        let round = self.round.as_ref()?;
        if round.mode != GameMode::Daily {
            return None;
        }
        let remaining = time_until_next_midnight(&round.time_zone, self.clock.now());
        Some(format_countdown(remaining))
    }
}

fn resolve_guess(
    matcher: &HeroMatcher,
    roster: &Roster,
    round: &Round,
    text: &str,
) -> Result<Hero, GuessError> {
    let query = text.trim();
    if query.is_empty() {
        return Err(GuessError::EmptyInput);
    }
    if round.solved {
        return Err(GuessError::RoundSolved);
    }

    let available = roster.available(round.guessed_names());
    let hero = matcher
        .resolve_submission(query, roster.heroes(), &available)
        .ok_or_else(|| GuessError::UnknownHero {
            query: query.to_string(),
        })?;

    if round.is_guessed(&hero.name) {
        return Err(GuessError::AlreadyGuessed {
            name: hero.name.clone(),
        });
    }

    Ok(hero.clone())
}
