use owdle_types::{Hero, Locale};
use tracing::debug;

use crate::normalize::{fold_diacritics, loose_key, normalize};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Both comparison forms of a player's query.
struct Query {
    exact: String,
    loose: String,
}

impl Query {
    fn new(text: &str) -> Self {
        Self {
            exact: normalize(text),
            loose: loose_key(text),
        }
    }

    fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    fn equals(&self, candidate: &str) -> bool {
        normalize(candidate) == self.exact
            || (!self.loose.is_empty() && loose_key(candidate) == self.loose)
    }

    fn is_prefix_of(&self, candidate: &str) -> bool {
        normalize(candidate).starts_with(&self.exact)
            || (!self.loose.is_empty() && loose_key(candidate).starts_with(&self.loose))
    }
}

/// Resolves free text typed by a player to roster entries.
///
/// Display and alternate names depend on the locale: in English the display
/// name is the canonical `name` and the French name is the alternate, in
/// French it is the other way round.
#[derive(Debug, Clone)]
pub struct HeroMatcher {
    locale: Locale,
    suggestion_limit: usize,
}

impl HeroMatcher {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Hero whose display name, alternate name or alias equals the query,
    /// exactly or in loose form. The first match in roster order wins.
    pub fn resolve_exact<'a, I>(&self, query: &str, heroes: I) -> Option<&'a Hero>
    where
        I: IntoIterator<Item = &'a Hero>,
    {
        let query = Query::new(query);
        if query.is_empty() {
            return None;
        }

        heroes.into_iter().find(|hero| {
            query.equals(hero.display_name(self.locale))
                || hero
                    .alt_name(self.locale)
                    .is_some_and(|alt| query.equals(alt))
                || hero.aliases.iter().any(|alias| query.equals(alias))
        })
    }

    /// Every hero the query could be heading towards, in roster order.
    /// An empty query matches nothing.
    pub fn find_candidates<'a, I>(&self, query: &str, heroes: I) -> Vec<&'a Hero>
    where
        I: IntoIterator<Item = &'a Hero>,
    {
        let query = Query::new(query);
        if query.is_empty() {
            return Vec::new();
        }

        heroes
            .into_iter()
            .filter(|hero| {
                query.is_prefix_of(hero.display_name(self.locale))
                    || hero
                        .aliases
                        .iter()
                        .any(|alias| query.is_prefix_of(alias) || query.equals(alias))
                    || hero
                        .alt_name(self.locale)
                        .is_some_and(|alt| query.equals(alt))
            })
            .collect()
    }

    /// Whether `hero` may be taken as what the player meant when they submit
    /// an incomplete name without picking a suggestion.
    pub fn is_prefix_acceptable(&self, hero: &Hero, query: &str) -> bool {
        let query = Query::new(query);
        if query.is_empty() {
            return false;
        }

        query.is_prefix_of(hero.display_name(self.locale))
            || hero.aliases.iter().any(|alias| query.is_prefix_of(alias))
    }

    /// Alphabetical by display name, ignoring case and accents. Equal names keep
    /// their incoming order.
    pub fn sort_by_display_name<'a>(&self, mut heroes: Vec<&'a Hero>) -> Vec<&'a Hero> {
        heroes.sort_by_cached_key(|hero| {
            fold_diacritics(hero.display_name(self.locale)).to_lowercase()
        });
        heroes
    }

    /// Sorted suggestions, cut to the suggestion limit.
    pub fn rank_suggestions<'a>(&self, candidates: Vec<&'a Hero>) -> Vec<&'a Hero> {
        let mut ranked = self.sort_by_display_name(candidates);
        ranked.truncate(self.suggestion_limit);
        ranked
    }

    /// Suggestion list shown while the player types.
    pub fn suggestions<'a, I>(&self, query: &str, heroes: I) -> Vec<&'a Hero>
    where
        I: IntoIterator<Item = &'a Hero>,
    {
        self.rank_suggestions(self.find_candidates(query, heroes))
    }

    /// Submit-time resolution.
    ///
    /// Exact matches are looked up in the whole roster, so resubmitting a hero
    /// is reported as a duplicate rather than as unknown. Otherwise the first
    /// sorted candidate among the heroes still `available` whose name or alias
    /// starts with the query is taken.
    pub fn resolve_submission<'a>(
        &self,
        query: &str,
        roster: &'a [Hero],
        available: &[&'a Hero],
    ) -> Option<&'a Hero> {
        if let Some(hero) = self.resolve_exact(query, roster) {
            return Some(hero);
        }

        let candidates = self.find_candidates(query, available.iter().copied());
        let picked = self
            .sort_by_display_name(candidates)
            .into_iter()
            .find(|hero| self.is_prefix_acceptable(hero, query));

        if let Some(hero) = picked {
            debug!(query, hero = %hero.name, "Auto-selected hero from prefix");
        }
        picked
    }
}

impl Default for HeroMatcher {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
