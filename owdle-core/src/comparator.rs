use std::collections::HashSet;

use owdle_types::{AttributeKey, AttributeResult, Hero, Verdict, YearHint};

use crate::normalize::normalize;

pub struct AttributeComparator;

impl AttributeComparator {
    /// Verdict for every column of the classic grid, in display order.
    pub fn evaluate_guess(guess: &Hero, answer: &Hero) -> Vec<AttributeResult> {
        AttributeKey::ALL
            .iter()
            .map(|&key| {
                let verdict = Self::compare_attribute(guess, answer, key);
                let year_hint = match (key, verdict) {
                    (AttributeKey::Year, Verdict::Wrong) => Self::year_hint(guess, answer),
                    _ => None,
                };
                AttributeResult {
                    key,
                    verdict,
                    year_hint,
                }
            })
            .collect()
    }

    /// Compare one attribute of a guess against the answer.
    ///
    /// Values are compared as sets of normalized tokens. Equal sets are correct;
    /// for affiliations a shared token is enough for partial credit. Roles are
    /// compared together with their subrole.
    pub fn compare_attribute(guess: &Hero, answer: &Hero, key: AttributeKey) -> Verdict {
        if key == AttributeKey::Role {
            return Self::compare_roles(guess, answer);
        }

        let guess_tokens = attribute_tokens(guess, key);
        let answer_tokens = attribute_tokens(answer, key);

        if guess_tokens == answer_tokens {
            return Verdict::Correct;
        }

        if key == AttributeKey::Affiliation && !guess_tokens.is_disjoint(&answer_tokens) {
            return Verdict::Partial;
        }

        Verdict::Wrong
    }

    /// Which way the answer's year lies from a wrong guess. `None` unless the
    /// year verdict is wrong.
    pub fn year_hint(guess: &Hero, answer: &Hero) -> Option<YearHint> {
        if Self::compare_attribute(guess, answer, AttributeKey::Year) != Verdict::Wrong {
            return None;
        }

        match guess.year.cmp(&answer.year) {
            std::cmp::Ordering::Less => Some(YearHint::GuessTooEarly),
            std::cmp::Ordering::Greater => Some(YearHint::GuessTooLate),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn compare_roles(guess: &Hero, answer: &Hero) -> Verdict {
        let guess_role = normalize(&guess.role);
        let answer_role = normalize(&answer.role);

        // A blank role never matches, not even another blank one
        if guess_role.is_empty() || guess_role != answer_role {
            return Verdict::Wrong;
        }

        let guess_subrole = normalize(guess.subrole.as_deref().unwrap_or_default());
        let answer_subrole = normalize(answer.subrole.as_deref().unwrap_or_default());

        if guess_subrole == answer_subrole {
            Verdict::Correct
        } else {
            Verdict::Partial
        }
    }
}

/// Normalized, non-blank values of one attribute.
pub fn attribute_tokens(hero: &Hero, key: AttributeKey) -> HashSet<String> {
    let raw: Vec<String> = match key {
        AttributeKey::Name => vec![hero.name.clone()],
        AttributeKey::Species => vec![hero.species.clone()],
        AttributeKey::Role => vec![hero.role.clone()],
        AttributeKey::Continent => vec![hero.continent.clone()],
        AttributeKey::Affiliation => hero
            .affiliation
            .values()
            .into_iter()
            .map(str::to_string)
            .collect(),
        AttributeKey::Gender => vec![hero.gender.clone()],
        AttributeKey::Year => vec![hero.year.to_string()],
    };

    raw.iter()
        .map(|value| normalize(value))
        .filter(|value| !value.is_empty())
        .collect()
}
