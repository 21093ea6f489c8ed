use owdle_core::{AttributeComparator, Round};
use owdle_types::{AttributeKey, AttributeResult, GameVariant, Hero, Locale, Verdict, YearHint};

use crate::text;

pub fn verdict_marker(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "✔",
        Verdict::Partial => "~",
        Verdict::Wrong => "✘",
    }
}

/// Arrow pointing from the guessed year towards the answer's.
pub fn year_marker(hint: YearHint) -> &'static str {
    match hint {
        YearHint::GuessTooEarly => "↑",
        YearHint::GuessTooLate => "↓",
    }
}

pub fn attribute_value(hero: &Hero, key: AttributeKey, locale: Locale) -> String {
    let translate = |value: &str| text::translate_value(key, value, locale).to_string();
    match key {
        AttributeKey::Name => hero.display_name(locale).to_string(),
        AttributeKey::Species => translate(&hero.species),
        AttributeKey::Continent => translate(&hero.continent),
        AttributeKey::Gender => translate(&hero.gender),
        AttributeKey::Affiliation => hero
            .affiliation
            .values()
            .into_iter()
            .map(translate)
            .collect::<Vec<_>>()
            .join(", "),
        AttributeKey::Role => match hero.subrole.as_deref() {
            Some(subrole) => format!("{} / {}", translate(&hero.role), translate(subrole)),
            None => translate(&hero.role),
        },
        AttributeKey::Year => hero.year.to_string(),
    }
}

pub fn guess_row(hero: &Hero, results: &[AttributeResult], locale: Locale) -> String {
    results
        .iter()
        .map(|result| {
            let mut cell = format!(
                "{}: {} {}",
                text::attribute_label(result.key, locale),
                attribute_value(hero, result.key, locale),
                verdict_marker(result.verdict)
            );
            if let Some(hint) = result.year_hint {
                cell.push_str(year_marker(hint));
            }
            cell
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Whole round as the player sees it, in the current locale.
pub fn render_round(round: &Round, locale: Locale) -> String {
    let mut lines = vec![format!(
        "OWDLE {} ({}) - {}",
        round.variant(),
        round.mode(),
        text::title(locale)
    )];

    match round.variant() {
        GameVariant::Quote => {
            if let Some(quote) = round.quote() {
                lines.push(format!("\"{}\"", quote.text(locale)));
            }
        }
        GameVariant::Silhouette => {
            if let Some(frame) = round.silhouette() {
                lines.push(format!(
                    "Silhouette: rotation {}°, focus {:.0}% {:.0}%, blur {:.1}px",
                    frame.rotation,
                    frame.focus_x,
                    frame.focus_y,
                    round.silhouette_blur()
                ));
            }
        }
        GameVariant::Classic => {}
    }

    let guesses = round.display_guesses();
    if guesses.is_empty() {
        lines.push(text::no_guesses(locale).to_string());
    }
    for hero in &guesses {
        let results = AttributeComparator::evaluate_guess(hero, round.answer());
        lines.push(guess_row(hero, &results, locale));
    }

    lines.push(text::guess_count(guesses.len(), locale));
    if round.solved() {
        lines.push(text::win(round.answer().display_name(locale), locale));
    }

    lines.join("\n")
}
