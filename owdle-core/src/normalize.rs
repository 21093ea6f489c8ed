use owdle_types::Hero;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercase and trim. `" Tracer "` and `"TRACER"` both become `"tracer"`.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// `normalize`, then drop everything outside `[a-z0-9]`.
///
/// Accented letters are dropped too; callers that want "Lúcio" to equal
/// "lucio" run `fold_diacritics` first.
pub fn normalize_loose(text: &str) -> String {
    normalize(text)
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Decompose to NFD and strip the combining marks.
pub fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Loose form used by the matcher: diacritics folded before stripping.
pub fn loose_key(text: &str) -> String {
    normalize_loose(&fold_diacritics(text))
}

/// Image lookup key: "Soldier: 76" -> "soldier-76", "Lúcio" -> "lucio".
pub fn slugify(text: &str) -> String {
    let folded = fold_diacritics(text).to_lowercase();
    let mut slug = String::with_capacity(folded.len());
    let mut pending_dash = false;

    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// The hero's explicit `image` slug, or one derived from the name.
pub fn image_slug(hero: &Hero) -> String {
    match hero.image.as_deref() {
        Some(image) if !image.trim().is_empty() => image.trim().to_string(),
        _ => slugify(&hero.name),
    }
}
