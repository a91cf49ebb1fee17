//! Token-to-label formatting.
//!
//! Input tokens are identifier-style strings (`almond_mushroom`); labels are
//! the human-readable form shown in the app (`Almond Mushroom`).
//!
//! The casing rule is spelled out here instead of delegating to a built-in
//! title-case helper: the first alphabetic character of each
//! whitespace-separated word is uppercased, every later alphabetic character
//! is lowercased, and all other characters pass through unchanged without
//! starting a new word. Built-in helpers disagree across platforms on
//! exactly these edge cases, and the generated file has to stay
//! byte-identical between runs.

/// Format one raw input line as a display label.
///
/// Returns `None` for lines that are empty after trimming; those produce no
/// entry in the generated file. Otherwise underscores become spaces, runs of
/// whitespace collapse to one space, and each word is capitalized.
///
/// ```text
/// almond_mushroom  ->  Almond Mushroom
/// DEATH_cap        ->  Death Cap
/// 123              ->  123
/// ```
pub fn format_label(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let spaced = trimmed.replace('_', " ");
    let label = spaced
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ");
    Some(label)
}

/// Uppercase the first letter of `word`, lowercase the letters after it.
///
/// Non-alphabetic characters are kept as-is and do not restart
/// capitalization: `death's` becomes `Death's`, `3rd` becomes `3Rd`.
fn capitalize_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut seen_letter = false;
    for ch in word.chars() {
        if !ch.is_alphabetic() {
            out.push(ch);
        } else if seen_letter {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
            seen_letter = true;
        }
    }
    out
}
