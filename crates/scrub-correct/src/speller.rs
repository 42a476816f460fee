//! Token-level spelling correction policy.

use crate::Dictionary;

/// Correct each whitespace-separated token of `text` against `dictionary`.
///
/// Policy, per token:
/// - known words (case-insensitive) are kept;
/// - tokens carrying anything but letters and apostrophes (numbers,
///   attached punctuation like `word,`) are never rewritten — naive
///   whitespace tokenization cannot see through them, so leaving them
///   alone beats mangling them (documented lossy behavior);
/// - otherwise the dictionary's best suggestion replaces the token,
///   re-shaped to the original's casing (leading capital, all-caps);
/// - no suggestion means the original token is kept.
///
/// Tokens are re-joined with single spaces, so original inter-token
/// spacing does not survive (the collapser has already normalized it).
pub fn correct_spelling(dictionary: &dyn Dictionary, text: &str) -> String {
    text.split_whitespace()
        .map(|token| correct_token(dictionary, token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn correct_token(dictionary: &dyn Dictionary, token: &str) -> String {
    if dictionary.contains(token) {
        return token.to_string();
    }
    if !token.chars().all(|c| c.is_alphabetic() || c == '\'') {
        return token.to_string();
    }
    match dictionary.suggest(token) {
        Some(suggestion) => match_case(token, &suggestion),
        None => token.to_string(),
    }
}

/// Re-shape a lowercase suggestion to the original token's casing.
fn match_case(original: &str, suggestion: &str) -> String {
    let mut chars = original.chars();
    let first_upper = chars.next().is_some_and(char::is_uppercase);
    let rest_upper = chars.clone().any(char::is_alphabetic)
        && chars.filter(|c| c.is_alphabetic()).all(char::is_uppercase);

    if first_upper && rest_upper {
        suggestion.to_uppercase()
    } else if first_upper {
        let mut out = String::with_capacity(suggestion.len());
        let mut rest = suggestion.chars();
        if let Some(first) = rest.next() {
            out.extend(first.to_uppercase());
        }
        out.extend(rest);
        out
    } else {
        suggestion.to_string()
    }
}
