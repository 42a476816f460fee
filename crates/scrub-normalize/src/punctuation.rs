//! Script-sensitive full-width punctuation normalization.
//!
//! Mixed-script spreadsheet exports routinely carry full-width punctuation
//! inside otherwise Latin sentences ("Hello\u{ff0c}world"). The normalizer
//! rewrites a fixed set of marks to their half-width forms, but only when
//! the character before the mark is ASCII: a mark following CJK (or any
//! other non-Latin) text is treated as intentionally full-width and kept.

/// The fixed full-width to half-width mapping.
///
/// Process-wide constant; the ellipsis is the one entry whose replacement
/// is longer than a single character.
pub const PUNCTUATION_MAP: &[(char, &str)] = &[
    ('\u{ff0c}', ","),  // ，
    ('\u{3002}', "."),  // 。
    ('\u{ff1b}', ";"),  // ；
    ('\u{ff1a}', ":"),  // ：
    ('\u{ff01}', "!"),  // ！
    ('\u{ff1f}', "?"),  // ？
    ('\u{ff08}', "("),  // （
    ('\u{ff09}', ")"),  // ）
    ('\u{3010}', "["),  // 【
    ('\u{3011}', "]"),  // 】
    ('\u{300a}', "<"),  // 《
    ('\u{300b}', ">"),  // 》
    ('\u{201c}', "\""), // “
    ('\u{201d}', "\""), // ”
    ('\u{2018}', "'"),  // ‘
    ('\u{2019}', "'"),  // ’
    ('\u{2026}', "..."), // …
    ('\u{b7}', "."),    // ·
];

/// The half-width replacement for a mapped mark.
pub fn half_width(mark: char) -> Option<&'static str> {
    PUNCTUATION_MAP
        .iter()
        .find(|(full, _)| *full == mark)
        .map(|(_, half)| *half)
}

/// Rewrite mapped marks to half-width unless preceded by non-ASCII text.
///
/// The lookback inspects the character immediately before the mark in the
/// ORIGINAL input, never the partially rewritten output; that keeps the
/// multi-character ellipsis replacement from shifting later decisions. A
/// mark at the start of the string is always rewritten.
///
/// # Examples
///
/// ```
/// use scrub_normalize::normalize_punctuation;
///
/// assert_eq!(normalize_punctuation("hi\u{ff0c}world"), "hi,world");
/// assert_eq!(
///     normalize_punctuation("\u{4f60}\u{597d}\u{ff0c}world"),
///     "\u{4f60}\u{597d}\u{ff0c}world"
/// );
/// ```
pub fn normalize_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        match half_width(ch) {
            Some(half) if prev.is_none_or(|p| p.is_ascii()) => out.push_str(half),
            _ => out.push(ch),
        }
        prev = Some(ch);
    }
    out
}
