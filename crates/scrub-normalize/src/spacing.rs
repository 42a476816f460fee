//! Spacing enforcement after punctuation.

use crate::punctuation::PUNCTUATION_MAP;

/// Quote marks, both widths. Quotes never receive a forced trailing space.
const QUOTE_MARKS: &[char] = &[
    '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}', '"', '\'',
];

/// Marks that demand a following space: every mapped mark plus its
/// half-width form, quotes excluded in both widths.
fn is_spacing_mark(ch: char) -> bool {
    if QUOTE_MARKS.contains(&ch) {
        return false;
    }
    PUNCTUATION_MAP
        .iter()
        .any(|(full, half)| *full == ch || half.contains(ch))
}

/// Insert exactly one space after each spacing mark that is directly
/// followed by a non-whitespace character.
///
/// Two exceptions, both deliberate:
/// - a mark at the end of the string gets no trailing space;
/// - a mark followed by the SAME mark gets no space, so runs like `...`,
///   `!!` or `??` stay intact.
///
/// # Examples
///
/// ```
/// use scrub_normalize::enforce_spacing;
///
/// assert_eq!(enforce_spacing("a,b"), "a, b");
/// assert_eq!(enforce_spacing("a, b"), "a, b");
/// assert_eq!(enforce_spacing("done."), "done.");
/// ```
pub fn enforce_spacing(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    for (i, &ch) in chars.iter().enumerate() {
        out.push(ch);
        if !is_spacing_mark(ch) {
            continue;
        }
        if let Some(&next) = chars.get(i + 1)
            && !next.is_whitespace()
            && next != ch
        {
            out.push(' ');
        }
    }
    out
}
