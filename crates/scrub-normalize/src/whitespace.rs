//! Whitespace collapsing.

/// Replace every maximal run of whitespace with a single ASCII space and
/// trim both ends.
///
/// Total and idempotent; whitespace-only input yields the empty string.
///
/// # Examples
///
/// ```
/// use scrub_normalize::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  a\t b\n\nc  "), "a b c");
/// assert_eq!(collapse_whitespace("   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            // Leading whitespace never emits; interior runs emit one space
            // once the next non-whitespace character arrives.
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn collapses_interior_runs() {
        assert_eq!(collapse_whitespace("a  b\t\tc"), "a b c");
    }

    #[test]
    fn trims_both_ends() {
        assert_eq!(collapse_whitespace("\n  hi  \r\n"), "hi");
    }

    #[test]
    fn empty_and_blank_inputs_yield_empty() {
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \t\n"), "");
    }

    #[test]
    fn handles_non_ascii_whitespace() {
        assert_eq!(collapse_whitespace("a\u{3000}b"), "a b");
    }

    proptest! {
        #[test]
        fn idempotent(input in ".*") {
            let once = collapse_whitespace(&input);
            prop_assert_eq!(collapse_whitespace(&once), once.clone());
        }

        #[test]
        fn output_has_no_whitespace_runs_or_edges(input in ".*") {
            let out = collapse_whitespace(&input);
            prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
            prop_assert!(!out.contains("  "));
            prop_assert!(out.chars().all(|c| c == ' ' || !c.is_whitespace()));
        }
    }
}
