//! Cell-level correction policy.

use tracing::warn;

use crate::{CorrectError, Dictionary, GrammarChecker, apply_edits, correct_spelling};

/// Result of correcting one cell.
#[derive(Debug)]
pub struct CorrectionOutcome {
    /// The corrected text.
    pub text: String,
    /// The grammar failure, when the grammar step fell back. The text is
    /// then the post-spelling value.
    pub grammar_error: Option<CorrectError>,
}

/// Correct one cell: spelling first, then grammar.
///
/// Spelling runs first because the grammar checker works on whole-sentence
/// structure and benefits from pre-corrected tokens. A failing grammar
/// call never fails the cell; the post-spelling text is kept and the
/// error is reported in the outcome for the caller to count.
pub fn correct_cell(
    dictionary: &dyn Dictionary,
    grammar: Option<&dyn GrammarChecker>,
    text: &str,
) -> CorrectionOutcome {
    let spelled = correct_spelling(dictionary, text);

    let Some(grammar) = grammar else {
        return CorrectionOutcome {
            text: spelled,
            grammar_error: None,
        };
    };

    match grammar.check(&spelled) {
        Ok(edits) => CorrectionOutcome {
            text: apply_edits(&spelled, &edits),
            grammar_error: None,
        },
        Err(error) => {
            warn!(%error, "grammar check failed, keeping post-spelling text");
            CorrectionOutcome {
                text: spelled,
                grammar_error: Some(error),
            }
        }
    }
}
