//! Baseline text normalization stages.
//!
//! Three ordered, total string transforms shared by every pipeline variant:
//!
//! 1. [`collapse_whitespace`] - squeeze whitespace runs to single spaces
//! 2. [`normalize_punctuation`] - half-width punctuation next to Latin text
//! 3. [`enforce_spacing`] - exactly one space after sentence punctuation
//!
//! The stages are pure functions over arbitrary input; none of them can
//! fail, and none of them changes anything but the text handed to them.

mod punctuation;
mod spacing;
mod whitespace;

pub use punctuation::{PUNCTUATION_MAP, half_width, normalize_punctuation};
pub use spacing::enforce_spacing;
pub use whitespace::collapse_whitespace;

use serde::{Deserialize, Serialize};

/// Which baseline stages run. All three are on by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeOptions {
    pub collapse_whitespace: bool,
    pub normalize_punctuation: bool,
    pub enforce_spacing: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            normalize_punctuation: true,
            enforce_spacing: true,
        }
    }
}

/// Run the active baseline stages in their fixed order.
pub fn normalize(text: &str, options: &NormalizeOptions) -> String {
    let mut out = if options.collapse_whitespace {
        collapse_whitespace(text)
    } else {
        text.to_string()
    };
    if options.normalize_punctuation {
        out = normalize_punctuation(&out);
    }
    if options.enforce_spacing {
        out = enforce_spacing(&out);
    }
    out
}
