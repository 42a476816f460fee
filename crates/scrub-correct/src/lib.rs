//! Spelling and grammar correction for table cells.
//!
//! Two independent capabilities behind small traits:
//!
//! - [`Dictionary`] answers "is this token a word?" and "what is the best
//!   correction?"; [`WordList`] is the frequency-ranked implementation.
//! - [`GrammarChecker`] returns corrective edits for a sentence;
//!   [`GrammarClient`] talks to a LanguageTool-compatible HTTP service.
//!
//! [`correct_cell`] is the cell-level policy: spelling first, then grammar,
//! with the documented fallbacks (unknown tokens stay, a failed grammar
//! call keeps the post-spelling text).

mod dictionary;
mod error;
mod grammar;
mod orchestrator;
mod speller;

pub use dictionary::{Dictionary, WordList};
pub use error::CorrectError;
pub use grammar::{
    DEFAULT_GRAMMAR_URL, DEFAULT_LANGUAGE, GrammarChecker, GrammarClient, GrammarConfig,
    GrammarEdit, apply_edits,
};
pub use orchestrator::{CorrectionOutcome, correct_cell};
pub use speller::correct_spelling;
