//! Frequency-ranked word list with edit-distance suggestions.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::CorrectError;

/// Word-level spelling reference.
///
/// Implementations must be safe for concurrent reads; nothing mutates a
/// dictionary after construction.
pub trait Dictionary: Send + Sync {
    /// Is this token a correctly spelled word?
    fn contains(&self, word: &str) -> bool;

    /// Best correction for an unknown token, if one is known.
    fn suggest(&self, word: &str) -> Option<String>;
}

/// Compact English word list bundled with the crate.
const BUILTIN_WORDS: &str = include_str!("../data/words_en.txt");

/// Candidate letters for replace/insert edits.
const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n',
    'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '\'',
];

/// Tokens longer than this never get suggestions; the edit-candidate space
/// grows quadratically with token length.
const MAX_SUGGEST_LEN: usize = 24;

/// Distance-2 fallback is only attempted for short tokens.
const MAX_EDITS2_LEN: usize = 16;

/// Case-insensitive, frequency-ranked word list.
///
/// Suggestion policy: the highest-frequency known candidate at edit
/// distance 1 (deletes, transposes, replaces, inserts), falling back to
/// edit distance 2; ties break lexicographically for determinism.
#[derive(Debug)]
pub struct WordList {
    frequencies: HashMap<String, u64>,
}

impl WordList {
    /// The bundled English word list.
    pub fn builtin() -> Self {
        Self {
            frequencies: parse_word_list(BUILTIN_WORDS),
        }
    }

    /// Load a word list from a file.
    ///
    /// One entry per line: `word` or `word frequency`; `#` starts a
    /// comment. Words are lowercased on load.
    pub fn from_path(path: &Path) -> Result<Self, CorrectError> {
        let text = fs::read_to_string(path).map_err(|source| CorrectError::WordListRead {
            path: path.to_path_buf(),
            source,
        })?;
        let frequencies = parse_word_list(&text);
        if frequencies.is_empty() {
            return Err(CorrectError::WordListEmpty {
                path: path.to_path_buf(),
            });
        }
        debug!(words = frequencies.len(), path = %path.display(), "loaded word list");
        Ok(Self { frequencies })
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True when the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// Highest-frequency known candidate, ties broken lexicographically.
    fn best_known(&self, candidates: &HashSet<String>) -> Option<String> {
        candidates
            .iter()
            .filter(|c| self.frequencies.contains_key(c.as_str()))
            .max_by(|a, b| {
                self.frequency(a)
                    .cmp(&self.frequency(b))
                    .then_with(|| b.as_str().cmp(a.as_str()))
            })
            .cloned()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(word.to_lowercase().as_str())
    }

    fn suggest(&self, word: &str) -> Option<String> {
        let lower = word.to_lowercase();
        if lower.chars().count() > MAX_SUGGEST_LEN {
            return None;
        }
        if self.frequencies.contains_key(lower.as_str()) {
            return Some(lower);
        }

        let distance1 = edits1(&lower);
        if let Some(best) = self.best_known(&distance1) {
            return Some(best);
        }

        if lower.chars().count() > MAX_EDITS2_LEN {
            return None;
        }
        let mut distance2 = HashSet::new();
        for edit in &distance1 {
            distance2.extend(
                edits1(edit)
                    .into_iter()
                    .filter(|c| self.frequencies.contains_key(c.as_str())),
            );
        }
        self.best_known(&distance2)
    }
}

fn parse_word_list(text: &str) -> HashMap<String, u64> {
    let mut frequencies = HashMap::new();
    for line in text.lines() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else { continue };
        let frequency = parts.next().and_then(|f| f.parse().ok()).unwrap_or(1);
        frequencies.insert(word.to_lowercase(), frequency);
    }
    frequencies
}

/// All strings at edit distance 1 from `word`.
fn edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = HashSet::new();

    for i in 0..chars.len() {
        // Deletes
        let mut deleted: String = chars[..i].iter().collect();
        deleted.extend(&chars[i + 1..]);
        out.insert(deleted);

        // Transposes
        if i + 1 < chars.len() {
            let mut swapped = chars.clone();
            swapped.swap(i, i + 1);
            out.insert(swapped.into_iter().collect());
        }

        // Replaces
        for &letter in ALPHABET {
            let mut replaced = chars.clone();
            replaced[i] = letter;
            out.insert(replaced.into_iter().collect());
        }
    }

    // Inserts
    for i in 0..=chars.len() {
        for &letter in ALPHABET {
            let mut inserted = chars.clone();
            inserted.insert(i, letter);
            out.insert(inserted.into_iter().collect());
        }
    }

    out
}
