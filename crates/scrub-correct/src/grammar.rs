//! Grammar-service client and edit application.
//!
//! The grammar collaborator is any LanguageTool-compatible HTTP service
//! (`POST {base}/v2/check` with `text` and `language` form fields). The
//! client is constructed once per pipeline run; construction verifies the
//! service is reachable so a misconfigured endpoint fails the run before
//! any cell is processed.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::CorrectError;

/// Default grammar endpoint (a locally running LanguageTool server).
pub const DEFAULT_GRAMMAR_URL: &str = "http://localhost:8010";

/// Default language variant sent with every check request.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Per-request timeout; a slow service degrades to per-cell fallbacks
/// instead of stalling the run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Grammar-service configuration.
#[derive(Debug, Clone)]
pub struct GrammarConfig {
    /// Base URL of the service, without the `/v2/...` suffix.
    pub base_url: String,
    /// Language variant, e.g. `en-US`.
    pub language: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GRAMMAR_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// One corrective edit, offsets and lengths in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarEdit {
    pub offset: usize,
    pub length: usize,
    pub replacement: String,
}

/// Sentence-level grammar checker.
///
/// Implementations must be safe for concurrent use; the pipeline shares
/// one checker across all cells.
pub trait GrammarChecker: Send + Sync {
    /// Corrective edits for `text`, in any order.
    fn check(&self, text: &str) -> Result<Vec<GrammarEdit>, CorrectError>;
}

/// Apply non-overlapping edits to `text`.
///
/// Edits are applied in offset order; an edit that overlaps an already
/// applied one, or reaches past the end of the text, is dropped.
pub fn apply_edits(text: &str, edits: &[GrammarEdit]) -> String {
    let mut sorted: Vec<&GrammarEdit> = edits.iter().collect();
    sorted.sort_by_key(|e| (e.offset, e.length));

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for edit in sorted {
        let end = edit.offset + edit.length;
        if edit.offset < cursor || end > chars.len() {
            continue;
        }
        out.extend(&chars[cursor..edit.offset]);
        out.push_str(&edit.replacement);
        cursor = end;
    }
    out.extend(&chars[cursor..]);
    out
}

/// Blocking HTTP client for a LanguageTool-compatible service.
pub struct GrammarClient {
    client: Client,
    config: GrammarConfig,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<Match>,
}

#[derive(Debug, Deserialize)]
struct Match {
    offset: usize,
    length: usize,
    #[serde(default)]
    replacements: Vec<Replacement>,
}

#[derive(Debug, Deserialize)]
struct Replacement {
    value: String,
}

impl GrammarClient {
    /// Build the client and verify the service answers.
    ///
    /// # Errors
    ///
    /// [`CorrectError::GrammarUnavailable`] when the endpoint does not
    /// respond to `GET /v2/languages`; the caller must treat this as a
    /// fatal configuration error.
    pub fn connect(config: GrammarConfig) -> Result<Self, CorrectError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CorrectError::GrammarUnavailable {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        let probe = format!("{}/v2/languages", config.base_url.trim_end_matches('/'));
        let response =
            client
                .get(&probe)
                .send()
                .map_err(|e| CorrectError::GrammarUnavailable {
                    url: config.base_url.clone(),
                    reason: e.to_string(),
                })?;
        if !response.status().is_success() {
            return Err(CorrectError::GrammarUnavailable {
                url: config.base_url.clone(),
                reason: format!("HTTP {}", response.status().as_u16()),
            });
        }

        debug!(url = %config.base_url, language = %config.language, "grammar service reachable");
        Ok(Self { client, config })
    }

    fn check_url(&self) -> String {
        format!("{}/v2/check", self.config.base_url.trim_end_matches('/'))
    }
}

impl GrammarChecker for GrammarClient {
    fn check(&self, text: &str) -> Result<Vec<GrammarEdit>, CorrectError> {
        let response = self
            .client
            .post(self.check_url())
            .form(&[("text", text), ("language", self.config.language.as_str())])
            .send()
            .map_err(|e| CorrectError::GrammarRequest(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CorrectError::GrammarStatus {
                status: response.status().as_u16(),
            });
        }

        let parsed: CheckResponse = response
            .json()
            .map_err(|e| CorrectError::GrammarRequest(e.to_string()))?;

        let edits = parsed
            .matches
            .into_iter()
            .filter_map(|m| {
                m.replacements.into_iter().next().map(|r| GrammarEdit {
                    offset: m.offset,
                    length: m.length,
                    replacement: r.value,
                })
            })
            .collect();
        Ok(edits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(offset: usize, length: usize, replacement: &str) -> GrammarEdit {
        GrammarEdit {
            offset,
            length,
            replacement: replacement.to_string(),
        }
    }

    #[test]
    fn apply_edits_replaces_in_place() {
        assert_eq!(
            apply_edits("he go home", &[edit(3, 2, "goes")]),
            "he goes home"
        );
    }

    #[test]
    fn apply_edits_handles_multiple_edits() {
        // "i am ok" -> "I am okay"
        let edits = [edit(0, 1, "I"), edit(5, 2, "okay")];
        assert_eq!(apply_edits("i am ok", &edits), "I am okay");
    }

    #[test]
    fn apply_edits_drops_overlapping_edits() {
        let edits = [edit(0, 4, "that"), edit(2, 4, "X")];
        assert_eq!(apply_edits("this is", &edits), "that is");
    }

    #[test]
    fn apply_edits_ignores_out_of_range_edits() {
        assert_eq!(apply_edits("short", &[edit(10, 2, "x")]), "short");
    }

    #[test]
    fn apply_edits_works_on_non_ascii_text() {
        // Offsets are in characters, not bytes.
        assert_eq!(
            apply_edits("\u{4f60}\u{597d} wrld", &[edit(3, 4, "world")]),
            "\u{4f60}\u{597d} world"
        );
    }

    #[test]
    fn check_response_parses_language_tool_shape() {
        let json = r#"{
            "matches": [
                {
                    "offset": 3,
                    "length": 2,
                    "replacements": [{"value": "goes"}, {"value": "went"}]
                },
                {"offset": 9, "length": 1, "replacements": []}
            ]
        }"#;
        let parsed: CheckResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.matches.len(), 2);
        assert_eq!(parsed.matches[0].replacements[0].value, "goes");
        assert!(parsed.matches[1].replacements.is_empty());
    }
}
