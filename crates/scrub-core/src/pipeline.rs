//! Per-cell stage execution over a whole table.
//!
//! # Stage order
//!
//! 1. collapse whitespace
//! 2. normalize punctuation
//! 3. enforce spacing
//! 4. spelling correction (optional)
//! 5. grammar correction (optional, requires spelling)
//! 6. final trim
//!
//! Cells are independent: no cross-cell state exists beyond the read-only
//! dictionary and grammar client, both constructed once before the first
//! cell. Cell processing is synchronous; per-cell independence keeps a
//! parallel map a valid future implementation.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};

use scrub_correct::{
    Dictionary, GrammarChecker, GrammarClient, GrammarConfig, WordList, correct_cell,
};
use scrub_model::Table;
use scrub_normalize::{NormalizeOptions, normalize};

/// Options for the optional correction stages.
#[derive(Debug, Clone, Default)]
pub struct CorrectionOptions {
    /// Word list file; the bundled list is used when absent.
    pub dictionary_path: Option<PathBuf>,
    /// Grammar service configuration; grammar is skipped when absent.
    pub grammar: Option<GrammarConfig>,
}

/// Full pipeline configuration.
///
/// The baseline stages are always active; `correction` selects the
/// extended pipeline variant.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub normalize: NormalizeOptions,
    pub correction: Option<CorrectionOptions>,
}

/// Initialize-once resources shared by every cell transform.
pub struct Resources {
    dictionary: Box<dyn Dictionary>,
    grammar: Option<Box<dyn GrammarChecker>>,
}

impl Resources {
    /// Build resources from explicit collaborators (used by tests and by
    /// callers with custom dictionaries or checkers).
    pub fn new(
        dictionary: Box<dyn Dictionary>,
        grammar: Option<Box<dyn GrammarChecker>>,
    ) -> Self {
        Self {
            dictionary,
            grammar,
        }
    }

    /// Build resources from options: load the word list and connect the
    /// grammar client.
    ///
    /// An unreachable grammar service fails here, before any cell is
    /// processed.
    pub fn from_options(options: &CorrectionOptions) -> anyhow::Result<Self> {
        let dictionary: Box<dyn Dictionary> = match &options.dictionary_path {
            Some(path) => Box::new(
                WordList::from_path(path)
                    .with_context(|| format!("loading word list {}", path.display()))?,
            ),
            None => Box::new(WordList::builtin()),
        };
        let grammar: Option<Box<dyn GrammarChecker>> = match &options.grammar {
            Some(config) => {
                let client = GrammarClient::connect(config.clone())
                    .context("connecting to grammar service")?;
                Some(Box::new(client))
            }
            None => None,
        };
        Ok(Self {
            dictionary,
            grammar,
        })
    }
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Text cells that went through the stages.
    pub cells_seen: usize,
    /// Text cells whose content changed.
    pub cells_changed: usize,
    /// Cells where the grammar call failed and the post-spelling text was
    /// kept. Non-fatal; surfaced as warnings.
    pub grammar_failures: usize,
}

/// Run the pipeline over every text cell, producing a new table.
///
/// The output table has the same row count, column count, and column
/// names as the input; non-text cells are copied through unchanged.
pub fn run_pipeline(table: &Table, options: &PipelineOptions) -> anyhow::Result<(Table, RunReport)> {
    run_pipeline_with_progress(table, options, |_| {})
}

/// [`run_pipeline`] with a per-cell progress callback (called with the
/// number of cells processed so far).
pub fn run_pipeline_with_progress<F>(
    table: &Table,
    options: &PipelineOptions,
    mut progress: F,
) -> anyhow::Result<(Table, RunReport)>
where
    F: FnMut(usize),
{
    let resources = options
        .correction
        .as_ref()
        .map(Resources::from_options)
        .transpose()?;

    info!(
        rows = table.n_rows(),
        cols = table.n_cols(),
        correction = resources.is_some(),
        "cleaning table"
    );
    Ok(run_with_resources(
        table,
        &options.normalize,
        resources.as_ref(),
        &mut progress,
    ))
}

fn run_with_resources<F>(
    table: &Table,
    normalize_options: &NormalizeOptions,
    resources: Option<&Resources>,
    progress: &mut F,
) -> (Table, RunReport)
where
    F: FnMut(usize),
{
    let mut report = RunReport::default();
    let mut processed = 0usize;

    let cleaned = table.map_text_cells(|text| {
        let out = clean_cell(text, normalize_options, resources, &mut report);
        report.cells_seen += 1;
        if out != text {
            report.cells_changed += 1;
        }
        processed += 1;
        progress(processed);
        out
    });

    if report.grammar_failures > 0 {
        warn!(
            failures = report.grammar_failures,
            "grammar correction fell back on some cells"
        );
    }
    (cleaned, report)
}

/// Apply the active stages, in order, to one cell's text.
fn clean_cell(
    text: &str,
    normalize_options: &NormalizeOptions,
    resources: Option<&Resources>,
    report: &mut RunReport,
) -> String {
    let mut out = normalize(text, normalize_options);

    if let Some(resources) = resources {
        let outcome = correct_cell(
            resources.dictionary.as_ref(),
            resources.grammar.as_deref(),
            &out,
        );
        if outcome.grammar_error.is_some() {
            report.grammar_failures += 1;
        }
        out = outcome.text;
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use scrub_correct::{CorrectError, GrammarEdit, WordList};
    use scrub_model::{CellValue, Column};

    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn table_of(cells: Vec<CellValue>) -> Table {
        Table::new(vec![Column::new("col", cells)]).unwrap()
    }

    struct FailingChecker;

    impl GrammarChecker for FailingChecker {
        fn check(&self, _text: &str) -> Result<Vec<GrammarEdit>, CorrectError> {
            Err(CorrectError::GrammarRequest("timed out".to_string()))
        }
    }

    #[test]
    fn baseline_pipeline_cleans_text_cells() {
        let table = table_of(vec![text(
            "  Hello\u{ff0c}  world\u{ff01}This is a smple test.",
        )]);
        let (out, report) = run_pipeline(&table, &PipelineOptions::default()).unwrap();
        assert_eq!(
            out.column("col").unwrap().cells[0],
            text("Hello, world! This is a smple test.")
        );
        assert_eq!(report.cells_seen, 1);
        assert_eq!(report.cells_changed, 1);
        assert_eq!(report.grammar_failures, 0);
    }

    #[test]
    fn spelling_variant_corrects_unknown_words() {
        let table = table_of(vec![text(
            "  Hello\u{ff0c}  world\u{ff01}This is a smple test.",
        )]);
        let options = PipelineOptions {
            normalize: NormalizeOptions::default(),
            correction: Some(CorrectionOptions::default()),
        };
        let (out, _) = run_pipeline(&table, &options).unwrap();
        assert_eq!(
            out.column("col").unwrap().cells[0],
            text("Hello, world! This is a simple test.")
        );
    }

    #[test]
    fn opaque_cells_pass_through_unchanged() {
        let table = table_of(vec![
            CellValue::Integer(42),
            CellValue::Number(3.5),
            CellValue::Boolean(true),
            CellValue::Missing,
        ]);
        let (out, report) = run_pipeline(&table, &PipelineOptions::default()).unwrap();
        assert_eq!(out, table);
        assert_eq!(report.cells_seen, 0);
        assert_eq!(report.cells_changed, 0);
    }

    #[test]
    fn grammar_failure_is_counted_not_fatal() {
        let table = table_of(vec![text("a smple test"), text("more text")]);
        let resources = Resources::new(
            Box::new(WordList::builtin()),
            Some(Box::new(FailingChecker)),
        );
        let mut noop = |_| {};
        let (out, report) = run_with_resources(
            &table,
            &NormalizeOptions::default(),
            Some(&resources),
            &mut noop,
        );
        assert_eq!(out.column("col").unwrap().cells[0], text("a simple test"));
        assert_eq!(out.column("col").unwrap().cells[1], text("more text"));
        assert_eq!(report.grammar_failures, 2);
    }

    #[test]
    fn unchanged_cells_are_not_counted_as_changed() {
        let table = table_of(vec![text("already clean"), text("  messy  ")]);
        let (_, report) = run_pipeline(&table, &PipelineOptions::default()).unwrap();
        assert_eq!(report.cells_seen, 2);
        assert_eq!(report.cells_changed, 1);
    }

    #[test]
    fn progress_callback_sees_every_cell() {
        let table = table_of(vec![text("a"), CellValue::Missing, text("b")]);
        let mut calls = Vec::new();
        run_pipeline_with_progress(&table, &PipelineOptions::default(), |n| calls.push(n))
            .unwrap();
        assert_eq!(calls, vec![1, 2]);
    }
}
