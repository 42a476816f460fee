//! Command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use scrub_core::{CorrectionOptions, PipelineOptions, RunReport, run_pipeline_with_progress};
use scrub_correct::GrammarConfig;
use scrub_ingest::{read_csv_table, render_cell, timestamped_name, write_csv_table};
use scrub_model::Table;
use scrub_normalize::{NormalizeOptions, PUNCTUATION_MAP};

use crate::cli::CleanArgs;

/// Result of one `clean` invocation, for the end-of-run summary.
pub struct CleanSummary {
    pub rows: usize,
    pub cols: usize,
    pub report: RunReport,
    /// Path of the written file; `None` on --dry-run.
    pub output: Option<PathBuf>,
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanSummary> {
    let table = read_csv_table(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let options = pipeline_options(args);
    let bar = progress_bar(&table, args);
    let (cleaned, report) = run_pipeline_with_progress(&table, &options, |n| {
        bar.set_position(n as u64);
    })?;
    bar.finish_and_clear();

    if let Some(rows) = args.preview {
        print_preview(&cleaned, rows);
    }

    let output = if args.dry_run {
        info!("dry run, no file written");
        None
    } else {
        let path = output_path(args)?;
        write_csv_table(&cleaned, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        Some(path)
    };

    Ok(CleanSummary {
        rows: cleaned.n_rows(),
        cols: cleaned.n_cols(),
        report,
        output,
    })
}

pub fn run_marks() {
    let mut table = comfy_table::Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["full-width", "half-width"]);
    for (full, half) in PUNCTUATION_MAP {
        table.add_row(vec![full.to_string(), (*half).to_string()]);
    }
    println!("{table}");
}

fn pipeline_options(args: &CleanArgs) -> PipelineOptions {
    let correction = args.correct.then(|| CorrectionOptions {
        dictionary_path: args.dictionary.clone(),
        grammar: (!args.no_grammar).then(|| GrammarConfig {
            base_url: args.grammar_url.clone(),
            language: args.language.clone(),
            ..GrammarConfig::default()
        }),
    });
    PipelineOptions {
        normalize: NormalizeOptions::default(),
        correction,
    }
}

/// Progress over text cells; only worth showing when the grammar service
/// (one HTTP round trip per cell) is in play.
fn progress_bar(table: &Table, args: &CleanArgs) -> ProgressBar {
    if !args.correct || args.no_grammar {
        return ProgressBar::hidden();
    }
    let total = table
        .columns()
        .iter()
        .flat_map(|c| &c.cells)
        .filter(|cell| cell.is_text())
        .count();
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} cells")
            .expect("valid progress template")
            .progress_chars("=> "),
    );
    bar
}

fn output_path(args: &CleanArgs) -> Result<PathBuf> {
    let Some(file_name) = args.input.file_name().and_then(|n| n.to_str()) else {
        bail!("input path {} has no file name", args.input.display());
    };
    let dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => args
            .input
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    Ok(dir.join(timestamped_name(file_name, Local::now().naive_local())))
}

fn print_preview(table: &Table, rows: usize) {
    let mut out = comfy_table::Table::new();
    out.load_preset(UTF8_FULL_CONDENSED);
    out.set_header(table.column_names());
    for row in 0..table.n_rows().min(rows) {
        out.add_row(
            table
                .columns()
                .iter()
                .map(|column| render_cell(&column.cells[row])),
        );
    }
    println!("{out}");
}
