//! CLI argument definitions for cellscrub.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use scrub_correct::{DEFAULT_GRAMMAR_URL, DEFAULT_LANGUAGE};

#[derive(Parser)]
#[command(
    name = "cellscrub",
    version,
    about = "Clean free-text cells in tabular exports",
    long_about = "Normalize free-text cells in CSV exports: collapse whitespace,\n\
                  convert full-width punctuation next to Latin text, enforce\n\
                  spacing after punctuation, and optionally run spelling and\n\
                  grammar correction against a LanguageTool-compatible service."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a CSV file and write a timestamped copy.
    Clean(CleanArgs),

    /// Print the full-width to half-width punctuation mapping.
    Marks,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the CSV file to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the cleaned file (default: alongside the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Enable spelling and grammar correction.
    #[arg(long = "correct")]
    pub correct: bool,

    /// With --correct, run spelling only and skip the grammar service.
    #[arg(long = "no-grammar", requires = "correct")]
    pub no_grammar: bool,

    /// Word list file (one `word [frequency]` per line); the bundled
    /// English list is used when absent.
    #[arg(long = "dictionary", value_name = "PATH", requires = "correct")]
    pub dictionary: Option<PathBuf>,

    /// Base URL of the LanguageTool-compatible grammar service.
    #[arg(
        long = "grammar-url",
        value_name = "URL",
        default_value = DEFAULT_GRAMMAR_URL
    )]
    pub grammar_url: String,

    /// Language variant for grammar checking.
    #[arg(long = "language", value_name = "TAG", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Clean and report without writing an output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Show the first N cleaned rows as a table.
    #[arg(long = "preview", value_name = "ROWS")]
    pub preview: Option<usize>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn clean_parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["cellscrub", "clean", "input.csv"]).unwrap();
        match cli.command {
            Command::Clean(args) => {
                assert_eq!(args.input.to_str(), Some("input.csv"));
                assert!(!args.correct);
                assert!(!args.dry_run);
            }
            Command::Marks => panic!("expected clean subcommand"),
        }
    }

    #[test]
    fn no_grammar_requires_correct() {
        assert!(Cli::try_parse_from(["cellscrub", "clean", "in.csv", "--no-grammar"]).is_err());
        assert!(
            Cli::try_parse_from(["cellscrub", "clean", "in.csv", "--correct", "--no-grammar"])
                .is_ok()
        );
    }
}
