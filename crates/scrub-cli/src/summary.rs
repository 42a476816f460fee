//! End-of-run summary output.

use crate::commands::CleanSummary;

pub fn print_summary(summary: &CleanSummary) {
    println!(
        "cleaned {} rows x {} columns: {} text cells seen, {} changed",
        summary.rows, summary.cols, summary.report.cells_seen, summary.report.cells_changed
    );
    if summary.report.grammar_failures > 0 {
        println!(
            "warning: grammar correction fell back on {} cells",
            summary.report.grammar_failures
        );
    }
    match &summary.output {
        Some(path) => println!("wrote {}", path.display()),
        None => println!("dry run, no file written"),
    }
}
