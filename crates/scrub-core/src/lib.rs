//! Table pipeline runner.
//!
//! Applies the cleaning stages to every text cell of a table in a fixed
//! order, leaving non-text cells untouched and never changing table shape.

mod pipeline;

pub use pipeline::{
    CorrectionOptions, PipelineOptions, Resources, RunReport, run_pipeline,
    run_pipeline_with_progress,
};
