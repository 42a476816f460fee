//! Shared infrastructure for the cellscrub CLI binary.

pub mod logging;
