//! Settings shared by every maze of a run.

use lifemaze_core::LifeBudget;

use crate::format::OutputFormat;

/// Run configuration, normally filled from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Lives available to each maze.
    pub lives: LifeBudget,
    /// Output rendering of the move lists.
    pub format: OutputFormat,
    /// Solve mazes on a thread pool instead of one after another.
    pub parallel: bool,
    /// Print the raw encodings and a picture of every solved maze to stderr.
    pub draw: bool,
}
