//! lifemaze: solve batches of mine mazes from a text file.
//!
//! Each input line describes one maze as `(<rows>,<columns>)-[<v0>,...]`.
//! The maze is decoded with [`lifemaze_core`], searched with
//! [`lifemaze_paths`] under a life budget, and printed as a list of moves.

pub mod batch;
pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod record;
pub mod solve;

pub use batch::{RunStatus, run, run_file};
pub use config::Config;
pub use error::{LifemazeError, Result};
pub use format::OutputFormat;
pub use record::{MazeRecord, RecordError, parse_record};
pub use solve::{Solution, Solver, solve};
