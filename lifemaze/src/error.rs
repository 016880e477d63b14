//! Error types for the lifemaze driver

use lifemaze_core::MazeError;
use thiserror::Error;

use crate::record::RecordError;

#[derive(Error, Debug)]
pub enum LifemazeError {
    #[error("Invalid maze record: {0}")]
    Record(#[from] RecordError),

    #[error("Invalid maze: {0}")]
    Maze(#[from] MazeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifemazeError>;
