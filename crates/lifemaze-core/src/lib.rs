//! **lifemaze-core**: maze cells, grids and moves.
//!
//! This crate provides the foundational types used across the *lifemaze*
//! workspace: geometry primitives, the cell bitfield decoder, the maze grid
//! with its start and end markers, the life budget, and the translation of
//! cell paths into `up`/`right`/`down`/`left` moves.

pub mod cell;
pub mod direction;
pub mod draw;
pub mod geom;
pub mod lives;
pub mod maze;

pub use cell::{Cell, CellFlags};
pub use direction::{Direction, ParseDirectionError, directions};
pub use geom::{Point, Range};
pub use lives::LifeBudget;
pub use maze::{Marker, Maze, MazeError};
