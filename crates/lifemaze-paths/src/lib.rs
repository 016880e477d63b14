//! Maze search under a hazard life budget.
//!
//! This crate provides the searches used to solve *lifemaze* grids:
//!
//! - **Life-budget BFS** shortest path ([`PathRange::lives_path`])
//! - **BFS** unweighted distance maps ([`PathRange::bfs_map`])
//!
//! All searches operate through [`PathRange`], which owns and reuses the
//! per-cell search state so that repeated queries on mazes of the same size
//! do not allocate.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS distance maps |
//! | [`LifePather`] : [`Pather`] | life-budget search |
//!
//! [`Maze`](lifemaze_core::Maze) implements both, exploring open passages in
//! the order right, up, left, down.

mod bfs;
mod distance;
mod lives;
mod maze;
mod pathrange;
mod traits;

pub use distance::manhattan;
pub use pathrange::{NO_PARENT, PathNode, PathRange, UNREACHABLE};
pub use traits::{LifePather, Pather};
