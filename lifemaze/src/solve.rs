//! Solving a single maze record: build the grid, search it, translate the
//! path into moves.

use lifemaze_core::{Direction, LifeBudget, Maze, Point, directions};
use lifemaze_paths::PathRange;

use crate::Result;
use crate::record::MazeRecord;

/// The outcome of a search on one maze.
#[derive(Debug, Clone)]
pub struct Solution {
    pub maze: Maze,
    /// Cells from the end back to the start; empty if the end is unreachable.
    pub path: Vec<Point>,
    /// Moves from the start to the end.
    pub directions: Vec<Direction>,
}

impl Solution {
    /// Whether a path to the end was found.
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Reusable solver. Keeps its search caches between mazes of the same size.
pub struct Solver {
    paths: PathRange,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self {
            paths: PathRange::new(Default::default()),
        }
    }

    /// Build and solve the maze described by `record`.
    pub fn solve(&mut self, record: &MazeRecord, lives: LifeBudget) -> Result<Solution> {
        let maze = Maze::new(record.rows, record.columns, &record.cells)?;
        Ok(self.solve_maze(maze, lives))
    }

    /// Solve an already built maze.
    pub fn solve_maze(&mut self, maze: Maze, lives: LifeBudget) -> Solution {
        if self.paths.range() != maze.range() {
            self.paths.set_range(maze.range());
        }
        let path = self.paths.lives_path(&maze, maze.start(), lives);
        if path.is_empty() {
            log::info!(
                "{}x{} maze with {} mines has no path with {lives} lives",
                maze.rows(),
                maze.columns(),
                maze.mine_count()
            );
        }
        let directions = directions(&path);
        Solution {
            maze,
            path,
            directions,
        }
    }
}

/// Build and solve one maze with a fresh [`Solver`].
pub fn solve(record: &MazeRecord, lives: LifeBudget) -> Result<Solution> {
    Solver::new().solve(record, lives)
}
