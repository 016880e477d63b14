//! The [`Maze`] grid: decoded cells laid out row-major, with located
//! start and end markers.

use std::fmt;

use crate::cell::Cell;
use crate::direction::Direction;
use crate::geom::{Point, Range};

/// Which marker a [`MazeError`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Marker {
    Start,
    End,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Start => f.write_str("start"),
            Marker::End => f.write_str("end"),
        }
    }
}

/// Errors that can occur when building a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The cell list does not cover a non-empty `rows × columns` grid.
    InvalidDimensions {
        rows: usize,
        columns: usize,
        found: usize,
    },
    /// No cell carries the marker.
    MissingMarker(Marker),
    /// More than one cell carries the marker.
    DuplicateMarker {
        marker: Marker,
        first: Point,
        second: Point,
    },
    /// The life budget is not positive.
    InvalidLifeBudget(i64),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                rows,
                columns,
                found,
            } => write!(
                f,
                "maze: expected {rows}x{columns} = {} cells, found {found}",
                rows.saturating_mul(*columns)
            ),
            Self::MissingMarker(m) => write!(f, "maze has no {m} cell"),
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(f, "maze has more than one {marker} cell: {first} and {second}"),
            Self::InvalidLifeBudget(n) => {
                write!(f, "life budget must be between 1 and {}, got {n}", u32::MAX)
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// A rectangular maze of decoded cells.
///
/// Built once per maze description and never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Cell>,
    encodings: Vec<u32>,
    range: Range,
    start: Point,
    end: Point,
}

impl Maze {
    /// Build a maze from `rows × columns` encodings listed row by row
    /// (`index = column + row × columns`).
    pub fn new(rows: usize, columns: usize, encodings: &[u32]) -> Result<Self, MazeError> {
        let dims_err = MazeError::InvalidDimensions {
            rows,
            columns,
            found: encodings.len(),
        };
        if rows == 0 || columns == 0 {
            return Err(dims_err);
        }
        let (Ok(h), Ok(w)) = (i32::try_from(rows), i32::try_from(columns)) else {
            return Err(dims_err);
        };
        if rows.checked_mul(columns) != Some(encodings.len()) {
            return Err(dims_err);
        }

        let range = Range::new(0, 0, w, h);
        let cells: Vec<Cell> = range
            .iter()
            .zip(encodings)
            .map(|(p, &enc)| Cell::new(p, enc))
            .collect();

        let start = find_marker(&cells, Marker::Start, |c| c.is_start())?;
        let end = find_marker(&cells, Marker::End, |c| c.is_end())?;
        log::debug!("built {rows}x{columns} maze, start {start}, end {end}");

        Ok(Self {
            cells,
            encodings: encodings.to_vec(),
            range,
            start,
            end,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.range.height() as usize
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.range.width() as usize
    }

    /// The bounding range `[0, columns) × [0, rows)`.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Position of the start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position of the end cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.range.index(p).map(|i| &self.cells[i])
    }

    /// Raw encoding at a point, or `None` if out of bounds.
    #[inline]
    pub fn encoding(&self, p: Point) -> Option<u32> {
        self.range.index(p).map(|i| self.encodings[i])
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of hazard cells.
    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_mine()).count()
    }

    /// The cell reached by leaving `p` through `dir`, if that passage is open
    /// and stays inside the grid.
    pub fn step(&self, p: Point, dir: Direction) -> Option<Point> {
        let cell = self.at(p)?;
        if !cell.is_open(dir) {
            return None;
        }
        let n = p + dir.delta();
        if !self.range.contains(n) {
            log::debug!("passage {dir} of {p} leads outside the maze, treated as closed");
            return None;
        }
        Some(n)
    }
}

fn find_marker(
    cells: &[Cell],
    marker: Marker,
    has: impl Fn(&Cell) -> bool,
) -> Result<Point, MazeError> {
    let mut found = cells.iter().filter(|&c| has(c)).map(|c| c.pos);
    let first = found.next().ok_or(MazeError::MissingMarker(marker))?;
    if let Some(second) = found.next() {
        return Err(MazeError::DuplicateMarker {
            marker,
            first,
            second,
        });
    }
    Ok(first)
}
