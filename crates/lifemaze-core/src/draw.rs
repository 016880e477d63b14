//! Plain-text pictures of a [`Maze`] for debugging output.

use std::fmt::Write;

use crate::direction::Direction;
use crate::geom::Point;
use crate::maze::Maze;

/// The raw encodings, one maze row per line.
pub fn raw_matrix(maze: &Maze) -> String {
    let mut out = String::new();
    for y in 0..maze.rows() as i32 {
        let line: String = (0..maze.columns() as i32)
            .filter_map(|x| maze.encoding(Point::new(x, y)))
            .map(|enc| format!("{enc:<3}"))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Draw the maze as a `(2·rows+1) × (2·columns+1)` picture.
///
/// Cell centres show `S`, `E` or `M` for start, end and mine cells, `*` for
/// cells of `path`, and a blank otherwise. Walls are `+`, open passages are
/// blank.
pub fn draw(maze: &Maze, path: &[Point]) -> String {
    let w = maze.columns() * 2 + 1;
    let h = maze.rows() * 2 + 1;
    let mut canvas = vec![vec!['+'; w]; h];

    for cell in maze.cells() {
        let cx = cell.pos.x as usize * 2 + 1;
        let cy = cell.pos.y as usize * 2 + 1;
        canvas[cy][cx] = if cell.is_start() {
            'S'
        } else if cell.is_end() {
            'E'
        } else if cell.is_mine() {
            'M'
        } else if path.contains(&cell.pos) {
            '*'
        } else {
            ' '
        };
        for dir in cell.passages() {
            let d = dir.delta();
            let (px, py) = (cx as i32 + d.x, cy as i32 + d.y);
            canvas[py as usize][px as usize] = ' ';
        }
    }

    let mut out = String::with_capacity(h * (w * 2 + 1));
    for row in canvas {
        let mut line = String::with_capacity(w * 2);
        for ch in row {
            let _ = write!(line, "{ch} ");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Mark the moves of a solution under the picture, e.g. `S > ^ ^ < < E`.
pub fn arrows(moves: &[Direction]) -> String {
    let mut out = String::from("S");
    for d in moves {
        out.push(' ');
        out.push(match d {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        });
    }
    out.push_str(" E");
    out
}
