//! Cardinal moves and translation of cell paths into move lists.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

/// One of the four axis-aligned moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in bit order of the cell encoding.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Order in which open neighbours are enqueued during search.
    ///
    /// Breadth-first tie-breaks between equally short paths depend on it.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// Lowercase name used in solver output.
    pub const fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }

    /// Unit offset of the move (rows grow downward).
    pub const fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    /// The move leading from `from` to the adjacent cell `to`.
    ///
    /// Returns `None` unless the two points are exactly one step apart on a
    /// single axis.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let d = to - from;
        match (d.x, d.y) {
            (0, -1) => Some(Direction::Up),
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_matches('\'').to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "right" => Ok(Direction::Right),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Translate a path given from end back to start into the moves taken from
/// start to end.
///
/// Consecutive points must be adjacent on one axis. A pair that is not
/// (which a well-formed search never produces) is skipped and logged.
pub fn directions(path: &[Point]) -> Vec<Direction> {
    let mut moves = Vec::with_capacity(path.len().saturating_sub(1));
    for pair in path.windows(2).rev() {
        let (to, from) = (pair[0], pair[1]);
        match Direction::between(from, to) {
            Some(d) => moves.push(d),
            None => log::warn!("path step {from} -> {to} is not a single move"),
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_unit_steps() {
        let p = Point::at(1, 1);
        assert_eq!(Direction::between(p, Point::at(0, 1)), Some(Direction::Up));
        assert_eq!(Direction::between(p, Point::at(2, 1)), Some(Direction::Down));
        assert_eq!(Direction::between(p, Point::at(1, 0)), Some(Direction::Left));
        assert_eq!(Direction::between(p, Point::at(1, 2)), Some(Direction::Right));
        assert_eq!(Direction::between(p, Point::at(2, 2)), None);
        assert_eq!(Direction::between(p, p), None);
    }

    #[test]
    fn delta_matches_between() {
        let p = Point::new(4, 4);
        for d in Direction::ALL {
            assert_eq!(Direction::between(p, p + d.delta()), Some(d));
            let back = Direction::between(p + d.delta(), p).map(Direction::delta);
            assert_eq!(back, Some(Point::ZERO - d.delta()));
        }
    }

    #[test]
    fn translate_end_to_start_path() {
        // start (2,1) -> (1,1) -> (0,1) -> end (0,0), listed end first.
        let path = [Point::at(0, 0), Point::at(0, 1), Point::at(1, 1), Point::at(2, 1)];
        assert_eq!(
            directions(&path),
            vec![Direction::Up, Direction::Up, Direction::Left]
        );
    }

    #[test]
    fn translate_detour_path() {
        let path = [
            Point::at(0, 0),
            Point::at(0, 1),
            Point::at(0, 2),
            Point::at(1, 2),
            Point::at(2, 2),
            Point::at(2, 1),
        ];
        let labels: Vec<_> = directions(&path).iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["right", "up", "up", "left", "left"]);
    }

    #[test]
    fn output_is_one_shorter_than_path() {
        assert!(directions(&[]).is_empty());
        assert!(directions(&[Point::ZERO]).is_empty());
        let path = [Point::at(0, 3), Point::at(0, 2), Point::at(0, 1), Point::at(0, 0)];
        assert_eq!(directions(&path).len(), path.len() - 1);
        assert!(directions(&path).iter().all(|&d| d == Direction::Right));
    }

    #[test]
    fn parse_labels() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("'left'".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" Down ".parse::<Direction>(), Ok(Direction::Down));
        assert!("north".parse::<Direction>().is_err());
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>(), Ok(d));
        }
    }
}
