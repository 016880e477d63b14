//! Cell encodings: [`CellFlags`] and the decoded [`Cell`].

use std::fmt;
use std::ops::{BitAnd, BitOr};

use crate::direction::Direction;
use crate::geom::Point;

// ---------------------------------------------------------------------------
// CellFlags
// ---------------------------------------------------------------------------

/// Bitmask of passages and markers of a maze cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFlags(pub u8);

impl CellFlags {
    pub const NONE: Self = Self(0);
    pub const UP: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const DOWN: Self = Self(1 << 2);
    pub const LEFT: Self = Self(1 << 3);
    pub const START: Self = Self(1 << 4);
    pub const END: Self = Self(1 << 5);
    pub const MINE: Self = Self(1 << 6);

    /// Every bit the encoding defines.
    pub const KNOWN: Self = Self(0x7f);

    /// Decode an integer cell encoding. Unknown high bits are dropped.
    #[inline]
    pub const fn decode(encoding: u32) -> Self {
        Self((encoding & Self::KNOWN.0 as u32) as u8)
    }

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The passage bit for a direction.
    #[inline]
    pub const fn passage(dir: Direction) -> Self {
        match dir {
            Direction::Up => Self::UP,
            Direction::Right => Self::RIGHT,
            Direction::Down => Self::DOWN,
            Direction::Left => Self::LEFT,
        }
    }
}

impl BitOr for CellFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for CellFlags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A decoded maze cell at a fixed position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub flags: CellFlags,
}

impl Cell {
    /// Decode `encoding` as the cell at `pos`.
    #[inline]
    pub const fn new(pos: Point, encoding: u32) -> Self {
        Self {
            pos,
            flags: CellFlags::decode(encoding),
        }
    }

    /// Whether the passage in `dir` is open.
    #[inline]
    pub const fn is_open(self, dir: Direction) -> bool {
        self.flags.contains(CellFlags::passage(dir))
    }

    #[inline]
    pub const fn is_start(self) -> bool {
        self.flags.contains(CellFlags::START)
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        self.flags.contains(CellFlags::END)
    }

    #[inline]
    pub const fn is_mine(self) -> bool {
        self.flags.contains(CellFlags::MINE)
    }

    /// Open directions, in encoding bit order.
    pub fn passages(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.is_open(d))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.pos, self.flags.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_passages() {
        // right + down + left
        let c = Cell::new(Point::ZERO, 14);
        assert!(!c.is_open(Direction::Up));
        assert!(c.is_open(Direction::Right));
        assert!(c.is_open(Direction::Down));
        assert!(c.is_open(Direction::Left));
        assert!(!c.is_start() && !c.is_end() && !c.is_mine());
        let open: Vec<_> = c.passages().collect();
        assert_eq!(open, vec![Direction::Right, Direction::Down, Direction::Left]);
    }

    #[test]
    fn decode_markers_combine_with_passages() {
        // mine + left + down + up
        let mine = Cell::new(Point::ZERO, 77);
        assert!(mine.is_mine());
        assert!(mine.is_open(Direction::Up));
        assert!(mine.is_open(Direction::Down));
        assert!(mine.is_open(Direction::Left));
        assert!(!mine.is_open(Direction::Right));

        let start = Cell::new(Point::ZERO, 19);
        assert!(start.is_start() && !start.is_end());
        let end = Cell::new(Point::ZERO, 34);
        assert!(end.is_end() && !end.is_start());
    }

    #[test]
    fn decode_ignores_unknown_bits() {
        assert_eq!(CellFlags::decode(128), CellFlags::NONE);
        assert_eq!(CellFlags::decode(128 | 5), CellFlags::UP | CellFlags::DOWN);
        assert_eq!(CellFlags::decode(u32::MAX), CellFlags::KNOWN);
    }

    #[test]
    fn flags_ops() {
        let f = CellFlags::START | CellFlags::RIGHT;
        assert!(f.contains(CellFlags::START));
        assert!(!f.contains(CellFlags::END));
        assert_eq!(f & CellFlags::RIGHT, CellFlags::RIGHT);
        assert!(CellFlags::NONE.is_empty());
    }
}
