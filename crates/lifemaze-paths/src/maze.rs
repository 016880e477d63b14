//! [`Pather`] implementations for [`Maze`].

use lifemaze_core::{Direction, Maze, Point};

use crate::traits::{LifePather, Pather};

impl Pather for Maze {
    /// Open passages of `p`, in [`Direction::SEARCH_ORDER`].
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            Direction::SEARCH_ORDER
                .iter()
                .filter_map(|&dir| self.step(p, dir)),
        );
    }
}

impl LifePather for Maze {
    fn is_hazard(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.is_mine())
    }

    fn is_goal(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.is_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_search_order() {
        // centre cell open in all four directions
        let mut enc = [0u32; 9];
        enc[4] = 1 | 2 | 4 | 8;
        enc[0] = 16;
        enc[8] = 32;
        let m = Maze::new(3, 3, &enc).unwrap();
        let mut buf = Vec::new();
        m.neighbors(Point::at(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![Point::at(1, 2), Point::at(0, 1), Point::at(1, 0), Point::at(2, 1)]
        );
    }

    #[test]
    fn passages_are_one_way() {
        // start opens right; the end cell has no passage back
        let m = Maze::new(1, 2, &[16 | 2, 32]).unwrap();
        let mut buf = Vec::new();
        m.neighbors(Point::at(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::at(0, 1)]);
        buf.clear();
        m.neighbors(Point::at(0, 1), &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn hazards_and_goal() {
        let m = Maze::new(1, 3, &[18, 64 | 2 | 8, 32 | 8]).unwrap();
        assert!(m.is_hazard(Point::at(0, 1)));
        assert!(!m.is_hazard(Point::at(0, 0)));
        assert!(m.is_goal(Point::at(0, 2)));
        assert!(!m.is_goal(Point::at(5, 5)));
    }
}
