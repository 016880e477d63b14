use lifemaze_core::Point;

/// Minimal pathfinding interface: provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`, in the order they should be
    /// explored. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather whose cells may cost a life when entered.
pub trait LifePather: Pather {
    /// Whether stepping on `p` costs a life.
    fn is_hazard(&self, p: Point) -> bool;

    /// Whether `p` ends the search.
    fn is_goal(&self, p: Point) -> bool;
}
