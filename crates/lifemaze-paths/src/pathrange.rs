use lifemaze_core::{Point, Range};

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel value meaning "unreachable" in BFS maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel predecessor index of a cell that has none (the search origin,
/// or a cell never reached).
pub const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell state of the life-budget search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct LifeNode {
    pub(crate) visited: bool,
    pub(crate) lives: i32,
    pub(crate) parent: usize,
}

impl Default for LifeNode {
    fn default() -> Self {
        Self {
            visited: false,
            lives: 0,
            parent: NO_PARENT,
        }
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for searches on a maze rectangle.
///
/// `PathRange` owns all per-cell search state in flat arrays indexed by
/// row-major position, so that repeated queries on same-sized mazes reuse
/// their allocations. A single `PathRange` must not be shared by concurrent
/// searches; give each maze its own.
pub struct PathRange {
    pub(crate) rng: Range,
    // life-budget search
    pub(crate) lives_nodes: Vec<LifeNode>,
    pub(crate) lives_evaluated: usize,
    // BFS caches
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_results: Vec<PathNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given maze rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            lives_nodes: vec![LifeNode::default(); len],
            lives_evaluated: 0,
            bfs_map: vec![UNREACHABLE; len],
            bfs_results: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, resizing caches as needed.
    pub fn set_range(&mut self, rng: Range) {
        let len = rng.len();
        self.rng = rng;
        self.lives_nodes.clear();
        self.lives_nodes.resize(len, LifeNode::default());
        self.lives_evaluated = 0;
        self.bfs_map.clear();
        self.bfs_map.resize(len, UNREACHABLE);
        self.bfs_results.clear();
    }

    /// The maze rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sizes_caches() {
        let pr = PathRange::new(Range::new(0, 0, 4, 3));
        assert_eq!(pr.lives_nodes.len(), 12);
        assert_eq!(pr.bfs_map.len(), 12);
        assert!(pr.lives_nodes.iter().all(|n| n.parent == NO_PARENT && !n.visited));
    }

    #[test]
    fn set_range_resizes() {
        let mut pr = PathRange::new(Range::new(0, 0, 2, 2));
        let big = Range::new(0, 0, 5, 5);
        pr.set_range(big);
        assert_eq!(pr.range(), big);
        assert_eq!(pr.lives_nodes.len(), 25);
        assert_eq!(pr.bfs_map.len(), 25);
        assert!(pr.bfs_map.iter().all(|&d| d == UNREACHABLE));
    }

    #[test]
    fn index_round_trip() {
        let pr = PathRange::new(Range::new(0, 0, 3, 3));
        let p = Point::at(2, 1);
        let i = pr.idx(p).unwrap();
        assert_eq!(i, 1 + 2 * 3);
        assert_eq!(pr.point(i), p);
        assert_eq!(pr.idx(Point::at(-1, 0)), None);
    }
}
