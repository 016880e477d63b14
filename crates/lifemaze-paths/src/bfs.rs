use std::collections::VecDeque;

use lifemaze_core::Point;

use crate::PathRange;
use crate::pathrange::{PathNode, UNREACHABLE};
use crate::traits::Pather;

impl PathRange {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1 and hazards are ignored. Expansion stops when
    /// the distance exceeds `max_dist`. Returns a slice of all reached nodes
    /// in visiting order.
    pub fn bfs_map<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_dist: i32,
    ) -> &[PathNode] {
        self.bfs_map.fill(UNREACHABLE);
        self.bfs_results.clear();

        let mut queue: VecDeque<usize> = VecDeque::new();

        for &src in sources {
            let Some(si) = self.idx(src) else {
                continue;
            };
            if self.bfs_map[si] != UNREACHABLE {
                continue;
            }
            self.bfs_map[si] = 0;
            queue.push_back(si);
            self.bfs_results.push(PathNode { pos: src, cost: 0 });
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let nd = self.bfs_map[ci] + 1;
            if nd > max_dist {
                continue;
            }

            nbuf.clear();
            pather.neighbors(self.point(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[ni] = nd;
                queue.push_back(ni);
                self.bfs_results.push(PathNode { pos: np, cost: nd });
            }
        }

        self.nbuf = nbuf;
        &self.bfs_results
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached by the last `bfs_map` call.
    pub fn bfs_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.bfs_map[i],
            None => UNREACHABLE,
        }
    }

    /// Number of moves on a shortest path from `from` to `to`, ignoring
    /// hazards, or `None` if `to` cannot be reached.
    pub fn bfs_distance<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Option<i32> {
        self.bfs_map(pather, &[from], UNREACHABLE - 1);
        match self.bfs_at(to) {
            UNREACHABLE => None,
            d => Some(d),
        }
    }
}
