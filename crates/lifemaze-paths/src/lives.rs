use std::collections::VecDeque;

use lifemaze_core::{LifeBudget, Point};

use crate::PathRange;
use crate::pathrange::{LifeNode, NO_PARENT};
use crate::traits::LifePather;

impl PathRange {
    /// Breadth-first search from `from` to the first goal cell reachable
    /// under a life budget.
    ///
    /// Every cell starts the search with `budget` lives. Popping a hazard
    /// cell costs that cell one life; a cell left with no lives is a dead
    /// end and is neither accepted as the goal nor expanded. Cells are
    /// marked visited when enqueued, so each cell is entered, charged and
    /// expanded at most once and keeps the first predecessor it was given.
    /// The life cost of a hazard is therefore paid once per search, not
    /// once per path crossing it.
    ///
    /// Neighbours are enqueued in the order the pather yields them, which
    /// decides between equally short paths.
    ///
    /// Returns the path from the goal back to `from` (both included), or an
    /// empty vector if the frontier empties first.
    pub fn lives_path<P: LifePather>(
        &mut self,
        pather: &P,
        from: Point,
        budget: LifeBudget,
    ) -> Vec<Point> {
        let lives = i32::try_from(budget.get()).unwrap_or(i32::MAX);
        self.lives_nodes.fill(LifeNode {
            visited: false,
            lives,
            parent: NO_PARENT,
        });
        self.lives_evaluated = 0;

        let Some(si) = self.idx(from) else {
            log::debug!("search origin {from} is outside {}", self.rng);
            return Vec::new();
        };

        let mut queue: VecDeque<usize> = VecDeque::new();
        self.lives_nodes[si].visited = true;
        queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let goal = 'search: loop {
            let Some(ci) = queue.pop_front() else {
                break 'search None;
            };
            self.lives_evaluated += 1;
            let cp = self.point(ci);

            if pather.is_hazard(cp) {
                self.lives_nodes[ci].lives -= 1;
                log::trace!("hazard at {cp}, {} lives left", self.lives_nodes[ci].lives);
            }
            if self.lives_nodes[ci].lives <= 0 {
                continue;
            }
            if pather.is_goal(cp) {
                break 'search Some(ci);
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.lives_nodes[ni];
                if n.visited {
                    continue;
                }
                n.visited = true;
                n.parent = ci;
                queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;

        let Some(gi) = goal else {
            log::debug!(
                "no path from {from} with {budget} lives after {} cells",
                self.lives_evaluated
            );
            return Vec::new();
        };

        let mut path = Vec::new();
        let mut ci = gi;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.lives_nodes[ci].parent;
        }
        log::debug!(
            "found {}-move path from {from} with {budget} lives after {} cells",
            path.len() - 1,
            self.lives_evaluated
        );
        path
    }

    /// Lives left on `p` after the last [`lives_path`](Self::lives_path)
    /// call, or `None` if `p` is outside the range or was never reached.
    pub fn lives_at(&self, p: Point) -> Option<i32> {
        let n = &self.lives_nodes[self.idx(p)?];
        n.visited.then_some(n.lives)
    }

    /// Predecessor of `p` recorded by the last [`lives_path`](Self::lives_path)
    /// call.
    pub fn parent_of(&self, p: Point) -> Option<Point> {
        match self.lives_nodes[self.idx(p)?].parent {
            NO_PARENT => None,
            i => Some(self.point(i)),
        }
    }

    /// Number of cells popped from the frontier by the last
    /// [`lives_path`](Self::lives_path) call.
    pub fn lives_evaluated(&self) -> usize {
        self.lives_evaluated
    }
}
