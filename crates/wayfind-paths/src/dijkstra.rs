use wayfind_core::Point;

use crate::engine::{PathEngine, PathNode, UNREACHABLE};
use crate::traits::WeightedPather;

impl PathEngine {
    /// Run Dijkstra's algorithm from `from` until `to` is finalized.
    ///
    /// Returns the visitation sequence: every finalized cell with its final
    /// distance, in finalization order. Distances along it never decrease.
    /// The search stops early as soon as `to` is finalized, so a goal that
    /// cannot be reached is simply absent from the sequence; no error is
    /// raised for it.
    ///
    /// Equal-distance cells are finalized in the order they were pushed onto
    /// the frontier, which together with the pather's neighbor order makes
    /// the sequence fully reproducible.
    ///
    /// The state table is reset at the start of every call. An out-of-range
    /// source yields an empty sequence.
    pub fn search<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> &[PathNode] {
        self.bump_generation();
        self.frontier.clear();
        self.visited.clear();
        self.goal_reached = false;

        let Some(si) = self.idx(from) else {
            log::debug!("search source {from} outside {}", self.rng);
            return &self.visited;
        };
        let goal = self.idx(to);

        self.touch(si).dist = 0;
        self.frontier.push(si, 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = self.frontier.pop() {
            let ci = current.idx;
            // Skip stale entries: already finalized, or superseded by a
            // shorter distance pushed later.
            let node = self.node(ci);
            if node.visited || current.dist > node.dist {
                continue;
            }
            let cp = self.point(ci);
            if pather.blocked(cp) {
                continue;
            }
            let current_dist = node.dist;
            if current_dist == UNREACHABLE {
                break;
            }

            self.touch(ci).visited = true;
            self.visited.push(PathNode {
                pos: cp,
                cost: current_dist,
            });
            log::trace!("finalized {cp} at distance {current_dist}");

            if goal == Some(ci) {
                self.goal_reached = true;
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = self.touch(ni);
                if n.visited {
                    continue;
                }
                let tentative = current_dist.saturating_add(i64::from(pather.cost(cp, np)));
                if tentative >= n.dist {
                    continue;
                }
                n.dist = tentative;
                n.parent = ci;
                self.frontier.push(ni, tentative);
            }
        }

        self.nbuf = nbuf;
        log::debug!(
            "search {from} -> {to}: {} cells finalized, goal {}, {} frontier entries left",
            self.visited.len(),
            if self.goal_reached { "reached" } else { "not reached" },
            self.frontier.len(),
        );
        &self.visited
    }
}
