use wayfind_core::{Grid, Point};

use crate::engine::{PathEngine, PathNode};

/// Everything a front end needs to play back one search on a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Cells in the order they were finalized.
    pub visited: Vec<PathNode>,
    /// Start → goal route, if the goal was reached.
    pub path: Option<Vec<Point>>,
    /// Total weight of the route (start excluded), if the goal was reached.
    pub cost: Option<i64>,
}

impl Solution {
    /// Whether a route to the goal exists.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of moves along the route.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

impl PathEngine {
    /// Search `grid` from its start to its goal and collect the result.
    ///
    /// The engine adopts the grid's bounds if they differ from its current
    /// range. Unlike [`reconstruct_path`](PathEngine::reconstruct_path),
    /// an unreachable goal is reported as `path: None`.
    pub fn solve(&mut self, grid: &Grid) -> Solution {
        if self.range() != grid.bounds() {
            self.set_range(grid.bounds());
        }
        let goal = grid.goal();
        let visited = self.search(grid, grid.start(), goal).to_vec();
        if !self.reached() {
            return Solution {
                visited,
                path: None,
                cost: None,
            };
        }
        Solution {
            visited,
            path: Some(self.reconstruct_path(goal)),
            cost: Some(self.distance_at(goal)),
        }
    }
}
