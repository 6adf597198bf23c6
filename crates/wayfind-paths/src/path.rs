use wayfind_core::Point;

use crate::engine::{NO_PARENT, PathEngine};

impl PathEngine {
    /// Walk predecessor links from `goal` back to the source of the last
    /// search and return the cells in source → goal order.
    ///
    /// A goal without a predecessor (the source itself, a cell the search
    /// never reached, or a point outside the range) yields `[goal]`, so a
    /// one-element result does not by itself mean "no path". Check
    /// [`reached`](PathEngine::reached) or the visitation sequence for that.
    pub fn reconstruct_path(&self, goal: Point) -> Vec<Point> {
        let mut path = vec![goal];
        let Some(mut ci) = self.idx(goal) else {
            return path;
        };
        loop {
            let parent = self.node(ci).parent;
            if parent == NO_PARENT {
                break;
            }
            path.push(self.point(parent));
            ci = parent;
        }
        path.reverse();
        path
    }
}
