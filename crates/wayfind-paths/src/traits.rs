use wayfind_core::{Grid, Point};

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `p` is impassable. Blocked positions may be discovered and
    /// queued but are never finalized.
    fn blocked(&self, _p: Point) -> bool {
        false
    }
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        Grid::neighbors(self, p, buf);
    }

    fn blocked(&self, p: Point) -> bool {
        self.is_blocked(p)
    }
}

impl WeightedPather for Grid {
    /// Entering a cell costs that cell's weight, wherever you come from.
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.weight(to).unwrap_or(i32::MAX)
    }
}
