use wayfind_core::{Point, Range};

use crate::frontier::Frontier;

/// A finalized cell and its shortest distance from the search source.
///
/// The visitation sequence returned by [`PathEngine::search`] is a list of
/// these, in the order cells were finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i64,
}

/// Sentinel distance meaning "not reached".
///
/// Distances are `i64` so that summing any number of positive `i32`
/// weights over a grid never reaches the sentinel.
pub const UNREACHABLE: i64 = i64::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-search state table
// ---------------------------------------------------------------------------

/// Search-scoped state of one cell. Entries whose generation differs from
/// the engine's current one are treated as fresh.
#[derive(Clone, Copy)]
pub(crate) struct Node {
    pub(crate) dist: i64,
    pub(crate) parent: usize,
    pub(crate) visited: bool,
    pub(crate) generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            dist: UNREACHABLE,
            parent: NO_PARENT,
            visited: false,
            generation: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// PathEngine
// ---------------------------------------------------------------------------

/// Single-pair shortest-path engine over a grid rectangle.
///
/// `PathEngine` owns the per-search state table (distance, visited flag and
/// predecessor for every cell) together with the frontier and the
/// visitation buffer, so repeated searches allocate nothing after warm-up.
/// Each call to [`search`](PathEngine::search) starts from a clean table;
/// the grid being searched never carries search state.
pub struct PathEngine {
    pub(crate) rng: Range,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) frontier: Frontier,
    pub(crate) visited: Vec<PathNode>,
    pub(crate) goal_reached: bool,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathEngine {
    /// Create a new engine for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            frontier: Frontier::default(),
            visited: Vec::new(),
            goal_reached: false,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range.
    ///
    /// If the new size fits within the existing table it is kept and only
    /// the generation is bumped; otherwise the table is reallocated. Results
    /// of the previous search are discarded either way.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.visited.clear();
        self.goal_reached = false;

        if new_len <= self.nodes.len() {
            self.bump_generation();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Results of the last search
    // -----------------------------------------------------------------------

    /// The visitation sequence of the last search.
    #[inline]
    pub fn visited(&self) -> &[PathNode] {
        &self.visited
    }

    /// Whether the last search finalized its goal.
    #[inline]
    pub fn reached(&self) -> bool {
        self.goal_reached
    }

    /// Tentative (or final, once visited) distance of `p` in the last search.
    ///
    /// Returns [`UNREACHABLE`] outside the range or if `p` was never reached.
    pub fn distance_at(&self, p: Point) -> i64 {
        self.idx(p).map_or(UNREACHABLE, |i| self.node(i).dist)
    }

    /// Whether `p` was finalized by the last search.
    pub fn visited_at(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.node(i).visited)
    }

    // -----------------------------------------------------------------------
    // State table helpers
    // -----------------------------------------------------------------------

    /// Invalidate every entry of the state table in O(1).
    pub(crate) fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: entries tagged 0 would look current again.
            self.nodes.fill(Node::default());
            self.generation = 1;
        }
    }

    /// State of node `i` in the current generation.
    #[inline]
    pub(crate) fn node(&self, i: usize) -> Node {
        let n = self.nodes[i];
        if n.generation == self.generation {
            n
        } else {
            Node::default()
        }
    }

    /// Mutable state of node `i`, reset first if it belongs to an older
    /// generation.
    #[inline]
    pub(crate) fn touch(&mut self, i: usize) -> &mut Node {
        let generation = self.generation;
        let n = &mut self.nodes[i];
        if n.generation != generation {
            *n = Node {
                generation,
                ..Node::default()
            };
        }
        n
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


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::at(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
