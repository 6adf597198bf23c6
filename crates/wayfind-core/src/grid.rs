//! The [`Grid`] type — a fixed-size rectangle of weighted [`Cell`]s.
//!
//! A grid owns all its cells and tracks the start and goal positions
//! explicitly. It holds no search state: distances, visited flags and
//! predecessor links belong to whichever engine is searching it.

use rand::Rng;

use crate::cell::{Cell, CellKind};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A 2D grid of weighted cells with exactly one start and one goal.
///
/// Invariants upheld by every method:
/// - the cell stored at flat index `i` has `pos == bounds.point(i)`;
/// - exactly one cell is [`CellKind::Start`] (at [`start`](Grid::start))
///   and exactly one is [`CellKind::Goal`] (at [`goal`](Grid::goal));
/// - start and goal never coincide and are never walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Build a `rows` × `cols` grid with the given endpoints.
    ///
    /// `weight` is called once per cell, in row-major order, and must return
    /// a positive entry cost. Every cell other than the endpoints is open.
    pub fn new<F>(
        rows: i32,
        cols: i32,
        start: Point,
        goal: Point,
        mut weight: F,
    ) -> Result<Self, GridError>
    where
        F: FnMut(Point) -> i32,
    {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let bounds = Range::grid(rows, cols);
        for p in [start, goal] {
            if !bounds.contains(p) {
                return Err(GridError::InvalidPosition(p));
            }
        }
        if start == goal {
            return Err(GridError::InvalidPosition(goal));
        }

        let mut cells = Vec::with_capacity(bounds.len());
        for pos in bounds.iter() {
            let w = weight(pos);
            if w <= 0 {
                return Err(GridError::InvalidWeight { pos, weight: w });
            }
            let kind = if pos == start {
                CellKind::Start
            } else if pos == goal {
                CellKind::Goal
            } else {
                CellKind::Open
            };
            cells.push(Cell {
                pos,
                kind,
                weight: w,
            });
        }

        Ok(Self {
            cells,
            bounds,
            start,
            goal,
        })
    }

    /// Build a grid from a [`GridConfig`], drawing weights from `rng`.
    pub fn from_config(cfg: &GridConfig, rng: &mut impl Rng) -> Result<Self, GridError> {
        cfg.weights.validate()?;
        let weights = cfg.weights;
        Self::new(cfg.rows, cfg.cols, cfg.start, cfg.goal, |_| {
            weights.sample(&mut *rng)
        })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// The rectangle covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.bounds.index(p).map(|i| &self.cells[i])
    }

    /// Entry cost of the cell at `p`.
    #[inline]
    pub fn weight(&self, p: Point) -> Option<i32> {
        self.at(p).map(Cell::weight)
    }

    /// Whether `p` is a wall. Positions outside the grid are not walls,
    /// they simply do not exist.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_blocked)
    }

    /// Append the in-bounds cardinal neighbours of `p` to `buf`, in
    /// up, down, left, right order. Walls are included.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.cardinal().into_iter().filter(|&n| self.contains(n)));
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Positions of every wall, row-major.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().filter(|c| c.is_blocked()).map(Cell::pos)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Flip the wall state of the cell at `p`, returning whether it is now a
    /// wall.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, GridError> {
        let i = self.wall_target(p)?;
        let blocked = !self.cells[i].is_blocked();
        self.set_wall(p, blocked)?;
        Ok(blocked)
    }

    /// Make the cell at `p` a wall (`true`) or open it (`false`).
    ///
    /// Setting a cell to the state it already has is not an error.
    pub fn set_wall(&mut self, p: Point, blocked: bool) -> Result<(), GridError> {
        let i = self.wall_target(p)?;
        self.cells[i].kind = if blocked {
            CellKind::Wall
        } else {
            CellKind::Open
        };
        Ok(())
    }

    /// Move the start to `p`.
    ///
    /// The old start becomes open. Moving onto a wall replaces it; moving
    /// onto the goal fails with [`GridError::InvalidPosition`].
    pub fn move_start(&mut self, p: Point) -> Result<(), GridError> {
        self.move_endpoint(p, CellKind::Start)
    }

    /// Move the goal to `p`. Same rules as [`move_start`](Grid::move_start).
    pub fn move_goal(&mut self, p: Point) -> Result<(), GridError> {
        self.move_endpoint(p, CellKind::Goal)
    }

    /// Open every wall. Weights and endpoints are kept.
    pub fn clear_walls(&mut self) {
        for c in self.cells.iter_mut().filter(|c| c.is_blocked()) {
            c.kind = CellKind::Open;
        }
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Flat index of `p`, or [`GridError::OutOfBounds`].
    #[inline]
    fn index_of(&self, p: Point) -> Result<usize, GridError> {
        self.bounds.index(p).ok_or(GridError::OutOfBounds(p))
    }

    /// Flat index of a cell whose wall state may change.
    fn wall_target(&self, p: Point) -> Result<usize, GridError> {
        let i = self.index_of(p)?;
        if self.cells[i].is_endpoint() {
            log::debug!("refusing to wall endpoint {p}");
            return Err(GridError::EndpointLocked(p));
        }
        Ok(i)
    }

    fn move_endpoint(&mut self, p: Point, kind: CellKind) -> Result<(), GridError> {
        let new = self.index_of(p)?;
        let (current, other) = match kind {
            CellKind::Start => (self.start, self.goal),
            _ => (self.goal, self.start),
        };
        if p == other {
            log::debug!("refusing to move {kind:?} onto the other endpoint at {p}");
            return Err(GridError::InvalidPosition(p));
        }
        if p == current {
            return Ok(());
        }

        let old = self.index_of(current)?;
        self.cells[old].kind = CellKind::Open;
        self.cells[new].kind = kind;
        match kind {
            CellKind::Start => self.start = p,
            _ => self.goal = p,
        }
        Ok(())
    }
}
