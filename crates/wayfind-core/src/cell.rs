//! The [`Cell`] type — one weighted grid position.

use crate::geom::Point;

/// What occupies a cell.
///
/// Start, goal and wall are mutually exclusive, so they are variants of one
/// enum rather than independent flags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Open,
    Wall,
    Start,
    Goal,
}

/// A grid position with its entry cost.
///
/// `pos` and `weight` are fixed at creation; only `kind` changes over the
/// lifetime of a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub(crate) pos: Point,
    pub(crate) kind: CellKind,
    pub(crate) weight: i32,
}

impl Cell {
    /// Position of the cell in its grid.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    /// Cost to enter this cell. Always > 0.
    #[inline]
    pub const fn weight(&self) -> i32 {
        self.weight
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.kind == CellKind::Start
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        self.kind == CellKind::Goal
    }

    /// Whether the cell is a wall.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.kind == CellKind::Wall
    }

    /// Whether the cell is the start or the goal.
    #[inline]
    pub fn is_endpoint(&self) -> bool {
        matches!(self.kind, CellKind::Start | CellKind::Goal)
    }
}
