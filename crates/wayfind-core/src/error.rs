//! Errors returned by grid construction and mutation.

use thiserror::Error;

use crate::geom::Point;

/// Errors that can occur when building or editing a [`Grid`](crate::Grid).
///
/// Every failing call leaves the grid exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows or columns are not strictly positive.
    #[error("invalid grid dimensions: {rows} rows x {cols} cols")]
    InvalidDimensions { rows: i32, cols: i32 },
    /// A start or goal position is outside the grid or collides with the
    /// other endpoint.
    #[error("invalid endpoint position {0}")]
    InvalidPosition(Point),
    /// The position is outside the grid.
    #[error("position {0} is out of bounds")]
    OutOfBounds(Point),
    /// Start and goal cells can never become walls.
    #[error("cell {0} holds the start or goal and cannot be walled")]
    EndpointLocked(Point),
    /// A weight function produced a non-positive weight.
    #[error("weight {weight} at {pos} is not positive")]
    InvalidWeight { pos: Point, weight: i32 },
    /// A weight policy has a non-positive or inverted bound.
    #[error("invalid weight bounds {min}..={max}")]
    InvalidWeights { min: i32, max: i32 },
}
