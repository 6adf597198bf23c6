//! **wayfind-core** — the weighted grid model.
//!
//! This crate provides the structural side of the *wayfind* workspace:
//! geometry primitives, weighted cells, the [`Grid`] with its start and goal
//! endpoints, weight policies and grid configuration. It carries no search
//! state; see `wayfind-paths` for the shortest-path engine.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod weights;

pub use cell::{Cell, CellKind};
pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use weights::Weights;
