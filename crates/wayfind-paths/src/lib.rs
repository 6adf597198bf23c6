//! Single-pair shortest-path search over weighted grids.
//!
//! This crate implements Dijkstra's algorithm on top of the grid model from
//! `wayfind-core`:
//!
//! - **Search** from a source until the goal is finalized
//!   ([`PathEngine::search`]), returning the visitation sequence in
//!   finalization order for step-by-step playback
//! - **Path reconstruction** by walking predecessor links back from the goal
//!   ([`PathEngine::reconstruct_path`])
//! - **Solve** a [`Grid`](wayfind_core::Grid) end to end
//!   ([`PathEngine::solve`])
//!
//! All search state lives in [`PathEngine`], which owns and reuses its
//! buffers so that repeated queries incur no allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration, blocked cells |
//! | [`WeightedPather`] : [`Pather`] | positive entry costs |

mod dijkstra;
mod engine;
mod frontier;
mod path;
mod solve;
mod traits;

#[cfg(test)]
mod proptests;

pub use engine::{PathEngine, PathNode, UNREACHABLE};
pub use solve::Solution;
pub use traits::{Pather, WeightedPather};
