//! **gridpath-core**: core types for grid shortest-path search.
//!
//! This crate provides the foundational types used across the *gridpath*
//! workspace: geometry primitives, the [`Cost`] cell value and the [`Grid`]
//! of traversal costs, plus a small text-layout format for building grids.

pub mod cost;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cost::Cost;
pub use geom::{Point, Range};
pub use grid::{Grid, OUT_OF_BOUNDS};
pub use layout::LayoutError;
