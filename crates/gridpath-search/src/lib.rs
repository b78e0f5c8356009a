//! Best-first shortest-path search on cost grids.
//!
//! The search is A*-style with a Euclidean heuristic, optional diagonal
//! movement (with or without corner cutting) and an optional cap on route
//! length. It runs through a [`Searcher`], which owns the per-cell scratch
//! and open list so that repeated queries against the same grid do not
//! allocate after warm-up and leave nothing behind.
//!
//! ```
//! use gridpath_core::{Grid, Point};
//! use gridpath_search::{DiagonalMode, SearchOptions, Searcher};
//!
//! let grid = Grid::new(5, 5);
//! let mut searcher = Searcher::new();
//! let opts = SearchOptions::new().with_diagonal(DiagonalMode::All);
//! let mut path = searcher
//!     .find_path(&grid, Point::new(0, 0), Point::new(4, 4), opts)
//!     .unwrap();
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.pop_front(), Some(Point::new(1, 1)));
//! ```
//!
//! A visited cell is never re-priced, so a cell keeps the cost of the route
//! that first reached it.

mod distance;
mod frontier;
mod neighbors;
mod node;
mod options;
mod path;
mod searcher;
mod traits;

pub use distance::{chebyshev, euclidean, manhattan};
pub use frontier::Frontier;
pub use neighbors::{CARDINALS, DIAGONALS, diagonal_enabled, flanking};
pub use node::Node;
pub use options::{DiagonalMode, SearchOptions};
pub use path::{NO_STEP, Path};
pub use searcher::{Searcher, find_path};
pub use traits::CostMap;
