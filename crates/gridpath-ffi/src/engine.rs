//! The host-facing engine: grids and paths behind numeric handles.
//!
//! Every entry point takes and returns `f64`, the only numeric type the
//! host passes. Bad input never fails loudly: an absent or stale handle,
//! or an out-of-range coordinate, produces the documented sentinel.

use gridpath_core::{Grid, Point, Range};
use gridpath_search::{DiagonalMode, Path, SearchOptions, Searcher};

use crate::registry::{Handle, HandleTable, NULL_HANDLE};

const FALSE: f64 = 0.0;
const TRUE: f64 = 1.0;
const MISSING: f64 = -1.0;

/// Convert a host coordinate or index. Negative fractions stay negative
/// and `NaN` maps out of range.
#[inline]
fn coord(v: f64) -> i32 {
    if v.is_nan() { i32::MIN } else { v.floor() as i32 }
}

/// Convert a host extent, selector or length (truncates toward zero).
#[inline]
fn int(v: f64) -> i32 {
    v as i32
}

/// Clip the host rectangle `(x, y, w, h)` to a `width × height` grid.
///
/// Clipping happens on the `f64` values, so a rectangle far larger than
/// `i32` still covers the grid.
fn clip_rect(x: f64, y: f64, w: f64, h: f64, width: i32, height: i32) -> Option<Range> {
    let (x0, y0) = (x.floor(), y.floor());
    let (x1, y1) = (x0 + w.trunc(), y0 + h.trunc());
    if [x0, y0, x1, y1].iter().any(|v| v.is_nan()) {
        return None;
    }
    let (x0, y0) = (x0.max(0.0), y0.max(0.0));
    let (x1, y1) = (x1.min(f64::from(width)), y1.min(f64::from(height)));
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some(Range::new(x0 as i32, y0 as i32, x1 as i32, y1 as i32))
}

#[inline]
fn flag(b: bool) -> f64 {
    if b { TRUE } else { FALSE }
}

/// Owner of every grid and path the host has created, plus the shared
/// search workspace.
#[derive(Debug, Default)]
pub struct Engine {
    grids: HandleTable<Grid>,
    paths: HandleTable<Path>,
    searcher: Searcher,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live grid behind `g`.
    pub fn grid(&self, g: f64) -> Option<&Grid> {
        let grid = self.grids.resolve(g);
        if grid.is_none() {
            log::debug!("grid handle {g} does not name a live grid");
        }
        grid
    }

    fn grid_mut(&mut self, g: f64) -> Option<&mut Grid> {
        let grid = self.grids.resolve_mut(g);
        if grid.is_none() {
            log::debug!("grid handle {g} does not name a live grid");
        }
        grid
    }

    /// Live path behind `p`.
    pub fn path(&self, p: f64) -> Option<&Path> {
        let path = self.paths.resolve(p);
        if path.is_none() {
            log::debug!("path handle {p} does not name a live path");
        }
        path
    }

    fn path_mut(&mut self, p: f64) -> Option<&mut Path> {
        let path = self.paths.resolve_mut(p);
        if path.is_none() {
            log::debug!("path handle {p} does not name a live path");
        }
        path
    }

    /// Number of live grids.
    pub fn grid_count(&self) -> usize {
        self.grids.len()
    }

    /// Number of live paths.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    // -----------------------------------------------------------------------
    // Grids
    // -----------------------------------------------------------------------

    /// Create a `w × h` grid with every cell at cost `1`.
    pub fn make_grid(&mut self, w: f64, h: f64) -> f64 {
        let grid = Grid::new(int(w), int(h));
        log::debug!("created {}x{} grid", grid.width(), grid.height());
        self.grids.insert(grid).to_f64()
    }

    /// Destroy a grid. Paths built on it stay valid.
    ///
    /// Destroying the last live grid also frees the search scratch.
    pub fn destroy_grid(&mut self, g: f64) {
        if let Some(h) = decode(g) {
            if self.grids.remove(h).is_some() && self.grids.is_empty() {
                self.searcher.release();
            }
        }
    }

    /// Width, or `0` if `g` is absent.
    pub fn grid_width(&self, g: f64) -> f64 {
        self.grid(g).map_or(0.0, |grid| f64::from(grid.width()))
    }

    /// Height, or `0` if `g` is absent.
    pub fn grid_height(&self, g: f64) -> f64 {
        self.grid(g).map_or(0.0, |grid| f64::from(grid.height()))
    }

    /// Cost at `(x, y)`, or `-1` if `g` is absent or the cell is out of
    /// bounds.
    pub fn grid_value(&self, g: f64, x: f64, y: f64) -> f64 {
        self.grid(g)
            .map_or(MISSING, |grid| grid.cost(Point::new(coord(x), coord(y))))
    }

    /// Set the cost at `(x, y)`. `1` on success, `0` if `g` is absent or
    /// the cell is out of bounds.
    pub fn set_grid_value(&mut self, g: f64, x: f64, y: f64, value: f64) -> f64 {
        self.grid_mut(g).map_or(FALSE, |grid| {
            flag(grid.set_cost(Point::new(coord(x), coord(y)), value))
        })
    }

    /// Set every in-bounds cell of the `w × h` rectangle at `(x, y)`. `1` if
    /// any cell was written.
    pub fn set_grid_rect(&mut self, g: f64, x: f64, y: f64, w: f64, h: f64, value: f64) -> f64 {
        let Some(grid) = self.grid_mut(g) else {
            return FALSE;
        };
        match clip_rect(x, y, w, h, grid.width(), grid.height()) {
            Some(rect) => flag(grid.set_rect(rect, value)),
            None => FALSE,
        }
    }

    // -----------------------------------------------------------------------
    // Paths
    // -----------------------------------------------------------------------

    /// Search `g` from `(xs, ys)` to `(xg, yg)`.
    ///
    /// `diag` selects the [`DiagonalMode`] (0 none, 1 all, 2 no corner
    /// cutting); a negative `max_len` is unbounded. Returns a path handle,
    /// or `0` if `g` is absent or no route exists.
    ///
    /// Coordinates are floored, not truncated: `-0.5` is column `-1` and
    /// therefore outside the grid.
    #[allow(clippy::too_many_arguments)]
    pub fn make_path(
        &mut self,
        g: f64,
        xs: f64,
        ys: f64,
        xg: f64,
        yg: f64,
        diag: f64,
        max_len: f64,
    ) -> f64 {
        let Some(grid) = self.grids.resolve(g) else {
            log::debug!("grid handle {g} does not name a live grid");
            return NULL_HANDLE;
        };
        let opts = SearchOptions::new()
            .with_diagonal(DiagonalMode::from_code(int(diag)))
            .with_max_len(int(max_len));
        let start = Point::new(coord(xs), coord(ys));
        let goal = Point::new(coord(xg), coord(yg));
        match self.searcher.find_path(grid, start, goal, opts) {
            Some(path) => self.paths.insert(path).to_f64(),
            None => NULL_HANDLE,
        }
    }

    /// Remaining steps, or `0` if `p` is absent.
    pub fn path_length(&self, p: f64) -> f64 {
        self.path(p).map_or(0.0, |path| path.len() as f64)
    }

    /// X of the next step, or `-1`.
    pub fn path_front_x(&self, p: f64) -> f64 {
        self.path(p).map_or(MISSING, |path| f64::from(path.front_x()))
    }

    /// Y of the next step, or `-1`.
    pub fn path_front_y(&self, p: f64) -> f64 {
        self.path(p).map_or(MISSING, |path| f64::from(path.front_y()))
    }

    /// X of the step `index` places from the front, or `-1`.
    pub fn path_x(&self, p: f64, index: f64) -> f64 {
        self.path_step(p, index).map_or(MISSING, |s| f64::from(s.x))
    }

    /// Y of the step `index` places from the front, or `-1`.
    pub fn path_y(&self, p: f64, index: f64) -> f64 {
        self.path_step(p, index).map_or(MISSING, |s| f64::from(s.y))
    }

    fn path_step(&self, p: f64, index: f64) -> Option<Point> {
        let index = usize::try_from(coord(index)).ok()?;
        self.path(p)?.at(index)
    }

    /// Consume the next step. No-op if `p` is absent or empty.
    pub fn path_pop(&mut self, p: f64) {
        if let Some(path) = self.path_mut(p) {
            path.pop_front();
        }
    }

    /// Destroy a path. Destroying twice is a no-op.
    pub fn destroy_path(&mut self, p: f64) {
        if let Some(h) = decode(p) {
            self.paths.remove(h);
        }
    }
}

fn decode(v: f64) -> Option<Handle> {
    let h = Handle::from_f64(v);
    if h.is_none() {
        log::debug!("ignoring malformed handle {v}");
    }
    h
}
