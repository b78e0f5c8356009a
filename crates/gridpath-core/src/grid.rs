//! The [`Grid`] type: a fixed-size 2D grid of traversal [`Cost`]s.
//!
//! Bounds handling is permissive: reads outside the grid return a sentinel
//! (or `None`) and writes outside the grid are clipped or ignored. Nothing
//! here reports an error.

use crate::cost::Cost;
use crate::geom::{Point, Range};

/// Cost returned by [`Grid::cost`] for points outside the grid.
pub const OUT_OF_BOUNDS: f64 = -1.0;

/// A `width × height` grid of traversal costs.
///
/// Dimensions are fixed at construction; costs may be changed at any time
/// between searches.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Cost>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell at
    /// [`Cost::DEFAULT`]. Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Cost::DEFAULT)
    }

    /// Create a grid with every cell set to `cost`.
    pub fn filled(width: i32, height: i32, cost: Cost) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![cost; (w as usize) * (h as usize)],
            bounds: Range::new(0, 0, w, h),
        }
    }

    /// The bounding range `[0, 0) - (width, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width() as usize) + (p.x as usize))
    }

    /// Point at flat index `idx`. The index must be below [`len`](Self::len).
    #[inline]
    pub fn point_of(&self, idx: usize) -> Point {
        let w = self.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cost at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cost> {
        self.index_of(p).map(|i| self.cells[i])
    }

    /// The raw cost at `p`, or [`OUT_OF_BOUNDS`] (`-1.0`) if out of bounds.
    ///
    /// The sentinel is indistinguishable from a wall; use [`at`](Self::at)
    /// when the difference matters.
    #[inline]
    pub fn cost(&self, p: Point) -> f64 {
        self.at(p).map_or(OUT_OF_BOUNDS, Cost::value)
    }

    /// Whether `p` is in bounds and passable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cost::is_passable)
    }

    /// Set the cost at `p`. Returns `false` (and does nothing) if `p` is
    /// out of bounds.
    pub fn set_cost(&mut self, p: Point, cost: impl Into<Cost>) -> bool {
        match self.index_of(p) {
            Some(i) => {
                self.cells[i] = cost.into();
                true
            }
            None => false,
        }
    }

    /// Set every in-bounds cell of `rect` to `cost`.
    ///
    /// Returns `true` iff `rect` has positive width and height and overlaps
    /// the grid, i.e. iff at least one cell was written.
    pub fn set_rect(&mut self, rect: Range, cost: impl Into<Cost>) -> bool {
        let clip = self.bounds.intersect(rect);
        if clip.is_empty() {
            return false;
        }
        let cost = cost.into();
        let w = self.width() as usize;
        for y in clip.min.y..clip.max.y {
            let row = (y as usize) * w;
            self.cells[row + clip.min.x as usize..row + clip.max.x as usize].fill(cost);
        }
        true
    }

    /// Set every cell to `cost`.
    pub fn fill(&mut self, cost: impl Into<Cost>) {
        self.cells.fill(cost.into());
    }

    /// Set each cell to the value returned by `f`.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Cost) {
        for (i, p) in self.bounds.iter().enumerate() {
            self.cells[i] = f(p);
        }
    }

    /// Number of passable cells.
    pub fn count_passable(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passable()).count()
    }

    /// Row-major iterator over `(Point, Cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cost)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_and_fills_default() {
        let g = Grid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.len(), 12);
        assert!(g.iter().all(|(_, c)| c == Cost::DEFAULT));

        let empty = Grid::new(-3, 5);
        assert_eq!(empty.width(), 0);
        assert_eq!(empty.height(), 5);
        assert!(empty.is_empty());
        assert_eq!(empty.cost(Point::new(0, 0)), OUT_OF_BOUNDS);
    }

    #[test]
    fn get_and_set() {
        let mut g = Grid::new(4, 3);
        assert!(g.set_cost(Point::new(2, 1), 7.5));
        assert_eq!(g.cost(Point::new(2, 1)), 7.5);
        assert_eq!(g.at(Point::new(2, 1)), Some(Cost(7.5)));
        // out of bounds reads return the sentinel, writes are ignored
        assert_eq!(g.cost(Point::new(4, 0)), OUT_OF_BOUNDS);
        assert_eq!(g.cost(Point::new(0, -1)), OUT_OF_BOUNDS);
        assert_eq!(g.at(Point::new(10, 10)), None);
        assert!(!g.set_cost(Point::new(-1, 0), 3.0));
        assert!(g.iter().filter(|(_, c)| *c == Cost(3.0)).count() == 0);
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(5, 3);
        for p in g.bounds() {
            let i = g.index_of(p).unwrap();
            assert_eq!(g.point_of(i), p);
        }
        assert_eq!(g.index_of(Point::new(1, 2)), Some(11));
        assert_eq!(g.index_of(Point::new(5, 0)), None);
    }

    #[test]
    fn set_rect_clips_to_grid() {
        let mut g = Grid::new(5, 5);
        assert!(g.set_rect(Range::with_size(Point::new(-2, 3), 4, 10), Cost::WALL));
        let walls: Vec<_> = g
            .iter()
            .filter(|(_, c)| !c.is_passable())
            .map(|(p, _)| p)
            .collect();
        assert_eq!(
            walls,
            vec![
                Point::new(0, 3),
                Point::new(1, 3),
                Point::new(0, 4),
                Point::new(1, 4)
            ]
        );
        assert_eq!(g.count_passable(), 21);
    }

    #[test]
    fn set_rect_rejects_misses_and_degenerate() {
        let mut g = Grid::new(5, 5);
        assert!(!g.set_rect(Range::with_size(Point::new(5, 0), 2, 2), 0.0));
        assert!(!g.set_rect(Range::with_size(Point::new(-3, 0), 3, 2), 0.0));
        assert!(!g.set_rect(Range::with_size(Point::new(1, 1), 0, 2), 0.0));
        assert!(!g.set_rect(Range::with_size(Point::new(1, 1), 2, -1), 0.0));
        assert!(g.iter().all(|(_, c)| c == Cost::DEFAULT));
    }

    #[test]
    fn fill_and_fill_fn() {
        let mut g = Grid::new(3, 2);
        g.fill(2.0);
        assert!(g.iter().all(|(_, c)| c == Cost(2.0)));
        g.fill_fn(|p| if p.x == 1 { Cost::WALL } else { Cost(1.0) });
        assert_eq!(g.count_passable(), 4);
        assert!(!g.is_passable(Point::new(1, 0)));
        assert!(g.is_passable(Point::new(2, 1)));
    }
}
