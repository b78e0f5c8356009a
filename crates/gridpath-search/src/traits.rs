use gridpath_core::{Cost, Grid, Point, Range};

/// Read-only source of traversal costs for a search.
pub trait CostMap {
    /// The rectangle of points that have a cost.
    fn bounds(&self) -> Range;

    /// Cost of entering `p`, or `None` if `p` is outside [`bounds`](Self::bounds).
    fn cost_at(&self, p: Point) -> Option<Cost>;

    /// Whether `p` is in bounds and may be entered.
    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.cost_at(p).is_some_and(Cost::is_passable)
    }
}

impl CostMap for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn cost_at(&self, p: Point) -> Option<Cost> {
        self.at(p)
    }
}
