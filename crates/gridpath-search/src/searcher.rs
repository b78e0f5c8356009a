//! The best-first search loop and its reusable workspace.

use gridpath_core::{Point, Range};

use crate::frontier::Frontier;
use crate::neighbors::{CARDINALS, DIAGONALS, diagonal_enabled};
use crate::node::Node;
use crate::options::SearchOptions;
use crate::path::Path;
use crate::traits::CostMap;

/// Reusable search workspace.
///
/// A `Searcher` owns one scratch [`Node`] per cell of the map it is used
/// with, plus the open and closed lists. Every search restores the records it
/// touched before returning, so one `Searcher` can serve any number of
/// sequential searches without reallocating. Searches that must run at the
/// same time each need their own `Searcher`; the map itself is only read.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    rng: Range,
    width: usize,
    nodes: Vec<Node>,
    open: Frontier,
    closed: Vec<usize>,
    expanded: usize,
}

impl Searcher {
    /// Create an empty workspace. The node table is sized on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace pre-sized for maps covering `rng`.
    pub fn with_range(rng: Range) -> Self {
        let mut s = Self::default();
        s.fit(rng);
        s
    }

    /// The range the node table currently covers.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Scratch records, row-major over [`range`](Self::range).
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes taken off the frontier by the last search.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Whether every scratch record is at its default and both lists are
    /// empty.
    pub fn is_clean(&self) -> bool {
        self.open.is_empty() && self.closed.is_empty() && self.nodes.iter().all(Node::is_clean)
    }

    /// Free the node table and list storage. The next search sizes them
    /// afresh.
    pub fn release(&mut self) {
        *self = Self::default();
    }

    /// Find a route from `start` to `goal`.
    ///
    /// Returns `None` if either endpoint is outside the map, the goal is
    /// impassable, or no route exists within `opts`. A start equal to the
    /// goal yields an empty path.
    pub fn find_path<M: CostMap>(
        &mut self,
        map: &M,
        start: Point,
        goal: Point,
        opts: SearchOptions,
    ) -> Option<Path> {
        self.fit(map.bounds());
        self.expanded = 0;

        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            log::trace!("search {start} -> {goal}: endpoint outside {}", self.rng);
            return None;
        };
        if !map.passable(goal) {
            log::trace!("search {start} -> {goal}: goal is impassable");
            return None;
        }

        self.nodes[start_idx].assign(None, start, goal, 0.0);
        self.open.push(start_idx, &self.nodes);

        let mut found = false;
        while let Some(ci) = self.open.pop() {
            self.closed.push(ci);
            if ci == goal_idx {
                found = true;
                break;
            }

            let cp = self.point(ci);
            for d in CARDINALS {
                if let Some(np) = cp.checked_shift(d.x, d.y) {
                    self.admit(map, ci, np, goal, opts, true);
                }
            }
            if opts.diagonal.allows_diagonals() {
                for d in DIAGONALS {
                    // flanking cells are representable whenever the target is
                    let Some(np) = cp.checked_shift(d.x, d.y) else {
                        continue;
                    };
                    let enabled = diagonal_enabled(map, opts.diagonal, cp, d);
                    self.admit(map, ci, np, goal, opts, enabled);
                }
            }
        }
        self.expanded = self.closed.len();

        let path = found.then(|| {
            let (rng, width) = (self.rng, self.width);
            Path::from_chain(&self.nodes, goal_idx, |i| point_in(rng, width, i))
        });
        self.reset();

        match &path {
            Some(p) => log::debug!(
                "search {start} -> {goal} ({}): {} steps, cost {}, {} expanded",
                opts.diagonal,
                p.len(),
                p.cost(),
                self.expanded
            ),
            None => log::debug!(
                "search {start} -> {goal} ({}): no route, {} expanded",
                opts.diagonal,
                self.expanded
            ),
        }
        path
    }

    /// Try to put the cell at `p` on the frontier as a successor of `from`.
    fn admit<M: CostMap>(
        &mut self,
        map: &M,
        from: usize,
        p: Point,
        goal: Point,
        opts: SearchOptions,
        enabled: bool,
    ) -> bool {
        if !enabled {
            return false;
        }
        let Some(ni) = self.idx(p) else {
            return false;
        };
        if self.nodes[ni].visited {
            return false;
        }
        let Some(cost) = map.cost_at(p).filter(|c| c.is_passable()) else {
            return false;
        };
        let pred = self.nodes[from];
        if !opts.can_extend(pred.steps) {
            return false;
        }
        self.nodes[ni].assign(Some((from, &pred)), p, goal, cost.value());
        self.open.push(ni, &self.nodes);
        true
    }

    /// Restore every record that reached the open or closed list.
    fn reset(&mut self) {
        for i in self.open.drain() {
            self.nodes[i].reset();
        }
        for i in self.closed.drain(..) {
            self.nodes[i].reset();
        }
        debug_assert!(self.nodes.iter().all(Node::is_clean));
    }

    /// Make the node table cover `rng`, reallocating only when it grows.
    fn fit(&mut self, rng: Range) {
        let len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if self.nodes.len() < len {
            self.nodes.resize(len, Node::default());
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        point_in(self.rng, self.width, idx)
    }
}

#[inline]
fn point_in(rng: Range, width: usize, idx: usize) -> Point {
    let x = (idx % width) as i32 + rng.min.x;
    let y = (idx / width) as i32 + rng.min.y;
    Point::new(x, y)
}

/// One-shot search with a fresh [`Searcher`].
///
/// Prefer keeping a `Searcher` around when searching repeatedly.
pub fn find_path<M: CostMap>(map: &M, start: Point, goal: Point, opts: SearchOptions) -> Option<Path> {
    Searcher::new().find_path(map, start, goal, opts)
}
