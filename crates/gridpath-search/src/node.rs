//! Per-cell search scratch.

use gridpath_core::Point;

use crate::distance::euclidean;

/// Scratch record attached to one grid cell for the duration of a search.
///
/// Outside a search every record equals [`Node::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Sum of entered cells' costs along the route that discovered this node.
    pub accumulated_cost: f64,
    /// Straight-line distance to the current goal.
    pub heuristic: f64,
    /// Cells traversed from the start.
    pub steps: u32,
    /// Set once the node has been placed on the frontier.
    pub visited: bool,
    /// Index of the node that discovered this one; `None` for the start and
    /// for untouched nodes.
    pub predecessor: Option<usize>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            accumulated_cost: 0.0,
            heuristic: 0.0,
            steps: 0,
            visited: false,
            predecessor: None,
        }
    }
}

impl Node {
    /// Priority key; lower is better.
    #[inline]
    pub fn priority(&self) -> f64 {
        self.accumulated_cost + self.heuristic
    }

    /// Whether the record is in its reset state.
    #[inline]
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }

    /// Price the node at `pos` for a search towards `goal`.
    ///
    /// With no predecessor the node becomes the search start: cost and
    /// step count are zero regardless of `step_cost`.
    pub fn assign(&mut self, pred: Option<(usize, &Node)>, pos: Point, goal: Point, step_cost: f64) {
        match pred {
            None => {
                self.accumulated_cost = 0.0;
                self.steps = 0;
                self.predecessor = None;
            }
            Some((idx, p)) => {
                self.accumulated_cost = p.accumulated_cost + step_cost;
                self.steps = p.steps + 1;
                self.predecessor = Some(idx);
            }
        }
        self.heuristic = euclidean(pos, goal);
        self.visited = true;
    }

    #[inline]
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
