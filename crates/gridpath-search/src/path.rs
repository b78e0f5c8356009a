//! The [`Path`] returned by a successful search.

use gridpath_core::Point;

use crate::node::Node;

/// Sentinel coordinate returned by the `*_x`/`*_y` accessors when there is
/// no such step.
pub const NO_STEP: i32 = -1;

/// A route from just after the start to the goal.
///
/// Steps are stored goal-first so that taking the next step is a pop from
/// the end of the vector. The start cell is not part of the path; an empty
/// path means the start already was the goal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    steps: Vec<Point>,
    cost: f64,
}

impl Path {
    /// Walk predecessor links from `goal` and collect every node that has a
    /// predecessor, stopping at the start.
    pub fn from_chain(nodes: &[Node], goal: usize, point_of: impl Fn(usize) -> Point) -> Self {
        let mut steps = Vec::with_capacity(nodes[goal].steps as usize);
        let mut ci = goal;
        while let Some(prev) = nodes[ci].predecessor {
            steps.push(point_of(ci));
            ci = prev;
        }
        Self {
            steps,
            cost: nodes[goal].accumulated_cost,
        }
    }

    /// Number of remaining steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total cost of the route as found (not reduced by [`pop_front`](Self::pop_front)).
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The last step, if any remain.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.steps.first().copied()
    }

    /// The next step to take (the one nearest the start).
    #[inline]
    pub fn front(&self) -> Option<Point> {
        self.steps.last().copied()
    }

    /// X of [`front`](Self::front), or [`NO_STEP`].
    pub fn front_x(&self) -> i32 {
        self.front().map_or(NO_STEP, |p| p.x)
    }

    /// Y of [`front`](Self::front), or [`NO_STEP`].
    pub fn front_y(&self) -> i32 {
        self.front().map_or(NO_STEP, |p| p.y)
    }

    /// The step at `index`, counted from the front (`0` = next step).
    pub fn at(&self, index: usize) -> Option<Point> {
        let n = self.steps.len();
        if index >= n {
            return None;
        }
        Some(self.steps[n - 1 - index])
    }

    /// X of [`at`](Self::at), or [`NO_STEP`].
    pub fn x_at(&self, index: usize) -> i32 {
        self.at(index).map_or(NO_STEP, |p| p.x)
    }

    /// Y of [`at`](Self::at), or [`NO_STEP`].
    pub fn y_at(&self, index: usize) -> i32 {
        self.at(index).map_or(NO_STEP, |p| p.y)
    }

    /// Consume the next step. Does nothing on an empty path.
    #[inline]
    pub fn pop_front(&mut self) -> Option<Point> {
        self.steps.pop()
    }

    /// Remaining steps in travel order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Point> + ExactSizeIterator + '_ {
        self.steps.iter().rev().copied()
    }

    /// Remaining steps in travel order, collected.
    pub fn to_vec(&self) -> Vec<Point> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A hand-built chain 0 -> 1 -> 2 -> 3 along row 0.
    fn chain() -> Vec<Node> {
        let goal = Point::new(3, 0);
        let mut nodes = vec![Node::default(); 4];
        nodes[0].assign(None, Point::new(0, 0), goal, 0.0);
        for i in 1..4 {
            let prev = nodes[i - 1];
            nodes[i].assign(Some((i - 1, &prev)), Point::new(i as i32, 0), goal, 2.0);
        }
        nodes
    }

    fn row(i: usize) -> Point {
        Point::new(i as i32, 0)
    }

    #[test]
    fn excludes_start_and_orders_front_first() {
        let path = Path::from_chain(&chain(), 3, row);
        assert_eq!(path.len(), 3);
        assert_eq!(path.cost(), 6.0);
        assert_eq!(path.front(), Some(Point::new(1, 0)));
        assert_eq!(path.goal(), Some(Point::new(3, 0)));
        assert_eq!(
            path.to_vec(),
            vec![Point::new(1, 0), Point::new(2, 0), Point::new(3, 0)]
        );
    }

    #[test]
    fn indexed_access() {
        let path = Path::from_chain(&chain(), 3, row);
        assert_eq!(path.at(0), Some(Point::new(1, 0)));
        assert_eq!(path.at(2), Some(Point::new(3, 0)));
        assert_eq!(path.at(3), None);
        assert_eq!(path.x_at(1), 2);
        assert_eq!(path.y_at(1), 0);
        assert_eq!(path.x_at(9), NO_STEP);
        assert_eq!(path.y_at(9), NO_STEP);
    }

    #[test]
    fn pop_front_drains_then_noops() {
        let mut path = Path::from_chain(&chain(), 3, row);
        let n = path.len();
        for i in 0..n {
            assert_eq!(path.pop_front(), Some(Point::new(i as i32 + 1, 0)));
        }
        assert!(path.is_empty());
        assert_eq!(path.pop_front(), None);
        assert_eq!(path.pop_front(), None);
        assert_eq!(path.front(), None);
        assert_eq!(path.front_x(), NO_STEP);
        assert_eq!(path.front_y(), NO_STEP);
        assert_eq!(path.len(), 0);
    }

    #[test]
    fn start_as_goal_is_empty() {
        let path = Path::from_chain(&chain(), 0, row);
        assert!(path.is_empty());
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.goal(), None);
    }
}
