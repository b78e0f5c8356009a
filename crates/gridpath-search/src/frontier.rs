//! The open list.
//!
//! Node indices are kept sorted by **descending** priority so the cheapest
//! candidate sits at the tail and [`Frontier::pop`] is O(1). Insertion is a
//! binary search followed by a shift.

use crate::node::Node;

/// Sorted open list over indices into a node table.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    items: Vec<usize>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `idx`, keyed by `nodes[idx].priority()`.
    ///
    /// Among equal keys the new entry lands furthest from the tail, so the
    /// oldest of several equal candidates is popped first.
    pub fn push(&mut self, idx: usize, nodes: &[Node]) {
        let key = nodes[idx].priority();
        let at = self
            .items
            .partition_point(|&other| nodes[other].priority() > key);
        self.items.insert(at, idx);
        debug_assert!(self.is_sorted(nodes));
    }

    /// Remove and return the cheapest entry.
    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        self.items.pop()
    }

    /// The cheapest entry without removing it.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.items.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Entries from most to least expensive.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().copied()
    }

    /// Remove every entry, yielding them most expensive first.
    pub fn drain(&mut self) -> impl Iterator<Item = usize> + '_ {
        self.items.drain(..)
    }

    /// Whether keys are non-increasing from head to tail.
    pub fn is_sorted(&self, nodes: &[Node]) -> bool {
        self.items
            .windows(2)
            .all(|w| nodes[w[0]].priority() >= nodes[w[1]].priority())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(keys: &[f64]) -> Vec<Node> {
        keys.iter()
            .map(|&k| Node {
                accumulated_cost: k,
                ..Node::default()
            })
            .collect()
    }

    #[test]
    fn pops_cheapest_first() {
        let nodes = table(&[5.0, 1.0, 3.0, 4.0, 2.0]);
        let mut f = Frontier::new();
        for i in 0..nodes.len() {
            f.push(i, &nodes);
        }
        assert_eq!(f.len(), 5);
        assert_eq!(f.peek(), Some(1));
        let order: Vec<usize> = std::iter::from_fn(|| f.pop()).collect();
        assert_eq!(order, vec![1, 4, 2, 3, 0]);
        assert!(f.is_empty());
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn stored_descending() {
        let nodes = table(&[2.0, 7.0, 0.5, 7.0, 3.0]);
        let mut f = Frontier::new();
        for i in 0..nodes.len() {
            f.push(i, &nodes);
        }
        assert!(f.is_sorted(&nodes));
        let keys: Vec<f64> = f.iter().map(|i| nodes[i].priority()).collect();
        assert_eq!(keys, vec![7.0, 7.0, 3.0, 2.0, 0.5]);
    }

    #[test]
    fn equal_keys_pop_oldest_first() {
        let nodes = table(&[1.0, 1.0, 1.0]);
        let mut f = Frontier::new();
        for i in 0..3 {
            f.push(i, &nodes);
        }
        assert_eq!(f.pop(), Some(0));
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), Some(2));
    }

    #[test]
    fn heuristic_counts_toward_key() {
        let mut nodes = table(&[1.0, 2.0]);
        nodes[0].heuristic = 5.0;
        let mut f = Frontier::new();
        f.push(0, &nodes);
        f.push(1, &nodes);
        assert_eq!(f.pop(), Some(1));
    }

    #[test]
    fn drain_empties() {
        let nodes = table(&[1.0, 2.0]);
        let mut f = Frontier::new();
        f.push(0, &nodes);
        f.push(1, &nodes);
        let drained: Vec<usize> = f.drain().collect();
        assert_eq!(drained, vec![1, 0]);
        assert!(f.is_empty());
    }
}
