//! Neighbour offsets and the diagonal gating rule.

use gridpath_core::Point;

use crate::options::DiagonalMode;
use crate::traits::CostMap;

/// Cardinal offsets in expansion order: right, down, left, up.
pub const CARDINALS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
];

/// Diagonal offsets in expansion order: up-left, up-right, down-left,
/// down-right.
pub const DIAGONALS: [Point; 4] = [
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

/// The two orthogonal cells a diagonal step from `from` along `dir` passes
/// between.
#[inline]
pub fn flanking(from: Point, dir: Point) -> [Point; 2] {
    [from.shift(dir.x, 0), from.shift(0, dir.y)]
}

/// Whether `mode` enables the diagonal step from `from` along `dir`.
///
/// Under [`DiagonalMode::NoCornerCutting`] both flanking cells must be in
/// bounds and passable; each diagonal is judged on its own pair.
pub fn diagonal_enabled<M: CostMap>(map: &M, mode: DiagonalMode, from: Point, dir: Point) -> bool {
    match mode {
        DiagonalMode::None => false,
        DiagonalMode::All => true,
        DiagonalMode::NoCornerCutting => flanking(from, dir).iter().all(|&p| map.passable(p)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::{Cost, Grid};

    #[test]
    fn flanking_pairs() {
        let p = Point::new(5, 5);
        assert_eq!(
            flanking(p, Point::new(-1, -1)),
            [Point::new(4, 5), Point::new(5, 4)]
        );
        assert_eq!(
            flanking(p, Point::new(1, 1)),
            [Point::new(6, 5), Point::new(5, 6)]
        );
    }

    #[test]
    fn each_diagonal_checks_its_own_corners() {
        // Wall directly above the centre blocks only the two upward
        // diagonals.
        let mut g = Grid::new(3, 3);
        g.set_cost(Point::new(1, 0), Cost::WALL);
        let c = Point::new(1, 1);
        let mode = DiagonalMode::NoCornerCutting;
        let enabled: Vec<bool> = DIAGONALS
            .iter()
            .map(|&d| diagonal_enabled(&g, mode, c, d))
            .collect();
        assert_eq!(enabled, vec![false, false, true, true]);
        assert!(DIAGONALS.iter().all(|&d| diagonal_enabled(&g, DiagonalMode::All, c, d)));
        assert!(!DIAGONALS.iter().any(|&d| diagonal_enabled(&g, DiagonalMode::None, c, d)));
    }

    #[test]
    fn out_of_bounds_corner_blocks() {
        let g = Grid::new(3, 3);
        let corner = Point::new(0, 0);
        assert!(!diagonal_enabled(
            &g,
            DiagonalMode::NoCornerCutting,
            corner,
            Point::new(-1, 1)
        ));
        assert!(diagonal_enabled(
            &g,
            DiagonalMode::NoCornerCutting,
            corner,
            Point::new(1, 1)
        ));
    }
}
