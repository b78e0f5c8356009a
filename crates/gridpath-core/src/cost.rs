//! The [`Cost`] cell value.
//!
//! A cost is the additive price of entering a cell. Negative costs mark
//! impassable cells.

use std::fmt;

/// Traversal cost of a single grid cell, wrapping an `f64`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cost(pub f64);

impl Cost {
    /// Cost assigned to every cell of a freshly created grid.
    pub const DEFAULT: Self = Self(1.0);

    /// Canonical impassable value.
    pub const WALL: Self = Self(-1.0);

    /// Create a new cost.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The underlying value.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether a path may enter this cell (`cost >= 0`).
    ///
    /// `NaN` is never passable.
    #[inline]
    pub fn is_passable(self) -> bool {
        self.0 >= 0.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f64> for Cost {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<Cost> for f64 {
    fn from(c: Cost) -> Self {
        c.0
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cost_is_transparent_number() {
        let json = serde_json::to_string(&Cost(2.5)).unwrap();
        assert_eq!(json, "2.5");
        let back: Cost = serde_json::from_str("-1.0").unwrap();
        assert_eq!(back, Cost::WALL);
        let row = serde_json::to_string(&[Cost::DEFAULT, Cost(0.5)]).unwrap();
        assert_eq!(row, "[1.0,0.5]");
    }
}
