//! Search configuration: [`DiagonalMode`] and [`SearchOptions`].

use std::fmt;

/// Whether, and how, a search may move diagonally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DiagonalMode {
    /// Cardinal moves only (4-connected).
    #[default]
    None,
    /// All eight neighbours are reachable.
    All,
    /// Diagonal moves are allowed only when both orthogonal cells flanking
    /// the move are passable.
    NoCornerCutting,
}

impl DiagonalMode {
    /// Map the host's numeric selector: `1` → [`All`](Self::All),
    /// `2` → [`NoCornerCutting`](Self::NoCornerCutting), anything else →
    /// [`None`](Self::None).
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::All,
            2 => Self::NoCornerCutting,
            _ => Self::None,
        }
    }

    /// Numeric selector understood by [`from_code`](Self::from_code).
    pub fn code(self) -> i32 {
        match self {
            Self::None => 0,
            Self::All => 1,
            Self::NoCornerCutting => 2,
        }
    }

    /// Whether diagonal neighbours are considered at all.
    #[inline]
    pub fn allows_diagonals(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for DiagonalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::All => "all",
            Self::NoCornerCutting => "no-corner-cutting",
        })
    }
}

/// Per-search movement options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    pub diagonal: DiagonalMode,
    /// Longest admissible route in steps; `None` is unbounded.
    pub max_steps: Option<u32>,
}

impl SearchOptions {
    /// Cardinal moves, unbounded length.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagonal(mut self, diagonal: DiagonalMode) -> Self {
        self.diagonal = diagonal;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Build options from the host's signed length cap, where any negative
    /// value means unbounded.
    pub fn with_max_len(mut self, max_len: i32) -> Self {
        self.max_steps = u32::try_from(max_len).ok();
        self
    }

    /// Whether a node already `steps` away from the start may admit
    /// another step.
    #[inline]
    pub fn can_extend(&self, steps: u32) -> bool {
        self.max_steps.is_none_or(|k| steps < k)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn options_from_json() {
        let opts: SearchOptions =
            serde_json::from_str(r#"{"diagonal":"no_corner_cutting","max_steps":12}"#).unwrap();
        assert_eq!(
            opts,
            SearchOptions::new()
                .with_diagonal(DiagonalMode::NoCornerCutting)
                .with_max_steps(12)
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let opts: SearchOptions = serde_json::from_str(r#"{"diagonal":"all"}"#).unwrap();
        assert_eq!(opts.diagonal, DiagonalMode::All);
        assert_eq!(opts.max_steps, None);
        let opts: SearchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, SearchOptions::default());
    }

    #[test]
    fn options_round_trip() {
        let opts = SearchOptions::new().with_diagonal(DiagonalMode::All);
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"{"diagonal":"all","max_steps":null}"#);
        let back: SearchOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opts);
    }
}
