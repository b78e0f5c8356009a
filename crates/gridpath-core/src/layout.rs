//! Text layouts: build a [`Grid`] from an ASCII picture and draw routes back.
//!
//! | Char | Cost |
//! |---|---|
//! | `#` | wall (`-1`) |
//! | `.` | `1` |
//! | `1`–`9` | that digit |
//!
//! Leading and trailing blank lines are ignored, every other line is one row.

use std::fmt;

use crate::cost::Cost;
use crate::geom::Point;
use crate::grid::Grid;

impl Grid {
    /// Parse a grid from a text layout.
    pub fn from_layout(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = s
            .trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
        }

        let mut grid = Grid::new(width as i32, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let cost = match ch {
                    '#' => Cost::WALL,
                    '.' => Cost::DEFAULT,
                    '1'..='9' => Cost(f64::from(ch as u8 - b'0')),
                    _ => return Err(LayoutError::InvalidChar { ch, pos }),
                };
                grid.set_cost(pos, cost);
            }
        }
        Ok(grid)
    }

    /// Draw the grid with a route overlaid: `S` at `start`, `G` at `goal`,
    /// `*` on route cells, `#` on walls and `.` elsewhere.
    pub fn render_route(&self, start: Point, goal: Point, route: &[Point]) -> String {
        let mut out = String::with_capacity(self.len() + self.height() as usize);
        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = Point::new(x, y);
                let ch = if p == start {
                    'S'
                } else if p == goal {
                    'G'
                } else if route.contains(&p) {
                    '*'
                } else if self.is_passable(p) {
                    '.'
                } else {
                    '#'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

/// Errors that can occur when parsing a text layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A row's width differs from the first row's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the layout alphabet was found.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(
                    f,
                    "layout contains invalid character \u{201c}{ch}\u{201d} at {pos}"
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
#####
#.3.#
#...#
#####
";

    #[test]
    fn parse_costs() {
        let g = Grid::from_layout(ROOM).unwrap();
        assert_eq!(g.size(), Point::new(5, 4));
        assert_eq!(g.cost(Point::new(0, 0)), -1.0);
        assert_eq!(g.cost(Point::new(1, 1)), 1.0);
        assert_eq!(g.cost(Point::new(2, 1)), 3.0);
        assert_eq!(g.count_passable(), 6);
    }

    #[test]
    fn inconsistent_width() {
        let err = Grid::from_layout("...\n..\n").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn invalid_char() {
        let err = Grid::from_layout("..\n.x\n").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn render_marks_route() {
        let g = Grid::from_layout("...\n.#.\n...").unwrap();
        let s = g.render_route(
            Point::new(0, 0),
            Point::new(2, 2),
            &[Point::new(2, 2), Point::new(2, 1), Point::new(2, 0), Point::new(1, 0)],
        );
        assert_eq!(s, "S**\n.#*\n..G\n");
    }
}
