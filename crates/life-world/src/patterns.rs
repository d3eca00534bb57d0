//! Named seed patterns.

use life_core::{Error, Result};

/// A seed pattern as live cells relative to its top-left corner, as (x, y)
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "blinker",
        cells: &[(1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Look up a pattern by name, ignoring case
pub fn find(name: &str) -> Result<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownPattern(name.to_string()))
}

impl Pattern {
    /// Absolute coordinates of the pattern placed at (`x`, `y`) on a grid of
    /// the given size. Placements that do not fit are rejected, not wrapped.
    pub fn place(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<Vec<(usize, usize)>> {
        self.cells
            .iter()
            .map(|&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(px), Some(py)) if px < width && py < height => Ok((px, py)),
                _ => Err(Error::InvalidCoordinate {
                    x: x.saturating_add(dx),
                    y: y.saturating_add(dy),
                    width,
                    height,
                }),
            })
            .collect()
    }
}
