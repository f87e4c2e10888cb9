//! A single cell of a ship's body.

use core::fmt;

use crate::common::Coord;

/// Fixed position plus a hit flag that only ever goes from unhit to hit.
///
/// Two squares are equal when their coordinates are equal; the hit flag is
/// not part of a square's identity.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    x: usize,
    y: usize,
    hit: bool,
}

impl Square {
    /// Unhit square at row `x`, column `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y, hit: false }
    }

    /// Square with an explicit initial hit flag.
    pub fn with_hit(x: usize, y: usize, hit: bool) -> Self {
        Self { x, y, hit }
    }

    /// Row.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Column.
    pub fn y(&self) -> usize {
        self.y
    }

    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Mark the square hit. Calling it again changes nothing.
    pub fn mark_hit(&mut self) {
        self.hit = true;
    }
}

impl From<Coord> for Square {
    fn from((x, y): Coord) -> Self {
        Square::new(x, y)
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Square {}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}){}", self.x, self.y, if self.hit { " hit" } else { "" })
    }
}
