//! Ship definitions, footprints and hit tracking.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::{BoardError, Coord};
use crate::square::Square;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along the column axis.
    #[default]
    Horizontal,
    /// Extends along the row axis.
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl FromStr for Orientation {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("horizontal") || s.eq_ignore_ascii_case("h") {
            Ok(Orientation::Horizontal)
        } else if s.eq_ignore_ascii_case("vertical") || s.eq_ignore_ascii_case("v") {
            Ok(Orientation::Vertical)
        } else {
            Err(BoardError::InvalidOrientation)
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Request to place a ship of some length and orientation somewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    name: &'static str,
    length: usize,
    orientation: Orientation,
}

impl ShipSpec {
    /// Create a spec, rejecting zero-length ships.
    pub fn new(
        name: &'static str,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        Ok(Self {
            name,
            length,
            orientation,
        })
    }

    /// Unchecked constructor for compile-time fleets.
    pub(crate) const fn preset(name: &'static str, length: usize, orientation: Orientation) -> Self {
        Self {
            name,
            length,
            orientation,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Same spec with a different orientation.
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }
}

/// Cells covered by a ship of `length` starting at `start`.
///
/// Horizontal ships extend along the column, vertical ones along the row.
/// Returns `None` only if the coordinates would overflow `usize`.
pub fn footprint(start: Coord, length: usize, orientation: Orientation) -> Option<Vec<Coord>> {
    let (row, col) = start;
    (0..length)
        .map(|i| match orientation {
            Orientation::Horizontal => col.checked_add(i).map(|c| (row, c)),
            Orientation::Vertical => row.checked_add(i).map(|r| (r, col)),
        })
        .collect()
}

fn check_footprint(
    coords: &[Coord],
    length: usize,
    orientation: Orientation,
) -> Result<(), BoardError> {
    let expected = coords
        .first()
        .and_then(|&start| footprint(start, length, orientation));
    match expected {
        Some(cells) if cells == coords => Ok(()),
        _ => Err(BoardError::FootprintMismatch),
    }
}

/// `true` if every ship in `fleet` is sunk.
///
/// An empty fleet counts as sunk, so callers using this as a win check must
/// make sure the fleet has ships.
pub fn all_sunk(fleet: &[Ship]) -> bool {
    fleet.iter().all(Ship::is_sunk)
}

/// A ship in a fleet, with the squares it covers once placed.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    name: String,
    length: usize,
    orientation: Orientation,
    squares: Vec<Square>,
    hit_count: usize,
}

impl Ship {
    /// An unplaced ship; its squares are assigned by the board on placement.
    pub fn new(name: &str, length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        Ok(Ship {
            name: name.to_string(),
            length,
            orientation,
            squares: Vec::new(),
            hit_count: 0,
        })
    }

    /// A ship whose squares are known up front, all unhit.
    ///
    /// The coordinates must be the ship's footprint from the first one.
    pub fn with_coordinates(
        name: &str,
        length: usize,
        orientation: Orientation,
        coords: &[Coord],
    ) -> Result<Self, BoardError> {
        let mut ship = Ship::new(name, length, orientation)?;
        if coords.len() != length {
            return Err(BoardError::CoordinateCountMismatch {
                expected: length,
                actual: coords.len(),
            });
        }
        check_footprint(coords, length, orientation)?;
        ship.squares = coords.iter().copied().map(Square::from).collect();
        Ok(ship)
    }

    /// Check the invariants a ship built outside the constructors must hold.
    #[cfg(feature = "std")]
    fn validate(&self) -> Result<(), BoardError> {
        if self.length == 0 {
            return Err(BoardError::InvalidLength);
        }
        if self.is_placed() {
            if self.squares.len() != self.length {
                return Err(BoardError::CoordinateCountMismatch {
                    expected: self.length,
                    actual: self.squares.len(),
                });
            }
            let cells: Vec<Coord> = self.cells().collect();
            check_footprint(&cells, self.length, self.orientation)?;
        }
        let hit_squares = self.squares.iter().filter(|s| s.is_hit()).count();
        if hit_squares != self.hit_count {
            return Err(BoardError::HitCountMismatch {
                expected: hit_squares,
                actual: self.hit_count,
            });
        }
        Ok(())
    }

    /// An unplaced ship built from a spec.
    pub fn from_spec(spec: &ShipSpec) -> Self {
        Ship {
            name: spec.name().to_string(),
            length: spec.length(),
            orientation: spec.orientation(),
            squares: Vec::new(),
            hit_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// `true` once squares have been assigned.
    pub fn is_placed(&self) -> bool {
        !self.squares.is_empty()
    }

    /// Iterator over the covered `(row, col)` cells.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.squares.iter().map(Square::coord)
    }

    /// `true` if one of the ship's squares sits at (`row`, `col`).
    pub fn occupies(&self, row: usize, col: usize) -> bool {
        self.cells().any(|c| c == (row, col))
    }

    pub(crate) fn assign_squares(&mut self, cells: &[Coord]) {
        self.squares = cells.iter().copied().map(Square::from).collect();
        self.hit_count = 0;
    }

    /// Register a hit at (`row`, `col`).
    ///
    /// Returns `false` without changing anything when no square matches or
    /// the matching square is already hit.
    pub fn hit(&mut self, row: usize, col: usize) -> bool {
        match self
            .squares
            .iter_mut()
            .find(|s| s.coord() == (row, col) && !s.is_hit())
        {
            Some(square) => {
                square.mark_hit();
                self.hit_count += 1;
                true
            }
            None => false,
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hit_count >= self.length
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, orientation: {:?}, hits: {}, cells: {:?} }}",
            self.name,
            self.length,
            self.orientation,
            self.hit_count,
            self.squares.iter().map(Square::coord).collect::<Vec<_>>(),
        )
    }
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawShip {
    name: String,
    length: usize,
    orientation: Orientation,
    squares: Vec<Square>,
    hit_count: usize,
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for Ship {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <RawShip as serde::Deserialize>::deserialize(deserializer)?;
        let ship = Ship {
            name: raw.name,
            length: raw.length,
            orientation: raw.orientation,
            squares: raw.squares,
            hit_count: raw.hit_count,
        };
        ship.validate().map_err(serde::de::Error::custom)?;
        Ok(ship)
    }
}
