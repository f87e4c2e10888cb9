//! One `height × width` cell matrix and the fleet placed on it.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, CellState, Coord};
use crate::ship::Ship;

/// Number of cells in a `height × width` grid, rejecting empty and
/// overflowing dimensions.
pub(crate) fn cell_count(height: usize, width: usize) -> Result<usize, BoardError> {
    match height.checked_mul(width) {
        Some(n) if n > 0 => Ok(n),
        _ => Err(BoardError::InvalidDimensions { height, width }),
    }
}

/// Row-major matrix of cell states plus its fleet, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
    fleet: Vec<Ship>,
}

impl Grid {
    /// All-empty grid with no ships. Dimensions are checked by `Board::new`.
    pub(crate) fn new(height: usize, width: usize) -> Self {
        Grid {
            height,
            width,
            cells: vec![CellState::Empty; height * width],
            fleet: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, (row, col): Coord) -> bool {
        row < self.height && col < self.width
    }

    /// Cell state at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    pub(crate) fn set(&mut self, coord: Coord, state: CellState) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = state;
        }
    }

    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.0 * self.width + coord.1)
        } else {
            None
        }
    }

    /// Rows of the matrix, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.width)
    }

    /// The matrix as numeric cell codes (`0`, `1`, `9`, `-1`).
    pub fn to_codes(&self) -> Vec<Vec<i8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Coordinates of every cell not yet hit or missed.
    pub fn unresolved(&self) -> Vec<Coord> {
        (0..self.height)
            .flat_map(|r| (0..self.width).map(move |c| (r, c)))
            .filter(|&coord| self.get(coord).is_some_and(|s| !s.is_resolved()))
            .collect()
    }

    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    pub(crate) fn fleet_mut(&mut self) -> &mut Vec<Ship> {
        &mut self.fleet
    }

    /// Refill with empty cells and drop the fleet.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Empty);
        self.fleet.clear();
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            for cell in row {
                let glyph = match cell {
                    CellState::Empty => '.',
                    CellState::Occupied => '■',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                };
                write!(f, "{} ", glyph)?;
            }
            if r + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawGrid {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
    fleet: Vec<Ship>,
}

#[cfg(feature = "std")]
impl Grid {
    fn from_raw(raw: RawGrid) -> Result<Self, BoardError> {
        let expected = cell_count(raw.height, raw.width)?;
        if raw.cells.len() != expected {
            return Err(BoardError::CellCountMismatch {
                expected,
                actual: raw.cells.len(),
            });
        }
        let grid = Grid {
            height: raw.height,
            width: raw.width,
            cells: raw.cells,
            fleet: raw.fleet,
        };
        if grid.fleet.iter().flat_map(Ship::cells).any(|c| !grid.in_bounds(c)) {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(grid)
    }
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <RawGrid as serde::Deserialize>::deserialize(deserializer)?;
        Grid::from_raw(raw).map_err(serde::de::Error::custom)
    }
}
