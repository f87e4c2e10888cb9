//! Random fleet placement.
//!
//! Each ship is placed by rejection sampling: draw a start point from the
//! range where the whole ship fits, reject it if the footprint touches a cell
//! already claimed in this pass (or a ship already on the grid), and redraw.
//! Every ship gets a bounded number of draws.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord, Side};
use crate::ship::{footprint, Orientation, Ship, ShipSpec};

/// Inclusive upper bounds for the start row and column of `spec` on `board`.
fn start_bounds(board: &Board, spec: &ShipSpec) -> Result<(usize, usize), BoardError> {
    let len = spec.length();
    match spec.orientation() {
        Orientation::Horizontal if len <= board.width() => {
            Ok((board.height() - 1, board.width() - len))
        }
        Orientation::Vertical if len <= board.height() => {
            Ok((board.height() - len, board.width() - 1))
        }
        _ => Err(BoardError::ShipOutOfBounds),
    }
}

/// Random start point for `spec` such that the whole ship stays on the grid.
pub fn random_start<R: Rng>(
    board: &Board,
    spec: &ShipSpec,
    rng: &mut R,
) -> Result<Coord, BoardError> {
    let (max_row, max_col) = start_bounds(board, spec)?;
    Ok((rng.random_range(0..=max_row), rng.random_range(0..=max_col)))
}

/// First free name for a ship called `base` in `fleet`.
fn unique_name(fleet: &[Ship], base: &str) -> String {
    let taken = |name: &str| fleet.iter().any(|s| s.name() == name);
    if !taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{} {}", base, n))
        .find(|name| !taken(name.as_str()))
        .unwrap_or_else(|| base.to_string())
}

/// Place every ship in `specs`, in order, at random positions on `side`.
///
/// Each ship gets up to `max_attempts` draws. On exhaustion the error names
/// the ship's length and the ships placed before it stay on the grid.
pub fn populate_randomly<R: Rng>(
    board: &mut Board,
    specs: &[ShipSpec],
    side: Side,
    max_attempts: usize,
    rng: &mut R,
) -> Result<(), BoardError> {
    let mut occupied: BTreeSet<Coord> = BTreeSet::new();

    for spec in specs {
        let name = unique_name(board.fleet(side), spec.name());
        let mut attempts = 0;
        loop {
            if attempts >= max_attempts {
                warn!(
                    "gave up placing {} (len {}) after {} attempts",
                    name,
                    spec.length(),
                    attempts
                );
                return Err(BoardError::UnableToPlaceShip {
                    length: spec.length(),
                });
            }
            attempts += 1;

            let start = random_start(board, spec, rng)?;
            let Some(cells) = footprint(start, spec.length(), spec.orientation()) else {
                continue;
            };
            let grid = board.grid(side);
            if cells
                .iter()
                .any(|c| occupied.contains(c) || !grid.in_bounds(*c))
            {
                continue;
            }

            let ship = Ship::with_coordinates(&name, spec.length(), spec.orientation(), &cells)?;
            match board.place_ship(ship, start, side) {
                Ok(()) => {
                    occupied.extend(cells);
                    debug!("{} placed after {} attempt(s)", name, attempts);
                    break;
                }
                // a ship placed by hand is in the way
                Err(BoardError::ShipOverlaps { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    Ok(())
}

/// Copy of `specs` with each orientation chosen by a fair coin.
pub fn randomize_orientations<R: Rng>(specs: &[ShipSpec], rng: &mut R) -> Vec<ShipSpec> {
    specs
        .iter()
        .map(|spec| {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            spec.with_orientation(orientation)
        })
        .collect()
}
