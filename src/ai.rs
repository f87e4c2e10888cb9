// Target selection for computer-controlled combatants.
// Targets are uniform over the cells of the defender's grid that have not
// been attacked yet.

use log::warn;
use rand::Rng;

use crate::{common::Coord, grid::Grid};

/// Pick a random unresolved cell of `grid`.
///
/// Draws uniformly over the whole grid and redraws on cells already hit or
/// missed. After `max_attempts` draws it falls back to choosing uniformly
/// among the remaining open cells, so the result stays uniform. Returns
/// `None` once every cell is resolved.
pub fn random_target<R: Rng>(grid: &Grid, max_attempts: usize, rng: &mut R) -> Option<Coord> {
    for _ in 0..max_attempts {
        let coord = (
            rng.random_range(0..grid.height()),
            rng.random_range(0..grid.width()),
        );
        if grid.get(coord).is_some_and(|s| !s.is_resolved()) {
            return Some(coord);
        }
    }

    let open = grid.unresolved();
    if open.is_empty() {
        warn!("no unresolved cells left to target");
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}
