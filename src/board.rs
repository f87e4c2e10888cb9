//! Game board: the player and opponent grids with their fleets.

use alloc::vec::Vec;
use core::fmt;

use log::debug;

use crate::common::{BoardError, CellState, Coord, Side};
use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::grid::{self, Grid};
use crate::ship::{all_sunk, footprint, Ship};

/// Two independent grids of the same size. The same coordinates on the two
/// grids are unrelated cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    player: Grid,
    opponent: Grid,
}

impl Board {
    /// Create an empty board with both grids sized `height × width`.
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        grid::cell_count(height, width)?;
        Ok(Board {
            height,
            width,
            player: Grid::new(height, width),
            opponent: Grid::new(height, width),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn grid(&self, side: Side) -> &Grid {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    fn grid_mut(&mut self, side: Side) -> &mut Grid {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    pub fn player_grid(&self) -> &Grid {
        &self.player
    }

    pub fn opponent_grid(&self) -> &Grid {
        &self.opponent
    }

    /// Ships placed on `side`, in placement order.
    pub fn fleet(&self, side: Side) -> &[Ship] {
        self.grid(side).fleet()
    }

    /// Cell state at `coord` on `side`, `None` outside the grid.
    pub fn cell(&self, side: Side, coord: Coord) -> Option<CellState> {
        self.grid(side).get(coord)
    }

    /// `true` if any of `cells` is occupied by a ship on `side`.
    pub fn collides(&self, cells: &[Coord], side: Side) -> bool {
        self.point_of_collision(cells, side).is_some()
    }

    /// Last cell of `cells` that lands on a ship on `side`.
    pub fn point_of_collision(&self, cells: &[Coord], side: Side) -> Option<Coord> {
        let grid = self.grid(side);
        cells
            .iter()
            .rev()
            .copied()
            .find(|&c| grid.get(c) == Some(CellState::Occupied))
    }

    /// Place `ship` on `side` with its first square at `start`.
    ///
    /// Nothing changes unless every check passes: the footprint must fit in
    /// the grid, must not cover an occupied cell, and the ship's name must be
    /// new to that fleet. A ship carrying its own squares must carry exactly
    /// the footprint computed here.
    pub fn place_ship(&mut self, mut ship: Ship, start: Coord, side: Side) -> Result<(), BoardError> {
        let grid = self.grid(side);
        let cells = footprint(start, ship.length(), ship.orientation())
            .ok_or(BoardError::ShipOutOfBounds)?;
        if !cells.iter().all(|&c| grid.in_bounds(c)) {
            return Err(BoardError::ShipOutOfBounds);
        }
        if let Some(at) = self.point_of_collision(&cells, side) {
            return Err(BoardError::ShipOverlaps { at });
        }
        if grid.fleet().iter().any(|s| s.name() == ship.name()) {
            return Err(BoardError::DuplicateShip);
        }
        if ship.is_placed() {
            if !ship.cells().eq(cells.iter().copied()) {
                return Err(BoardError::FootprintMismatch);
            }
        } else {
            ship.assign_squares(&cells);
        }

        debug!(
            "placing {} (len {}, {}) on {} grid at {:?}",
            ship.name(),
            ship.length(),
            ship.orientation(),
            side,
            start
        );
        let grid = self.grid_mut(side);
        for &c in &cells {
            grid.set(c, CellState::Occupied);
        }
        grid.fleet_mut().push(ship);
        Ok(())
    }

    /// Resolve an attack at `coord` on `side`.
    ///
    /// Returns `Ok(true)` on a hit. Empty water becomes a miss and returns
    /// `Ok(false)`; attacking an already resolved cell returns `Ok(false)`
    /// and leaves everything as it was.
    pub fn receive_attack(&mut self, coord: Coord, side: Side) -> Result<bool, BoardError> {
        let grid = self.grid_mut(side);
        let state = grid.get(coord).ok_or(BoardError::AttackOutOfBounds {
            row: coord.0,
            col: coord.1,
        })?;
        match state {
            CellState::Empty | CellState::Miss => {
                grid.set(coord, CellState::Miss);
                debug!("miss at {:?} on {} grid", coord, side);
                Ok(false)
            }
            CellState::Occupied => {
                let hit = grid
                    .fleet_mut()
                    .iter_mut()
                    .find(|s| s.occupies(coord.0, coord.1))
                    .is_some_and(|s| s.hit(coord.0, coord.1));
                if hit {
                    grid.set(coord, CellState::Hit);
                    debug!("hit at {:?} on {} grid", coord, side);
                }
                Ok(hit)
            }
            CellState::Hit => Ok(false),
        }
    }

    /// Ship covering `coord` on `side`, if any.
    pub fn ship_at(&self, side: Side, coord: Coord) -> Option<&Ship> {
        self.fleet(side)
            .iter()
            .find(|s| s.occupies(coord.0, coord.1))
    }

    /// Returns `true` when every ship on `side` is sunk, including when the
    /// fleet is empty.
    pub fn ships_sunk(&self, side: Side) -> bool {
        all_sunk(self.fleet(side))
    }

    /// Ships on `side` that are still afloat.
    pub fn ships_remaining(&self, side: Side) -> usize {
        self.fleet(side).iter().filter(|s| !s.is_sunk()).count()
    }

    /// Number of missed shots on `side`'s grid.
    pub fn miss_count(&self, side: Side) -> usize {
        self.grid(side).count(CellState::Miss)
    }

    /// Number of hit cells on `side`'s grid.
    pub fn hit_count(&self, side: Side) -> usize {
        self.grid(side).count(CellState::Hit)
    }

    /// Clear one grid and its fleet.
    pub fn reset_grid(&mut self, side: Side) {
        debug!("resetting {} grid", side);
        self.grid_mut(side).reset();
    }

    /// Clear both grids and fleets.
    pub fn reset(&mut self) {
        self.reset_grid(Side::Player);
        self.reset_grid(Side::Opponent);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            player: Grid::new(DEFAULT_HEIGHT, DEFAULT_WIDTH),
            opponent: Grid::new(DEFAULT_HEIGHT, DEFAULT_WIDTH),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = |side| {
            self.fleet(side)
                .iter()
                .map(Ship::name)
                .collect::<Vec<_>>()
        };
        writeln!(
            f,
            "Board {{\n  size: {}x{},\n  player:\n{}\n  player fleet: {:?},\n  opponent:\n{}\n  opponent fleet: {:?}\n}}",
            self.height,
            self.width,
            self.player,
            names(Side::Player),
            self.opponent,
            names(Side::Opponent),
        )
    }
}
