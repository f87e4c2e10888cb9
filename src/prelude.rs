//! Commonly used types and utilities for ease of import.

pub use crate::{
    all_sunk, footprint, populate_randomly, random_target, randomize_orientations, Board,
    BoardError, CellState, Combatant, Controller, Coord, FleetSummary, Game, GameConfig,
    GameError, GameMode, GameStatus, Grid, Orientation, Ship, ShipSpec, Side, Square,
    TurnError, TurnResult, DEFAULT_FLEET,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
