use alloc::string::{String, ToString};

use crate::common::Side;

/// Who picks a combatant's targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Controller {
    /// Targets come from the caller.
    Human,
    /// Targets are drawn at random when none are given.
    Computer,
}

/// One side of a game: a name, the grid it owns and whether it is on turn.
///
/// The combatant's grid and fleet live on the `Board`; `side` is the handle
/// to them, so resetting the board never leaves a combatant pointing at a
/// stale grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    side: Side,
    controller: Controller,
    is_turn: bool,
}

impl Combatant {
    pub fn new(name: &str, side: Side, controller: Controller) -> Self {
        Self {
            name: name.to_string(),
            side,
            controller,
            is_turn: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    pub fn is_turn(&self) -> bool {
        self.is_turn
    }

    pub(crate) fn set_turn(&mut self, turn: bool) {
        self.is_turn = turn;
    }
}
