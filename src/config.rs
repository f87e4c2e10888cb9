use alloc::string::{String, ToString};

use crate::ship::{Orientation, ShipSpec};

pub const DEFAULT_HEIGHT: usize = 14;
pub const DEFAULT_WIDTH: usize = 14;
pub const NUM_SHIPS: usize = 9;
pub const DEFAULT_FLEET: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::preset("Carrier", 6, Orientation::Horizontal),
    ShipSpec::preset("Battleship", 5, Orientation::Vertical),
    ShipSpec::preset("Cruiser", 5, Orientation::Horizontal),
    ShipSpec::preset("Destroyer", 4, Orientation::Vertical),
    ShipSpec::preset("Frigate", 4, Orientation::Horizontal),
    ShipSpec::preset("Submarine", 3, Orientation::Horizontal),
    ShipSpec::preset("Corvette", 3, Orientation::Vertical),
    ShipSpec::preset("Patrol Boat", 2, Orientation::Vertical),
    ShipSpec::preset("Gunboat", 2, Orientation::Horizontal),
];

/// Total number of ship segments in the default fleet.
pub const TOTAL_SHIP_CELLS: usize = 6 + 5 + 5 + 4 + 4 + 3 + 3 + 2 + 2;

/// Start points drawn per ship before random placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Random target draws before falling back to picking among open cells.
pub const MAX_TARGET_ATTEMPTS: usize = 64;

/// Who plays whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// Human player against a computer opponent.
    #[default]
    SinglePlayer,
    /// Two humans sharing one board, both naming their targets.
    TwoPlayer,
}

/// Runtime settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub mode: GameMode,
    pub player_name: String,
    pub opponent_name: String,
    pub max_placement_attempts: usize,
    pub max_target_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            mode: GameMode::SinglePlayer,
            player_name: "player".to_string(),
            opponent_name: "computer".to_string(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_target_attempts: MAX_TARGET_ATTEMPTS,
        }
    }
}
