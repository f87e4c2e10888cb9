//! Common types for broadside: sides, cell states and the error enums.

use core::fmt;

/// A `(row, col)` position on a grid.
pub type Coord = (usize, usize);

/// Identifies one of the two independent grids and the combatant that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The side being attacked when `self` attacks.
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// State of a single grid cell.
///
/// The numeric codes (`0`, `1`, `9`, `-1`) are what a rendering layer sees
/// through [`CellState::code`] and `Grid::to_codes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum CellState {
    /// Untouched water.
    #[default]
    Empty = 0,
    /// Covered by an unhit ship square.
    Occupied = 1,
    /// Covered by a hit ship square.
    Hit = 9,
    /// Attacked with no ship present.
    Miss = -1,
}

impl CellState {
    /// Numeric cell code.
    pub fn code(self) -> i8 {
        self as i8
    }

    /// `true` once the cell has been attacked.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

impl TryFrom<i8> for CellState {
    type Error = BoardError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CellState::Empty),
            1 => Ok(CellState::Occupied),
            9 => Ok(CellState::Hit),
            -1 => Ok(CellState::Miss),
            other => Err(BoardError::InvalidCellCode(other)),
        }
    }
}

/// Errors returned by board, ship and placement operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Grid dimensions must both be positive.
    InvalidDimensions { height: usize, width: usize },
    /// Ship length must be positive.
    InvalidLength,
    /// Orientation string is neither horizontal nor vertical.
    InvalidOrientation,
    /// Coordinate list does not match the ship's length.
    CoordinateCountMismatch { expected: usize, actual: usize },
    /// Pre-assigned ship squares differ from the placement footprint.
    FootprintMismatch,
    /// Ship footprint leaves the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps { at: (usize, usize) },
    /// A ship with the same name is already in the fleet.
    DuplicateShip,
    /// Attack coordinates lie outside the grid.
    AttackOutOfBounds { row: usize, col: usize },
    /// Random placement gave up after its retry cap.
    UnableToPlaceShip { length: usize },
    /// Numeric code is not a known cell state.
    InvalidCellCode(i8),
    /// Cell matrix size differs from `height × width`.
    CellCountMismatch { expected: usize, actual: usize },
    /// Recorded hit count differs from the number of hit squares.
    HitCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { height, width } => {
                write!(f, "Invalid grid dimensions {}x{}", height, width)
            }
            BoardError::InvalidLength => write!(f, "Ship length must be positive"),
            BoardError::InvalidOrientation => {
                write!(f, "Orientation must be horizontal or vertical")
            }
            BoardError::CoordinateCountMismatch { expected, actual } => write!(
                f,
                "Ship of length {} given {} coordinates",
                expected, actual
            ),
            BoardError::FootprintMismatch => {
                write!(f, "Ship coordinates do not match the placement")
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps { at } => {
                write!(f, "Ship placement overlaps another ship at {:?}", at)
            }
            BoardError::DuplicateShip => write!(f, "Ship is already in the fleet"),
            BoardError::AttackOutOfBounds { row, col } => {
                write!(f, "Attack at ({}, {}) is out of bounds", row, col)
            }
            BoardError::UnableToPlaceShip { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
            BoardError::InvalidCellCode(code) => write!(f, "Unknown cell code {}", code),
            BoardError::CellCountMismatch { expected, actual } => {
                write!(f, "Grid needs {} cells, found {}", expected, actual)
            }
            BoardError::HitCountMismatch { expected, actual } => write!(
                f,
                "Ship has {} hit squares but records {} hits",
                expected, actual
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Reasons a turn was rejected. Carried inside `TurnResult`, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    /// Human attacker gave no target.
    MissingCoordinates,
    /// Target cell is already hit or missed.
    AlreadyAttacked,
    /// Target lies outside the defender's grid.
    OutOfBounds,
    /// `start` has not been called.
    NotStarted,
    /// The game already has a winner.
    GameOver,
    /// Every cell of the defender's grid is resolved.
    NoTargetsLeft,
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::MissingCoordinates => write!(f, "no coordinates provided"),
            TurnError::AlreadyAttacked => write!(f, "Already attacked"),
            TurnError::OutOfBounds => write!(f, "coordinates out of bounds"),
            TurnError::NotStarted => write!(f, "game has not started"),
            TurnError::GameOver => write!(f, "game is over"),
            TurnError::NoTargetsLeft => write!(f, "no targets left"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TurnError {}

/// Errors from game lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A side has no ships, so it would lose before the first shot.
    EmptyFleet(Side),
    /// `start` was called outside of setup.
    AlreadyStarted,
    /// Autoplay needs both combatants to be computer controlled.
    HumanCombatant(Side),
    /// Autoplay hit its turn limit without a winner.
    Stalled { turns: usize },
    Board(BoardError),
    Turn(TurnError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<TurnError> for GameError {
    fn from(err: TurnError) -> Self {
        GameError::Turn(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::EmptyFleet(side) => write!(f, "The {} fleet is empty", side),
            GameError::AlreadyStarted => write!(f, "Game has already started"),
            GameError::HumanCombatant(side) => {
                write!(f, "The {} combatant needs explicit coordinates", side)
            }
            GameError::Stalled { turns } => write!(f, "No winner after {} turns", turns),
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Turn(e) => write!(f, "Turn error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
