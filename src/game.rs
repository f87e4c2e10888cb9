//! Turn engine: alternating attacks between two combatants on one board.

use alloc::string::{String, ToString};

use log::{debug, info};
use rand::Rng;

use crate::{
    ai,
    board::Board,
    common::{BoardError, Coord, GameError, Side, TurnError},
    config::{GameConfig, GameMode},
    placement,
    player::{Combatant, Controller},
    ship::{Ship, ShipSpec},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Fleets are being placed.
    Setup,
    InProgress,
    Finished { winner: Side },
}

/// Outcome of one call to [`Game::play_turn`].
///
/// A rejected turn carries `error` and changes nothing on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnResult {
    pub hit: bool,
    pub game_on: bool,
    /// Name of the winning combatant once the game is over.
    pub winner: Option<String>,
    /// Cell that was (or would have been) attacked.
    pub coordinates: Option<Coord>,
    /// Name of the ship sunk by this shot.
    pub sunk: Option<String>,
    pub error: Option<TurnError>,
}

/// Scoring figures for one combatant's fleet and grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetSummary {
    pub name: String,
    pub ships_total: usize,
    pub ships_remaining: usize,
    /// Hit cells on this combatant's grid.
    pub hits: usize,
    /// Missed shots on this combatant's grid.
    pub misses: usize,
}

/// A game session: the board, both combatants and the turn bookkeeping.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    player: Combatant,
    opponent: Combatant,
    config: GameConfig,
    status: GameStatus,
    turns: usize,
}

impl Game {
    /// New game in setup. Single-player pits a human player against a
    /// computer opponent; two-player has two humans.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let opponent = match config.mode {
            GameMode::SinglePlayer => Controller::Computer,
            GameMode::TwoPlayer => Controller::Human,
        };
        Self::with_controllers(config, Controller::Human, opponent)
    }

    /// New game in setup with explicit controllers for both sides.
    pub fn with_controllers(
        config: GameConfig,
        player: Controller,
        opponent: Controller,
    ) -> Result<Self, BoardError> {
        let board = Board::new(config.height, config.width)?;
        Ok(Game {
            board,
            player: Combatant::new(&config.player_name, Side::Player, player),
            opponent: Combatant::new(&config.opponent_name, Side::Opponent, opponent),
            config,
            status: GameStatus::Setup,
            turns: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable reference to the board, for placement by hand.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of resolved turns since the game started.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn is_on(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// The winning combatant, once there is one.
    pub fn winner(&self) -> Option<&Combatant> {
        match self.status {
            GameStatus::Finished { winner } => Some(self.combatant(winner)),
            _ => None,
        }
    }

    /// Side whose turn flag is set, if any.
    pub fn current_attacker(&self) -> Option<Side> {
        if self.player.is_turn() {
            Some(Side::Player)
        } else if self.opponent.is_turn() {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// Place one ship by hand during setup.
    pub fn place_ship(&mut self, side: Side, ship: Ship, start: Coord) -> Result<(), GameError> {
        self.ensure_setup()?;
        self.board.place_ship(ship, start, side)?;
        Ok(())
    }

    /// Replace `side`'s fleet with `specs` placed at random.
    ///
    /// With `randomize_orientation` every spec's orientation is redrawn first.
    pub fn randomize_fleet<R: Rng>(
        &mut self,
        side: Side,
        specs: &[ShipSpec],
        randomize_orientation: bool,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.ensure_setup()?;
        self.board.reset_grid(side);
        let result = if randomize_orientation {
            let specs = placement::randomize_orientations(specs, rng);
            placement::populate_randomly(
                &mut self.board,
                &specs,
                side,
                self.config.max_placement_attempts,
                rng,
            )
        } else {
            placement::populate_randomly(
                &mut self.board,
                specs,
                side,
                self.config.max_placement_attempts,
                rng,
            )
        };
        if let Err(e) = result {
            self.board.reset_grid(side);
            return Err(e.into());
        }
        Ok(())
    }

    fn ensure_setup(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::Setup => Ok(()),
            _ => Err(GameError::AlreadyStarted),
        }
    }

    /// Leave setup and hand the first turn to the player.
    ///
    /// Both fleets must be non-empty, since an empty fleet counts as sunk.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.ensure_setup()?;
        for side in [Side::Player, Side::Opponent] {
            if self.board.fleet(side).is_empty() {
                return Err(GameError::EmptyFleet(side));
            }
        }
        self.status = GameStatus::InProgress;
        self.player.set_turn(true);
        self.opponent.set_turn(false);
        info!(
            "game started: {} vs {} on {}x{}",
            self.player.name(),
            self.opponent.name(),
            self.board.height(),
            self.board.width()
        );
        Ok(())
    }

    fn rejected(&self, error: TurnError, coordinates: Option<Coord>) -> TurnResult {
        debug!("turn rejected: {}", error);
        TurnResult {
            hit: false,
            game_on: self.is_on(),
            winner: self.winner().map(|c| c.name().to_string()),
            coordinates,
            sunk: None,
            error: Some(error),
        }
    }

    /// Play one attack by `attacker` against the other side.
    ///
    /// Human attackers must name a target. Computer attackers use `coords`
    /// when given and otherwise draw a random unresolved cell. Targets off
    /// the grid or already hit or missed are rejected without touching the
    /// board.
    pub fn play_turn<R: Rng>(
        &mut self,
        attacker: Side,
        coords: Option<Coord>,
        rng: &mut R,
    ) -> TurnResult {
        match self.status {
            GameStatus::Setup => return self.rejected(TurnError::NotStarted, coords),
            GameStatus::Finished { .. } => return self.rejected(TurnError::GameOver, coords),
            GameStatus::InProgress => {}
        }
        let defender = attacker.other();
        let grid = self.board.grid(defender);

        let target = match (coords, self.combatant(attacker).controller()) {
            (Some(c), _) => c,
            (None, Controller::Human) => {
                return self.rejected(TurnError::MissingCoordinates, None)
            }
            (None, Controller::Computer) => {
                match ai::random_target(grid, self.config.max_target_attempts, rng) {
                    Some(c) => c,
                    None => return self.rejected(TurnError::NoTargetsLeft, None),
                }
            }
        };
        match grid.get(target) {
            None => return self.rejected(TurnError::OutOfBounds, Some(target)),
            Some(state) if state.is_resolved() => {
                return self.rejected(TurnError::AlreadyAttacked, Some(target))
            }
            Some(_) => {}
        }

        let hit = match self.board.receive_attack(target, defender) {
            Ok(hit) => hit,
            Err(_) => return self.rejected(TurnError::OutOfBounds, Some(target)),
        };
        let sunk = if hit {
            self.board
                .ship_at(defender, target)
                .filter(|s| s.is_sunk())
                .map(|s| s.name().to_string())
        } else {
            None
        };

        self.turns += 1;
        self.combatant_mut(attacker).set_turn(false);
        self.combatant_mut(defender).set_turn(true);
        debug!(
            "turn {}: {} fires at {:?}: {}",
            self.turns,
            self.combatant(attacker).name(),
            target,
            if hit { "hit" } else { "miss" }
        );
        if let Some(name) = &sunk {
            info!("{} sank {}", self.combatant(attacker).name(), name);
        }

        if self.board.ships_sunk(defender) {
            self.status = GameStatus::Finished { winner: attacker };
            self.player.set_turn(false);
            self.opponent.set_turn(false);
            info!(
                "{} wins by sinking the fleet of {} in {} turns",
                self.combatant(attacker).name(),
                self.combatant(defender).name(),
                self.turns
            );
        }

        TurnResult {
            hit,
            game_on: self.is_on(),
            winner: self.winner().map(|c| c.name().to_string()),
            coordinates: Some(target),
            sunk,
            error: None,
        }
    }

    /// Player shot at `coords`, followed by the computer's reply when the
    /// opponent is computer controlled and the game goes on.
    pub fn play_round<R: Rng>(
        &mut self,
        coords: Option<Coord>,
        rng: &mut R,
    ) -> (TurnResult, Option<TurnResult>) {
        let first = self.play_turn(Side::Player, coords, rng);
        let reply = if first.error.is_none()
            && first.game_on
            && self.opponent.controller() == Controller::Computer
        {
            Some(self.play_turn(Side::Opponent, None, rng))
        } else {
            None
        };
        (first, reply)
    }

    /// Play computer turns, alternating sides, until someone wins.
    ///
    /// Starts the game if it is still in setup. Both combatants must be
    /// computer controlled.
    pub fn autoplay<R: Rng>(&mut self, rng: &mut R) -> Result<Side, GameError> {
        for side in [Side::Player, Side::Opponent] {
            if self.combatant(side).controller() == Controller::Human {
                return Err(GameError::HumanCombatant(side));
            }
        }
        if self.status == GameStatus::Setup {
            self.start()?;
        }
        // every accepted turn resolves one cell on one of the grids
        let limit = 2 * self.board.height() * self.board.width();
        loop {
            if let GameStatus::Finished { winner } = self.status {
                return Ok(winner);
            }
            if self.turns >= limit {
                return Err(GameError::Stalled { turns: self.turns });
            }
            let attacker = self.current_attacker().unwrap_or(Side::Player);
            let result = self.play_turn(attacker, None, rng);
            if let Some(e) = result.error {
                return Err(e.into());
            }
        }
    }

    /// Scoring figures for `side`.
    pub fn summary(&self, side: Side) -> FleetSummary {
        FleetSummary {
            name: self.combatant(side).name().to_string(),
            ships_total: self.board.fleet(side).len(),
            ships_remaining: self.board.ships_remaining(side),
            hits: self.board.hit_count(side),
            misses: self.board.miss_count(side),
        }
    }

    /// Drop all game state and go back to setup with empty grids.
    pub fn reset(&mut self) {
        info!("game reset");
        self.board.reset();
        self.status = GameStatus::Setup;
        self.turns = 0;
        self.player.set_turn(false);
        self.opponent.set_turn(false);
    }
}
