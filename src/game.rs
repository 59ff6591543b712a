//! Turn cycle on top of the engine: configuration, the move-then-spawn
//! step, and the win/loss status checked once per input cycle.

use log::debug;
use rand::Rng;

use crate::engine::{Board, BoardFullError, Move};

/// Constructor-level knobs for a game.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Side length of the board.
    pub board_size: usize,
    /// Tiles spawned before the first move.
    pub initial_tiles: usize,
    /// Probability that a spawned tile is a 4 instead of a 2.
    pub prob_of_four: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 4,
            initial_tiles: 2,
            prob_of_four: 0.2,
        }
    }
}

/// Where the game stands; `Won` takes precedence over `Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

/// A running game: board, config, and the one RNG every spawn draws from.
///
/// Quitting is not a `Status`: it belongs to whatever drives the loop, not
/// to board state.
pub struct Game<R: Rng> {
    board: Board,
    config: GameConfig,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Start a game with `config.initial_tiles` random tiles on an empty
    /// board.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, BoardFullError> {
        let mut game = Game {
            board: Board::empty(config.board_size),
            config,
            rng,
        };
        for _ in 0..config.initial_tiles {
            game.spawn()?;
        }
        Ok(game)
    }

    /// Start from an explicit position instead of a random seeding.
    pub fn with_board(board: Board, config: GameConfig, rng: R) -> Self {
        Game { board, config, rng }
    }

    /// Read-only snapshot for the render layer.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Win is checked before loss, matching the order the loop announces
    /// them in.
    pub fn status(&self) -> Status {
        if self.board.has_won() {
            Status::Won
        } else if self.board.has_lost() {
            Status::Lost
        } else {
            Status::Playing
        }
    }

    /// Apply one move. If it changed the board, commit it, spawn one tile,
    /// and return `true`; otherwise leave the board untouched.
    pub fn apply(&mut self, mv: Move) -> Result<bool, BoardFullError> {
        let next = self.board.shift(mv);
        if next == self.board {
            debug!("{mv:?}: no tile moved");
            return Ok(false);
        }
        self.board = next;
        self.spawn()?;
        debug!(
            "{mv:?}: moved, {} empty, highest {}",
            self.board.count_empty(),
            self.board.highest_tile()
        );
        Ok(true)
    }

    fn spawn(&mut self) -> Result<(), BoardFullError> {
        self.board = self
            .board
            .clone()
            .with_random_tile(&mut self.rng, self.config.prob_of_four)?;
        Ok(())
    }
}
