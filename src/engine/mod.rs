//! Engine module: N×N 2048 board and the slide-and-merge move pass.
//!
//! - `Board` owns the grid as literal tile values (0 = empty).
//! - `shift` is the pure per-move transformation; whether a move did
//!   anything is an equality check between the old and new board.
//! - Randomness is injected through `rand::Rng`, never ambient.

mod ops;
mod state;

pub use ops::WINNING_TILE;
pub use state::{Board, BoardFullError, Move};
