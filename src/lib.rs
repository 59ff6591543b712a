//! twenty48: a single-player 2048 for the terminal
//!
//! This crate provides:
//! - An N×N `Board` type with ergonomic methods (`shift`, `with_random_tile`,
//!   `has_won`, `has_lost`, ...) in the `engine` module
//! - A turn-cycle `Game` wrapper owning board, configuration, and RNG
//!   (`game` module)
//! - A blocking keyboard-driven terminal front end (`tui` module)
//!
//! Quick start:
//! ```
//! use twenty48::engine::Move;
//! use twenty48::game::{Game, GameConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic game setup with a seeded RNG
//! let rng = StdRng::seed_from_u64(42);
//! let mut game = Game::new(GameConfig::default(), rng).unwrap();
//! assert_eq!(game.board().count_empty(), 14);
//!
//! // A move that changes the board spawns exactly one new tile
//! let _moved = game.apply(Move::Left).unwrap();
//! assert!(game.board().count_empty() >= 13);
//! ```
//!
//! Note: every random operation takes a `rand::Rng`, so seeded games replay
//! move-for-move. The front end and binary sit on top of the library; the
//! engine never sees key codes or terminal handles.

pub mod engine;
pub mod game;
pub mod tui;
