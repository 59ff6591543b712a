use std::fmt;

use rand::Rng;
use thiserror::Error;

use super::ops;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Returned when a tile spawn is requested but the board has no empty cell.
///
/// Callers that only spawn after an accepted move never hit this: a move
/// that changed the board always leaves at least one gap behind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no empty cell to spawn a tile into")]
pub struct BoardFullError;

/// An N×N 2048 board holding literal tile values row-major.
///
/// Cells are 0 (empty) or a power of two ≥ 2. All operations are by-value
/// transformations: `shift` and `with_random_tile` return a new `Board`,
/// which keeps trial moves (as in [`Board::has_lost`]) side-effect-free.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) size: usize,
    pub(crate) cells: Vec<u32>,
}

impl Board {
    /// Construct an all-empty board with the given side length.
    pub fn empty(size: usize) -> Self {
        assert!(size >= 2, "board side must be at least 2");
        Board {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Construct a board from literal row values.
    ///
    /// ```
    /// use twenty48::engine::Board;
    /// let b = Board::from_rows(&[
    ///     [2, 0, 0, 0],
    ///     [0, 4, 0, 0],
    ///     [0, 0, 8, 0],
    ///     [0, 0, 0, 16],
    /// ]);
    /// assert_eq!(b.get(2, 2), 8);
    /// assert_eq!(b.count_empty(), 12);
    /// ```
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Self {
        let size = rows.len();
        assert!(size >= 2, "board side must be at least 2");
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), size, "rows must form a square grid");
            debug_assert!(
                row.iter().all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())),
                "cells must be 0 or a power of two >= 2"
            );
            cells.extend_from_slice(row);
        }
        Board { size, cells }
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile value at `(row, col)`; 0 means empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    /// Return the board resulting from sliding/merging tiles toward `mv`
    /// (no random insert).
    ///
    /// ```
    /// use twenty48::engine::{Board, Move};
    /// let b = Board::from_rows(&[
    ///     [2, 2, 2, 0],
    ///     [0, 0, 2, 2],
    ///     [2, 0, 0, 2],
    ///     [0, 0, 0, 0],
    /// ]);
    /// assert_eq!(b.shift(Move::Left), Board::from_rows(&[
    ///     [4, 2, 0, 0],
    ///     [4, 0, 0, 0],
    ///     [4, 0, 0, 0],
    ///     [0, 0, 0, 0],
    /// ]));
    /// // A move that changes nothing is detected by plain equality.
    /// assert_eq!(b.shift(Move::Left).shift(Move::Left), b.shift(Move::Left));
    /// ```
    #[inline]
    pub fn shift(&self, mv: Move) -> Board {
        ops::shift(self, mv)
    }

    /// Spawn one tile into a uniformly chosen empty cell: 4 with probability
    /// `prob_of_four`, else 2.
    ///
    /// Deterministic example using a seeded RNG:
    /// ```
    /// use twenty48::engine::Board;
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let b = Board::empty(4)
    ///     .with_random_tile(&mut rng, 0.2)
    ///     .unwrap();
    /// assert_eq!(b.count_empty(), 15);
    /// ```
    #[inline]
    pub fn with_random_tile<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        prob_of_four: f64,
    ) -> Result<Self, BoardFullError> {
        ops::with_random_tile(self, rng, prob_of_four)
    }

    /// True once any cell holds the winning tile (a literal 2048, not scaled
    /// by board size).
    #[inline]
    pub fn has_won(&self) -> bool {
        ops::has_won(self)
    }

    /// True when the board is full and no direction can move or merge
    /// anything.
    #[inline]
    pub fn has_lost(&self) -> bool {
        ops::has_lost(self)
    }

    /// Count the number of empty cells on the board.
    #[inline]
    pub fn count_empty(&self) -> usize {
        ops::count_empty(self)
    }

    /// Return the highest tile value present on the board (0 if empty).
    #[inline]
    pub fn highest_tile(&self) -> u32 {
        ops::highest_tile(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.size * 8);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "{rule}")?;
            }
            let cells: Vec<String> = row.iter().map(format_val).collect();
            write!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

fn format_val(val: &u32) -> String {
    match val {
        0 => String::from("       "),
        v => format!("{v:^7}"),
    }
}
