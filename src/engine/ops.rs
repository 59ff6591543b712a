use rand::Rng;

use super::state::{Board, BoardFullError, Move};

/// Reaching this tile wins the game. A literal, independent of board size.
pub const WINNING_TILE: u32 = 2048;

/// Slide/merge tiles toward `mv` and return the new board. No randomness.
///
/// The grid is decomposed into lanes along the move axis, each ordered so
/// that slot 0 is the edge tiles move toward; every lane then runs the same
/// left-compaction pass. One index mapping covers all four directions and
/// is its own inverse, so lanes are read and written through the same
/// function.
pub fn shift(board: &Board, mv: Move) -> Board {
    let n = board.size;
    let mut next = board.clone();
    let mut line = vec![0u32; n];
    for lane in 0..n {
        for slot in 0..n {
            line[slot] = board.cells[lane_cell(n, mv, lane, slot)];
        }
        slide_line_left(&mut line);
        for slot in 0..n {
            next.cells[lane_cell(n, mv, lane, slot)] = line[slot];
        }
    }
    next
}

/// Cell index of `slot` within `lane`, where slot 0 is the edge tiles move
/// toward: rows for Left/Right, columns for Up/Down.
fn lane_cell(n: usize, mv: Move, lane: usize, slot: usize) -> usize {
    match mv {
        Move::Left => lane * n + slot,
        Move::Right => lane * n + (n - 1 - slot),
        Move::Up => slot * n + lane,
        Move::Down => (n - 1 - slot) * n + lane,
    }
}

/// One compaction-and-merge pass over a single lane, toward slot 0.
///
/// Write cursor plus a "slot behind the cursor may still merge" flag; each
/// output slot merges at most once per pass, so `[2, 2, 2, 0]` becomes
/// `[4, 2, 0, 0]` and never `[6, 0, 0, 0]`. Earliest tiles merge first.
pub(crate) fn slide_line_left(line: &mut [u32]) {
    let mut write = 0;
    let mut mergeable = true;
    for read in 0..line.len() {
        let val = line[read];
        if val == 0 {
            continue;
        }
        line[read] = 0;
        if write > 0 && mergeable && line[write - 1] == val {
            line[write - 1] = val + val;
            mergeable = false;
        } else {
            line[write] = val;
            write += 1;
            mergeable = true;
        }
    }
}

pub fn has_won(board: &Board) -> bool {
    board.cells.iter().any(|&v| v == WINNING_TILE)
}

pub fn has_lost(board: &Board) -> bool {
    if board.cells.iter().any(|&v| v == 0) {
        return false;
    }
    [Move::Up, Move::Down, Move::Left, Move::Right]
        .iter()
        .all(|&mv| shift(board, mv) == *board)
}

pub fn with_random_tile<R: Rng + ?Sized>(
    mut board: Board,
    rng: &mut R,
    prob_of_four: f64,
) -> Result<Board, BoardFullError> {
    let empty: Vec<usize> = board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == 0)
        .map(|(idx, _)| idx)
        .collect();
    if empty.is_empty() {
        return Err(BoardFullError);
    }
    let cell = empty[rng.gen_range(0..empty.len())];
    board.cells[cell] = if rng.gen_bool(prob_of_four) { 4 } else { 2 };
    Ok(board)
}

pub fn count_empty(board: &Board) -> usize {
    board.cells.iter().filter(|&&v| v == 0).count()
}

pub fn highest_tile(board: &Board) -> u32 {
    board.cells.iter().copied().max().unwrap_or(0)
}
