//! Column choice for an AI-controlled player
//!
//! The policy only looks one move ahead, in strict priority order:
//! take an immediate win, else block the opponent's immediate win, else
//! play the first open column of [`preference_order`].

use tracing::trace;

use crate::{board::Board, WIDTH};

/// A chosen column and the rule that produced it
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MoveChoice {
    /// Completes a run of four for the mover
    Win(usize),
    /// Takes the column the opponent would win in
    Block(usize),
    /// No win or block available, first open column by preference
    Preferred(usize),
}

impl MoveChoice {
    pub fn column(&self) -> usize {
        match *self {
            MoveChoice::Win(column) | MoveChoice::Block(column) | MoveChoice::Preferred(column) => {
                column
            }
        }
    }
}

/// Returns the columns ordered from the middle outwards, left before
/// right, as the middle columns take part in more runs
pub const fn preference_order() -> [usize; WIDTH] {
    let mut order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        order[i] = (WIDTH / 2) + (1 - i % 2) * (i / 2) - (i % 2) * (i / 2 + 1);
        i += 1;
    }
    order
}

/// First column, in ascending order, where a tile for `player` would win
pub fn winning_column(board: &Board, player: usize) -> Option<usize> {
    (0..WIDTH).find(|&column| board.would_win(column, player))
}

/// Picks a column for `ai_player`, `None` when every column is full
pub fn choose_move(board: &Board, ai_player: usize, opponent: usize) -> Option<MoveChoice> {
    if let Some(column) = winning_column(board, ai_player) {
        trace!(column, "winning move available");
        return Some(MoveChoice::Win(column));
    }
    if let Some(column) = winning_column(board, opponent) {
        trace!(column, "blocking opponent");
        return Some(MoveChoice::Block(column));
    }
    preference_order()
        .iter()
        .copied()
        .find(|&column| board.playable(column))
        .map(MoveChoice::Preferred)
}
