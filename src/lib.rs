//! Rules engine and a lookahead-1 opponent for the board game 'Connect 4'
//!
//! The [`board::Board`] owns the 7x6 grid and answers placement and
//! termination queries, [`selector`] picks a column for an AI-controlled
//! player and [`session::GameSession`] drives turns between two players.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_core::{selector::{choose_move, MoveChoice}, board::Board};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player 0 has three stacked in column 3, player 1 to move
//! let board = Board::from_moves("414142")?;
//! let choice = choose_move(&board, 1, 0);
//!
//! assert_eq!(choice, Some(MoveChoice::Block(3)));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod player;

pub mod selector;

pub mod session;


pub use board::{Board, Cell, GameOutcome};
pub use player::Player;
pub use selector::{choose_move, MoveChoice};
pub use session::{GameSession, Phase, SessionOptions};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of players in a game
pub const NUM_PLAYERS: usize = 2;

/// The length of a serialized board, one character per tile
pub const STATE_STRING_LEN: usize = WIDTH * HEIGHT;

// a run of four has to fit in every direction
const_assert!(WIDTH >= 4 && HEIGHT >= 4);
// each player's tile is written as a single digit after '0'
const_assert!(NUM_PLAYERS <= 9);
