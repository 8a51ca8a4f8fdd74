//! A two-player game of Connect 4 driven one turn at a time
//!
//! The session owns the [`Board`] and both [`Player`]s. A front end forwards
//! human column choices through [`GameSession::action_for_empty_holder`] (or
//! [`GameSession::play_checked`]) and calls [`GameSession::update_ai`] when
//! [`GameSession::is_ai_turn`] is true. Every successful drop ends the turn:
//! the board is checked for a winner, then for a draw, and otherwise the
//! other player moves next.

use anyhow::{anyhow, Result};
use tracing::{debug, info, instrument};

use crate::{
    board::{Board, GameOutcome},
    player::Player,
    selector::{choose_move, MoveChoice},
    NUM_PLAYERS, WIDTH,
};

/// Seat configuration, applied every time the board is set up
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SessionOptions {
    /// The seat controlled by the AI, `None` for human vs human
    pub ai_seat: Option<usize>,
    /// Both seats are controlled by the AI
    pub ai_vs_ai: bool,
}

impl SessionOptions {
    pub fn human_vs_human() -> Self {
        Self::default()
    }

    pub fn ai_as(seat: usize) -> Self {
        Self {
            ai_seat: Some(seat),
            ai_vs_ai: false,
        }
    }

    pub fn ai_vs_ai() -> Self {
        Self {
            ai_seat: None,
            ai_vs_ai: true,
        }
    }

    fn seat_is_ai(&self, seat: usize) -> bool {
        self.ai_vs_ai || self.ai_seat == Some(seat)
    }
}

/// Lifecycle of a session: `Setup -> InProgress -> (Won | Draw) -> Setup`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Phase {
    Setup,
    InProgress,
    Won(usize),
    Draw,
}

impl Phase {
    pub fn is_over(&self) -> bool {
        match self {
            Phase::Won(_) | Phase::Draw => true,
            _ => false,
        }
    }
}

impl From<GameOutcome> for Phase {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::InProgress => Phase::InProgress,
            GameOutcome::Won(player) => Phase::Won(player),
            GameOutcome::Draw => Phase::Draw,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    players: [Player; NUM_PLAYERS],
    current: usize,
    phase: Phase,
    options: SessionOptions,
}

impl GameSession {
    /// Creates a session in the `Setup` phase, call
    /// [`set_up_board`](Self::set_up_board) to start playing
    pub fn new(options: SessionOptions) -> Self {
        Self {
            board: Board::new(),
            players: [Player::new(0), Player::new(1)],
            current: 0,
            phase: Phase::Setup,
            options,
        }
    }

    /// Clears the board, registers both players with their AI flags and
    /// hands the first turn to player 0
    pub fn set_up_board(&mut self) {
        self.board.reset();
        self.register_players();
        self.current = 0;
        self.phase = Phase::InProgress;
        debug!(options = ?self.options, "board set up");
    }

    fn register_players(&mut self) {
        for (seat, player) in self.players.iter_mut().enumerate() {
            *player = Player::new(seat).with_ai(self.options.seat_is_ai(seat));
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn player_at(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// The seat the AI plays when only one seat is AI-controlled
    pub fn ai_player(&self) -> Option<usize> {
        self.players.iter().find(|p| p.is_ai()).map(|p| p.index())
    }

    /// The seat opposing the AI, player 0 when there is no AI
    pub fn human_player(&self) -> usize {
        self.players
            .iter()
            .find(|p| !p.is_ai())
            .map(|p| p.index())
            .unwrap_or(0)
    }

    pub fn is_ai_turn(&self) -> bool {
        self.phase == Phase::InProgress && self.current_player().is_ai()
    }

    /// A human picked `column`: drop a tile there for the current player
    ///
    /// Returns false, without consuming the turn, if the game is not in
    /// progress or the column cannot take a tile.
    pub fn action_for_empty_holder(&mut self, column: usize) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        self.drop_for_current(column)
    }

    /// Like [`action_for_empty_holder`](Self::action_for_empty_holder), with a
    /// 1-indexed column and a reason when the move is refused
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<Phase> {
        if self.phase != Phase::InProgress {
            return Err(anyhow!("Invalid move, no game in progress"));
        }
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        if !self.drop_for_current(column_one_indexed - 1) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }
        Ok(self.phase)
    }

    /// Lets the AI pick a column for the current player and plays it
    ///
    /// Returns the choice that was played, `None` if it is not an AI turn or
    /// there is no legal move.
    #[instrument(level = "debug", skip(self), fields(player = self.current))]
    pub fn update_ai(&mut self) -> Option<MoveChoice> {
        if !self.is_ai_turn() {
            return None;
        }
        let (ai, opponent) = if self.options.ai_vs_ai {
            (self.current, (self.current + 1) % NUM_PLAYERS)
        } else {
            (self.ai_player()?, self.human_player())
        };
        let choice = choose_move(&self.board, ai, opponent)?;
        debug!(?choice, "AI move");
        if self.drop_for_current(choice.column()) {
            Some(choice)
        } else {
            None
        }
    }

    fn drop_for_current(&mut self, column: usize) -> bool {
        let player = self.current;
        if !self.board.drop_in_column(column, player) {
            debug!(column, player, "rejected drop");
            return false;
        }
        debug!(column, player, state = %self.board.state_string(), "dropped tile");
        self.end_turn();
        true
    }

    fn end_turn(&mut self) {
        if let Some(winner) = self.check_for_winner() {
            info!(winner, "game won");
            self.phase = Phase::Won(winner);
        } else if self.check_for_draw() {
            info!("game drawn");
            self.phase = Phase::Draw;
        } else {
            self.current = (self.current + 1) % NUM_PLAYERS;
        }
    }

    pub fn check_for_winner(&self) -> Option<usize> {
        self.board.check_for_winner()
    }

    pub fn check_for_draw(&self) -> bool {
        self.board.check_for_draw()
    }

    pub fn state_string(&self) -> String {
        self.board.state_string()
    }

    /// Restores a saved board
    ///
    /// The session goes back through `Setup`: seats are registered from the
    /// options as on a fresh setup. Player 0 always moves first, so the
    /// player to move is the one with fewer tiles on the board. The phase
    /// follows the board's outcome. A malformed state leaves the session as
    /// it was.
    pub fn set_state_string(&mut self, state: &str) -> Result<()> {
        let board: Board = state.parse()?;
        self.stop_game();
        self.register_players();
        self.board = board;
        self.current = if board.pieces_of(0) > board.pieces_of(1) {
            1
        } else {
            0
        };
        self.phase = board.outcome().into();
        info!(state, phase = ?self.phase, "state restored");
        Ok(())
    }

    /// Clears the board and returns to `Setup`
    pub fn stop_game(&mut self) {
        self.board.reset();
        self.phase = Phase::Setup;
    }

    /// Play again with the same seat configuration
    pub fn reset(&mut self) {
        self.stop_game();
        self.set_up_board();
        info!("game reset");
    }
}
