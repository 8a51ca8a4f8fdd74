//! The Connect 4 grid: gravity drops, win/draw evaluation and the state string

use anyhow::{anyhow, Result};

use std::str::FromStr;

use crate::{HEIGHT, NUM_PLAYERS, STATE_STRING_LEN, WIDTH};

/// The four directions a run can extend in from its first tile in scan order:
/// horizontal, vertical, diagonal down-right and diagonal up-right
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Occupied(usize),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn owner(&self) -> Option<usize> {
        match *self {
            Cell::Occupied(player) => Some(player),
            Cell::Empty => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Occupied(player) => (b'1' + player as u8) as char,
        }
    }

    fn from_byte(b: u8) -> Self {
        match (b as char).to_digit(10).map(|d| d as usize) {
            Some(d @ 1..=NUM_PLAYERS) => Cell::Occupied(d - 1),
            _ => Cell::Empty,
        }
    }
}

/// Result of scanning a board, recomputed on every query
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameOutcome {
    InProgress,
    Won(usize),
    Draw,
}

/// A 7x6 Connect 4 grid
///
/// Rows are indexed from the top (0) to the bottom (`HEIGHT - 1`), so a
/// dropped tile lands on the largest empty row index of its column.
/// All mutation goes through [`Board::drop_in_column`], [`Board::reset`] and
/// [`Board::set_state_string`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, top-to-bottom
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Builds a board from a sequence of 1-indexed column digits, with
    /// players alternating and player 0 moving first
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();

        for (turn, column_char) in moves.as_ref().chars().enumerate() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    if board.check_for_winner().is_some() {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    if !board.drop_in_column(column - 1, turn % NUM_PLAYERS) {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub const fn width(&self) -> usize {
        WIDTH
    }

    pub const fn height(&self) -> usize {
        HEIGHT
    }

    fn index(column: usize, row: usize) -> usize {
        row * WIDTH + column
    }

    /// Bounds-checked cell lookup
    pub fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        if column < WIDTH && row < HEIGHT {
            Some(self.cells[Self::index(column, row)])
        } else {
            None
        }
    }

    /// The player owning the tile at (column, row), `None` if the cell is
    /// empty or off the board
    pub fn owner_at(&self, column: usize, row: usize) -> Option<usize> {
        self.cell(column, row).and_then(|cell| cell.owner())
    }

    /// Scans from the bottom row upwards and returns the first empty row
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[Self::index(column, row)].is_empty())
    }

    pub fn playable(&self, column: usize) -> bool {
        self.lowest_empty_row(column).is_some()
    }

    /// Drops a tile for `player` into `column`
    ///
    /// Returns false without touching the board if the column is out of
    /// range or full, or the player index is invalid.
    pub fn drop_in_column(&mut self, column: usize, player: usize) -> bool {
        if player >= NUM_PLAYERS {
            return false;
        }
        match self.lowest_empty_row(column) {
            Some(row) => {
                self.cells[Self::index(column, row)] = Cell::Occupied(player);
                true
            }
            None => false,
        }
    }

    fn four_in_a_row(&self, column: usize, row: usize, dx: i32, dy: i32, player: usize) -> bool {
        (0..4).all(|k| {
            let x = column as i32 + dx * k;
            let y = row as i32 + dy * k;
            if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
                return false;
            }
            self.owner_at(x as usize, y as usize) == Some(player)
        })
    }

    /// Full rescan for a run of four, top-left to bottom-right
    ///
    /// Returns the owner of the first run found in scan order.
    pub fn check_for_winner(&self) -> Option<usize> {
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let player = match self.owner_at(column, row) {
                    Some(player) => player,
                    None => continue,
                };
                if DIRECTIONS
                    .iter()
                    .any(|&(dx, dy)| self.four_in_a_row(column, row, dx, dy, player))
                {
                    return Some(player);
                }
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// A full board is only a draw if nobody has four in a row
    pub fn check_for_draw(&self) -> bool {
        self.is_full() && self.check_for_winner().is_none()
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.check_for_winner() {
            Some(player) => GameOutcome::Won(player),
            None if self.is_full() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }

    pub fn num_pieces(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn pieces_of(&self, player: usize) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    /// Would dropping a tile for `player` into `column` complete a run of
    /// four for them? Evaluated on a copy, `self` is never modified.
    pub fn would_win(&self, column: usize, player: usize) -> bool {
        let mut next = *self;
        next.drop_in_column(column, player) && next.check_for_winner() == Some(player)
    }

    /// The state string of an empty board
    pub fn initial_state_string() -> String {
        "0".repeat(STATE_STRING_LEN)
    }

    /// One character per tile in row-major order from the top row:
    /// '0' empty, '1' player 0, '2' player 1
    pub fn state_string(&self) -> String {
        self.cells.iter().map(|cell| cell.to_char()).collect()
    }

    /// Replaces the contents of the board with the given state string
    ///
    /// The length is counted in bytes: a string that is not exactly
    /// `STATE_STRING_LEN` bytes long is rejected and the board is left as it
    /// was. Bytes other than a player digit decode to empty tiles.
    pub fn set_state_string(&mut self, state: &str) -> Result<()> {
        let len = state.len();
        if len != STATE_STRING_LEN {
            return Err(anyhow!(
                "Invalid state string, expected {} tiles but got {}",
                STATE_STRING_LEN,
                len
            ));
        }
        self.reset();
        for (cell, b) in self.cells.iter_mut().zip(state.bytes()) {
            *cell = Cell::from_byte(b);
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; WIDTH * HEIGHT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(state: &str) -> Result<Self> {
        let mut board = Self::new();
        board.set_state_string(state)?;
        Ok(board)
    }
}
