use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_core::{Board, Cell, HEIGHT, WIDTH};

/// Terminal line of `row` when the bottom row is drawn on `origin_y`,
/// clamped to the top line on short terminals
fn row_line(origin_y: u16, row: usize) -> u16 {
    origin_y.saturating_sub((HEIGHT - 1 - row) as u16)
}

/// Draws the board under a row of 1-indexed column labels, player 1 in red
/// and player 2 in yellow
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    // the cursor now sits on the line of the bottom row
    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let (pos_x, pos_y) = (
                origin_x + column as u16,
                row_line(origin_y, row),
            );

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.cell(column, row) {
                            Some(Cell::Occupied(0)) => Color::Red,
                            Some(Cell::Occupied(_)) => Color::Yellow,
                            _ => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
