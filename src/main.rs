use anyhow::Result;
use clap::Parser;
use tracing::Level;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_core::*;

mod display;
use display::*;

/// Play Connect 4 in the terminal, against another person or the AI
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Seat played by the AI (1 or 2), asked interactively when not given
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2), conflicts_with = "ai_vs_ai")]
    ai: Option<u8>,

    /// Let the AI play both seats
    #[arg(long)]
    ai_vs_ai: bool,

    /// Start from a saved 42-character board state
    #[arg(long)]
    state: Option<String>,

    /// Log more to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Asks until the answer starts with 'y' or 'n', end of input counts as no
fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(false);
        }
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(match args.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .init();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let options = if args.ai_vs_ai {
        SessionOptions::ai_vs_ai()
    } else if let Some(seat) = args.ai {
        SessionOptions::ai_as(seat as usize - 1)
    } else {
        // choose AI control of each seat
        let ai_players = (
            ask_yes_no(&stdin, "Is player 1 AI controlled?")?,
            ask_yes_no(&stdin, "Is player 2 AI controlled?")?,
        );
        match ai_players {
            (true, true) => SessionOptions::ai_vs_ai(),
            (true, false) => SessionOptions::ai_as(0),
            (false, true) => SessionOptions::ai_as(1),
            (false, false) => SessionOptions::human_vs_human(),
        }
    };

    let mut session = GameSession::new(options);
    session.set_up_board();
    if let Some(state) = &args.state {
        session.set_state_string(state)?;
    }

    // game loop
    loop {
        display(session.board())?;

        match session.phase() {
            Phase::Setup => session.set_up_board(),
            Phase::InProgress => {
                println!(
                    "Current player: {}, board state: {}",
                    session.current_player().number(),
                    session.state_string()
                );

                // AI player
                if session.is_ai_turn() {
                    println!("AI is thinking...");
                    stdout().flush()?;

                    // slow down play if both players are AI
                    if session.options().ai_vs_ai {
                        std::thread::sleep(std::time::Duration::from_secs(1));
                    }

                    match session.update_ai() {
                        Some(choice) => println!("AI plays column {}", choice.column() + 1),
                        None => {
                            println!("AI has no legal move");
                            break;
                        }
                    }

                // human player
                } else {
                    print!("Move input > ");
                    stdout().flush()?;
                    let mut input_str = String::new();
                    if stdin.read_line(&mut input_str)? == 0 {
                        break;
                    }

                    let column = match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                        Ok(column) => column,
                    };

                    if let Err(err) = session.play_checked(column) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
            }

            // end states
            end_state @ Phase::Won(_) | end_state @ Phase::Draw => {
                match end_state {
                    Phase::Won(player) => println!("Player {} wins!", player + 1),
                    _ => println!("Draw!"),
                }
                println!("Final board state: {}", session.state_string());
                if ask_yes_no(&stdin, "Play again?")? {
                    session.reset();
                } else {
                    break;
                }
            }
        }
    }
    Ok(())
}
