//! Gomoku in the terminal
//!
//! Play Black against the engine. Commands:
//! - `<row> <col>`: place a stone
//! - `hint`: ask for a suggestion (once per game)
//! - `reset`: start over
//! - `quit`: leave

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;

use gomoku::{GameConfig, GameError, GameService};

#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(version, about = "Play Gomoku against an alpha-beta engine", long_about = None)]
struct Args {
    /// Difficulty tier (1-5); overrides GOMOKU_DIFFICULTY
    #[arg(short, long)]
    difficulty: Option<u8>,

    /// Board size; overrides GOMOKU_BOARD_SIZE
    #[arg(short, long)]
    size: Option<usize>,

    /// Seed for reproducible engine openings
    #[arg(long)]
    seed: Option<u64>,
}

enum Command {
    Move(usize, usize),
    Hint,
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let first = parts.next()?;
    match first {
        "hint" => Some(Command::Hint),
        "reset" => Some(Command::Reset),
        "quit" | "exit" => Some(Command::Quit),
        _ => {
            let row = first.parse().ok()?;
            let col = parts.next()?.parse().ok()?;
            Some(Command::Move(row, col))
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = GameConfig::from_env()?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut service = GameService::in_memory(config)?;
    let (id, _) = service.new_game(args.difficulty, args.size)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("You are X (Black). Enter `row col`, `hint`, `reset` or `quit`.");
    println!("{}", service.board(&id)?);

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            println!("?");
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Reset => {
                service.reset_game(&id)?;
                println!("{}", service.board(&id)?);
            }
            Command::Hint => match service.hint(&id) {
                Ok(pos) => println!("Try ({}, {})", pos.row, pos.col),
                Err(e) => println!("{e}"),
            },
            Command::Move(row, col) => match service.make_move(&id, row, col) {
                Ok(outcome) => {
                    if let Some(ai) = outcome.ai_move {
                        println!("AI plays ({}, {})", ai.row, ai.col);
                    }
                    println!("{}", service.board(&id)?);
                    if outcome.board_state.game_over {
                        match outcome.board_state.winner {
                            1 => println!("You win!"),
                            2 => println!("AI wins."),
                            _ => println!("Draw."),
                        }
                        println!("Type `reset` to play again.");
                    }
                }
                Err(e @ (GameError::InvalidMove { .. } | GameError::GameOver)) => {
                    println!("{e}")
                }
                Err(e) => return Err(e.into()),
            },
        }
        stdout.flush()?;
    }

    service.end_game(&id)?;
    Ok(())
}
