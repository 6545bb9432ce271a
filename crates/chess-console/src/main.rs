//! Two players, one terminal.
//!
//! Reads one move per line (`e2e4`), prints the board after every accepted
//! move, and reports rejected moves without changing the board.

use anyhow::Context;
use chess_core::Color;
use chess_engine::{Board, Game};
use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "chess-console")]
#[command(about = "Play chess on the terminal")]
struct Cli {
    /// Start from this FEN piece placement instead of the initial position
    #[arg(long)]
    fen: Option<String>,
    /// Side to move first
    #[arg(long, default_value = "white", value_parser = parse_color)]
    turn: Color,
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => Err(format!("unknown color '{}', expected white or black", other)),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let board = match &cli.fen {
        Some(fen) => Board::from_placement(fen).context("invalid --fen")?,
        None => Board::initial(),
    };
    let game = Game::from_board(board, cli.turn);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(game, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Runs the read-move-print loop until `quit` or end of input.
fn run(mut game: Game, input: impl BufRead, mut out: impl Write) -> io::Result<Game> {
    show(&game, &mut out)?;
    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "new" => {
                game.reset();
                show(&game, &mut out)?;
            }
            mv => match game.play(mv) {
                Ok(()) => show(&game, &mut out)?,
                Err(e) => {
                    writeln!(out, "Error: {}", e)?;
                    prompt(&game, &mut out)?;
                }
            },
        }
    }
    Ok(game)
}

fn show(game: &Game, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", game.board())?;
    prompt(game, out)
}

fn prompt(game: &Game, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{} to move: ", game.turn())?;
    out.flush()
}
