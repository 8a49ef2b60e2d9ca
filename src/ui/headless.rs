//! Line-oriented adapter: one command per input line, plain text output.
//!
//! Commands: a column number `1..=width` drops a piece, `s` starts (or
//! rematches), `r` resets, `b` prints the board, `q` quits.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::rejection_message;
use crate::game::GameEngine;

pub fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(
        output,
        "Connect Four {}x{}. Commands: 1-{} drop, s start, r reset, b board, q quit",
        engine.width(),
        engine.height(),
        engine.width()
    )?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        debug!(command, "headless command");

        match command {
            "q" => break,
            "s" => {
                if engine.phase().is_in_progress() {
                    writeln!(output, "Game already in progress.")?;
                } else {
                    engine.start();
                    writeln!(
                        output,
                        "New game started! {} to move.",
                        engine.current_player()
                    )?;
                }
            }
            "r" => {
                engine.reset();
                writeln!(output, "Board cleared. Press s to start.")?;
            }
            "b" => write!(output, "{}", engine.board())?,
            other => match other.parse::<isize>() {
                Ok(number) => drop_piece(engine, number.saturating_sub(1), &mut output)?,
                Err(_) => writeln!(output, "Unknown command '{other}'.")?,
            },
        }
    }

    output.flush()
}

fn drop_piece<W: Write>(
    engine: &mut GameEngine,
    column: isize,
    output: &mut W,
) -> io::Result<()> {
    match engine.drop_piece(column) {
        Ok(placement) => {
            write!(output, "{}", engine.board())?;
            match placement.phase.end_message() {
                Some(end) => writeln!(output, "{end}"),
                None => writeln!(output, "{} to move.", placement.current_player),
            }
        }
        Err(err) => writeln!(output, "{}", rejection_message(&err)),
    }
}
