//! Oxo -- a tic-tac-toe engine implementing the TTI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! one command per line.

use std::io::{self, BufRead};

use oxo::engine::Engine;
use oxo::protocol::parser::{parse_command, Command};

/// Runs the main TTI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Tti => {
                engine.handle_tti(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
            }
            Command::NewGame => {
                engine.new_game();
            }
            Command::Position { notation } => {
                if let Err(e) = engine.set_position(&notation) {
                    eprintln!("{}", e);
                }
            }
            Command::Move { loc } => {
                engine.handle_move(loc, &mut out);
            }
            Command::Go => {
                engine.handle_go(&mut out);
            }
            Command::Classify => {
                engine.handle_classify(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
