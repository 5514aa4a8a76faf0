//! TTI command parser.
//!
//! Parses incoming TTI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::board::CellLoc;

/// A parsed server-to-engine TTI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the TTI protocol handshake.
    Tti,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset engine state for a new game.
    NewGame,

    /// Set the board position from a notation string.
    Position { notation: String },

    /// Play the active player's mark at a cell.
    Move { loc: CellLoc },

    /// Select a move for the active player at the configured difficulty.
    Go,

    /// Emit the full move classification of the current position.
    Classify,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "tti" => Some(Command::Tti),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "go" => Some(Command::Go),
        "classify" => Some(Command::Classify),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "move" => parse_move(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");
    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position <notation>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed position: expected 'position <notation>'");
        return None;
    }
    Some(Command::Position {
        notation: tokens[1].to_string(),
    })
}

/// Parses `move <cell>`.
fn parse_move(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed move: expected 'move <cell>'");
        return None;
    }
    match tokens[1].parse::<CellLoc>() {
        Ok(loc) => Some(Command::Move { loc }),
        Err(_) => {
            eprintln!("malformed move: '{}' is not a cell index", tokens[1]);
            None
        }
    }
}
