//! Board notation.
//!
//! A position is written as nine cell characters in row-major order
//! followed by the side to move, separated by a slash:
//!
//! ```text
//! XO..X..../o
//! ```
//!
//! Cells are `X`, `O`, or `.`; the side to move is lowercase `x` or `o`.
//! Shape and characters are validated, global reachability is not, so
//! handcrafted test positions are accepted.

use crate::board::{MatchState, Player, BOARD_SIZE};

/// Errors that can occur while parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 2 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("expected {BOARD_SIZE} cell characters, got {0}")]
    WrongCellCount(usize),

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error("invalid side-to-move character: '{0}'")]
    InvalidTurn(String),
}

/// Parses a board notation string into a match state.
pub fn parse_board(notation: &str) -> Result<MatchState, NotationError> {
    let sections: Vec<&str> = notation.split('/').collect();
    if sections.len() != 2 {
        return Err(NotationError::WrongSectionCount(sections.len()));
    }

    let cell_chars: Vec<char> = sections[0].chars().collect();
    if cell_chars.len() != BOARD_SIZE {
        return Err(NotationError::WrongCellCount(cell_chars.len()));
    }

    let mut cells = [None; BOARD_SIZE];
    for (i, &c) in cell_chars.iter().enumerate() {
        cells[i] = match c {
            '.' => None,
            _ => Some(Player::from_mark_char(c).ok_or(NotationError::InvalidCell(c))?),
        };
    }

    let turn = sections[1];
    let active = match turn.chars().next() {
        Some(c) if turn.len() == 1 => {
            Player::from_turn_char(c).ok_or_else(|| NotationError::InvalidTurn(turn.to_string()))?
        }
        _ => return Err(NotationError::InvalidTurn(turn.to_string())),
    };

    Ok(MatchState::from_cells(cells, active))
}

/// Formats a match state as a board notation string.
pub fn format_board(state: &MatchState) -> String {
    let mut out = String::with_capacity(BOARD_SIZE + 2);
    for cell in state.cells().iter() {
        out.push(match cell {
            Some(p) => p.mark_char(),
            None => '.',
        });
    }
    out.push('/');
    out.push(state.active_player().turn_char());
    out
}
