//! Cell and player definitions for the 3x3 board.
//!
//! Cells are addressed by a row-major index in `[0, BOARD_SIZE)`:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};

/// The number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// A cell location: a row-major index into the board.
pub type CellLoc = usize;

/// The center cell.
pub const CENTER: CellLoc = 4;

/// The four corner cells.
pub const CORNERS: [CellLoc; 4] = [0, 2, 6, 8];

/// The four edge cells.
pub const EDGES: [CellLoc; 4] = [1, 3, 5, 7];

/// One of the two players. X always moves first in a fresh match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the uppercase mark character used in board notation.
    pub const fn mark_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Returns the lowercase side-to-move character used in board notation.
    pub const fn turn_char(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }

    /// Parses a mark character (uppercase).
    pub fn from_mark_char(c: char) -> Option<Player> {
        match c {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }

    /// Parses a side-to-move character (lowercase).
    pub fn from_turn_char(c: char) -> Option<Player> {
        match c {
            'x' => Some(Player::X),
            'o' => Some(Player::O),
            _ => None,
        }
    }
}
