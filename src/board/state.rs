//! Match state representation.
//!
//! Holds the snapshot of one game: board contents and side to move.
//! The board status (in progress, won, drawn) is always derived from the
//! cells via the winning-line table, never stored, so it cannot drift
//! out of sync with the board.

use serde::{Deserialize, Serialize};

use super::cell::{CellLoc, Player, BOARD_SIZE};
use super::lines::WIN_LINES;

/// The derived status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardStatus {
    /// No moves have been played yet.
    EmptyBoard,
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl BoardStatus {
    /// Returns the lowercase protocol name of the status.
    pub const fn name(self) -> &'static str {
        match self {
            BoardStatus::EmptyBoard => "empty_board",
            BoardStatus::InProgress => "in_progress",
            BoardStatus::XWins => "x_wins",
            BoardStatus::OWins => "o_wins",
            BoardStatus::Draw => "draw",
        }
    }

    /// Returns true if the game has ended.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            BoardStatus::XWins | BoardStatus::OWins | BoardStatus::Draw
        )
    }
}

/// Errors raised by match-state queries and mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("cell location {0} is out of range")]
    OutOfRange(usize),

    #[error("cell {0} is already occupied")]
    Occupied(CellLoc),

    #[error("the game has already ended")]
    GameOver,

    #[error("it is not {0:?}'s turn")]
    WrongTurn(Player),
}

/// One game's state: board contents plus the side to move.
///
/// Fixed-size array storage keeps the state trivially copyable, which the
/// search relies on to hypothesize moves without touching the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    cells: [Option<Player>; BOARD_SIZE],
    active: Player,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Creates an empty board with X to move.
    pub fn new() -> Self {
        MatchState {
            cells: [None; BOARD_SIZE],
            active: Player::X,
        }
    }

    /// Creates a state from explicit cell contents and side to move.
    ///
    /// No reachability check is performed; arbitrary positions are
    /// accepted, as when loading a position over the protocol.
    pub fn from_cells(cells: [Option<Player>; BOARD_SIZE], active: Player) -> Self {
        MatchState { cells, active }
    }

    /// Returns the player to move.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Returns the full board contents.
    pub fn cells(&self) -> &[Option<Player>; BOARD_SIZE] {
        &self.cells
    }

    /// Returns the occupant of a cell, or an error for an out-of-range
    /// location.
    pub fn cell_at(&self, loc: CellLoc) -> Result<Option<Player>, MatchError> {
        if loc >= BOARD_SIZE {
            return Err(MatchError::OutOfRange(loc));
        }
        Ok(self.cells[loc])
    }

    /// Returns every empty cell location, in ascending order.
    pub fn legal_moves(&self) -> Vec<CellLoc> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Computes the current board status from the cells.
    pub fn status(&self) -> BoardStatus {
        for line in WIN_LINES.iter() {
            if let Some(p) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(p) && self.cells[line[2]] == Some(p) {
                    return match p {
                        Player::X => BoardStatus::XWins,
                        Player::O => BoardStatus::OWins,
                    };
                }
            }
        }
        let empties = self.cells.iter().filter(|c| c.is_none()).count();
        match empties {
            BOARD_SIZE => BoardStatus::EmptyBoard,
            0 => BoardStatus::Draw,
            _ => BoardStatus::InProgress,
        }
    }

    /// Plays `player`'s mark at `loc` and passes the turn.
    ///
    /// Fails if the location is out of range, the game has ended, the
    /// cell is occupied, or it is not `player`'s turn.
    pub fn apply(&mut self, loc: CellLoc, player: Player) -> Result<(), MatchError> {
        if loc >= BOARD_SIZE {
            return Err(MatchError::OutOfRange(loc));
        }
        if self.status().is_terminal() {
            return Err(MatchError::GameOver);
        }
        if self.cells[loc].is_some() {
            return Err(MatchError::Occupied(loc));
        }
        if player != self.active {
            return Err(MatchError::WrongTurn(player));
        }
        self.cells[loc] = Some(player);
        self.active = player.opponent();
        Ok(())
    }

    /// Places the active player's mark without legality checks and passes
    /// the turn. Search-internal; the caller guarantees the cell is empty.
    pub(crate) fn place_for_search(&mut self, loc: CellLoc) {
        debug_assert!(self.cells[loc].is_none());
        self.cells[loc] = Some(self.active);
        self.active = self.active.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(moves: &[CellLoc]) -> MatchState {
        let mut state = MatchState::new();
        for &loc in moves {
            let player = state.active_player();
            state.apply(loc, player).unwrap();
        }
        state
    }

    #[test]
    fn fresh_board_is_empty_with_x_to_move() {
        let state = MatchState::new();
        assert_eq!(state.status(), BoardStatus::EmptyBoard);
        assert_eq!(state.active_player(), Player::X);
        assert_eq!(state.legal_moves().len(), BOARD_SIZE);
    }

    #[test]
    fn status_detects_row_column_and_diagonal_wins() {
        // X takes the top row.
        let state = played(&[0, 3, 1, 4, 2]);
        assert_eq!(state.status(), BoardStatus::XWins);

        // O takes the middle column.
        let state = played(&[0, 4, 2, 1, 6, 7]);
        assert_eq!(state.status(), BoardStatus::OWins);

        // X takes the main diagonal.
        let state = played(&[0, 1, 4, 2, 8]);
        assert_eq!(state.status(), BoardStatus::XWins);
    }

    #[test]
    fn status_detects_draw() {
        // X O X / X O O / O X X -- no winner, board full.
        let state = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status(), BoardStatus::Draw);
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn apply_rejects_out_of_range() {
        let mut state = MatchState::new();
        assert_eq!(
            state.apply(BOARD_SIZE, Player::X),
            Err(MatchError::OutOfRange(BOARD_SIZE))
        );
        assert_eq!(state.cell_at(42), Err(MatchError::OutOfRange(42)));
    }

    #[test]
    fn apply_rejects_occupied_cell() {
        let mut state = played(&[4]);
        assert_eq!(state.apply(4, Player::O), Err(MatchError::Occupied(4)));
    }

    #[test]
    fn apply_rejects_wrong_turn() {
        let mut state = MatchState::new();
        assert_eq!(state.apply(0, Player::O), Err(MatchError::WrongTurn(Player::O)));
    }

    #[test]
    fn apply_rejects_moves_after_game_end() {
        let mut state = played(&[0, 3, 1, 4, 2]);
        assert_eq!(state.status(), BoardStatus::XWins);
        assert_eq!(state.apply(5, Player::O), Err(MatchError::GameOver));
    }

    #[test]
    fn legal_moves_lists_exactly_the_empty_cells() {
        let state = played(&[0, 4, 8]);
        assert_eq!(state.legal_moves(), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn cell_at_reports_occupants() {
        let state = played(&[0, 4]);
        assert_eq!(state.cell_at(0), Ok(Some(Player::X)));
        assert_eq!(state.cell_at(4), Ok(Some(Player::O)));
        assert_eq!(state.cell_at(8), Ok(None));
    }

    #[test]
    fn win_takes_precedence_over_full_board() {
        // Full board where X's last move completes a line.
        let mut cells = [None; BOARD_SIZE];
        for (i, c) in cells.iter_mut().enumerate() {
            *c = Some(if i % 2 == 0 { Player::X } else { Player::O });
        }
        // X holds 0, 4, 8.
        let state = MatchState::from_cells(cells, Player::O);
        assert_eq!(state.status(), BoardStatus::XWins);
    }
}
