//! Board features used to grade moves of equal game-theoretic value.
//!
//! The only feature in use is the open-line count: how many winning
//! lines through a cell are still free of opponent marks. It orders the
//! classic opening preferences correctly (center 4 > corner 3 > edge 2).

use crate::board::{lines_through, CellLoc, MatchState, Player};

/// Counts the winning lines through `loc` that contain no mark of
/// `player`'s opponent, i.e. the lines `player` could still complete
/// through this cell.
pub fn open_lines(state: &MatchState, loc: CellLoc, player: Player) -> u8 {
    let opponent = player.opponent();
    let cells = state.cells();
    lines_through(loc)
        .filter(|line| line.iter().all(|&c| cells[c] != Some(opponent)))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{MatchState, Player, BOARD_SIZE};

    #[test]
    fn open_lines_on_empty_board_matches_geometry() {
        let state = MatchState::new();
        assert_eq!(open_lines(&state, 4, Player::X), 4);
        for loc in [0, 2, 6, 8] {
            assert_eq!(open_lines(&state, loc, Player::X), 3);
        }
        for loc in [1, 3, 5, 7] {
            assert_eq!(open_lines(&state, loc, Player::X), 2);
        }
    }

    #[test]
    fn opponent_marks_close_lines() {
        // O in a corner closes the row, column, and diagonal through it.
        let mut cells = [None; BOARD_SIZE];
        cells[0] = Some(Player::O);
        let state = MatchState::from_cells(cells, Player::X);
        // Center loses the main diagonal.
        assert_eq!(open_lines(&state, 4, Player::X), 3);
        // Cell 1 loses the top row.
        assert_eq!(open_lines(&state, 1, Player::X), 1);
        // Opposite corner loses the main diagonal.
        assert_eq!(open_lines(&state, 8, Player::X), 2);
    }

    #[test]
    fn own_marks_do_not_close_lines() {
        let mut cells = [None; BOARD_SIZE];
        cells[0] = Some(Player::X);
        let state = MatchState::from_cells(cells, Player::X);
        assert_eq!(open_lines(&state, 4, Player::X), 4);
    }
}
