//! Exhaustive minimax over the remaining game tree.
//!
//! The state space is bounded by the at most 9 empty cells, so every
//! continuation is enumerated without pruning. Values are from the
//! perspective of the player making the move under consideration:
//! +1 forced win, 0 forced draw, -1 forced loss under optimal play.

use crate::board::{BoardStatus, CellLoc, MatchState};

/// The resolved value of playing one move: the minimax outcome and the
/// number of further plies until the game ends under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MoveEval {
    /// +1 win, 0 draw, -1 loss for the player who makes the move.
    pub value: i8,
    /// Plies remaining after the move until the terminal position.
    pub plies: u8,
}

impl MoveEval {
    /// Returns true if this line is preferable to `other` for the player
    /// choosing between them: higher value first, then faster wins and
    /// slower losses. Equal-value draws are not reordered.
    fn beats(&self, other: &MoveEval) -> bool {
        if self.value != other.value {
            return self.value > other.value;
        }
        match self.value {
            1 => self.plies < other.plies,
            -1 => self.plies > other.plies,
            _ => false,
        }
    }
}

/// Evaluates the active player placing their mark at `loc`, which must
/// be an empty cell of a non-terminal position.
pub(crate) fn evaluate_move(state: &MatchState, loc: CellLoc) -> MoveEval {
    let mut next = *state;
    next.place_for_search(loc);
    match next.status() {
        // Only the player who just moved can have completed a line.
        BoardStatus::XWins | BoardStatus::OWins => MoveEval { value: 1, plies: 0 },
        BoardStatus::Draw => MoveEval { value: 0, plies: 0 },
        _ => {
            let reply = best_reply(&next);
            MoveEval {
                value: -reply.value,
                plies: reply.plies + 1,
            }
        }
    }
}

/// Returns the active player's best achievable line in a non-terminal
/// position with at least one empty cell.
fn best_reply(state: &MatchState) -> MoveEval {
    let mut best: Option<MoveEval> = None;
    for loc in state.legal_moves() {
        let eval = evaluate_move(state, loc);
        match best {
            Some(b) if !eval.beats(&b) => {}
            _ => best = Some(eval),
        }
    }
    // Non-terminal implies at least one legal move was evaluated.
    best.unwrap()
}
