//! Board representation and match-state types.
//!
//! Contains the core data structures for cells, players, winning lines,
//! and the overall match state.

pub mod cell;
pub mod lines;
pub mod state;

pub use cell::{CellLoc, Player, BOARD_SIZE, CENTER, CORNERS, EDGES};
pub use lines::{lines_through, LINE_COUNT, WIN_LINES};
pub use state::{BoardStatus, MatchError, MatchState};
