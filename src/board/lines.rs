//! Static winning-line topology for the 3x3 board.
//!
//! The 8 lines (3 rows, 3 columns, 2 diagonals) are stored in a
//! compile-time table; per-cell membership is answered by scanning it,
//! which is cheap at this size.

use super::cell::{CellLoc, BOARD_SIZE};

/// The number of winning lines.
pub const LINE_COUNT: usize = 8;

/// Every winning line, as a triple of cell locations.
///
/// Rows first, then columns, then the two diagonals.
pub const WIN_LINES: [[CellLoc; 3]; LINE_COUNT] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns an iterator over the winning lines that pass through `loc`.
pub fn lines_through(loc: CellLoc) -> impl Iterator<Item = &'static [CellLoc; 3]> {
    debug_assert!(loc < BOARD_SIZE);
    WIN_LINES.iter().filter(move |line| line.contains(&loc))
}
