//! TTI protocol support.
//!
//! Text notation for board positions and the command parser for the
//! stdin/stdout protocol loop.

pub mod notation;
pub mod parser;

pub use notation::{format_board, parse_board, NotationError};
pub use parser::{parse_command, Command};
