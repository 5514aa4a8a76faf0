//! Engine session state.
//!
//! Holds the current match state, engine options, and the random source,
//! and implements the TTI command handlers. The difficulty tier is read
//! from the `Difficulty` option (default medium).

use std::collections::HashMap;
use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{CellLoc, MatchState};
use crate::policy::{choose_move, AiLevel};
use crate::protocol::notation::parse_board;
use crate::search::BoardEvaluator;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: MatchState,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Engine {
    /// Creates a new engine with an empty board and default options.
    ///
    /// The random source is seeded once here, at session start, and
    /// reused for every selection afterwards.
    pub fn new() -> Self {
        Engine {
            position: MatchState::new(),
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Resets the board for a new game. Options are kept.
    pub fn new_game(&mut self) {
        self.position = MatchState::new();
    }

    /// Sets the current position from a board notation string.
    /// Returns an error message on failure.
    pub fn set_position(&mut self, notation: &str) -> Result<(), String> {
        match parse_board(notation) {
            Ok(state) => {
                self.position = state;
                Ok(())
            }
            Err(e) => Err(format!("failed to parse position: {}", e)),
        }
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Returns the configured difficulty from options (default medium).
    fn difficulty(&self) -> AiLevel {
        self.options
            .get("Difficulty")
            .and_then(|v| AiLevel::from_name(v))
            .unwrap_or(AiLevel::Medium)
    }

    /// Handles the TTI handshake: writes id, options, protocol_version,
    /// and ttiok.
    pub fn handle_tti<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name oxo").unwrap();
        writeln!(out, "id author oxo").unwrap();
        writeln!(
            out,
            "option name Difficulty type combo default medium var easy var medium var hard"
        )
        .unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "ttiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `go` command: selects a move at the configured
    /// difficulty and writes `bestmove <cell>`, or `bestmove none` when
    /// the game is over.
    pub fn handle_go<W: Write>(&mut self, out: &mut W) {
        match choose_move(self.difficulty(), &self.position, &mut self.rng) {
            Some(loc) => writeln!(out, "bestmove {}", loc).unwrap(),
            None => writeln!(out, "bestmove none").unwrap(),
        }
        out.flush().unwrap();
    }

    /// Handles the `move` command: plays the active player's mark and
    /// reports the resulting board status. Illegal moves are reported to
    /// stderr and leave the position unchanged.
    pub fn handle_move<W: Write>(&mut self, loc: CellLoc, out: &mut W) {
        let player = self.position.active_player();
        match self.position.apply(loc, player) {
            Ok(()) => {
                writeln!(out, "status {}", self.position.status().name()).unwrap();
                out.flush().unwrap();
            }
            Err(e) => eprintln!("move {}: {}", loc, e),
        }
    }

    /// Handles the `classify` command: evaluates the current position and
    /// writes the classification index as one JSON line.
    pub fn handle_classify<W: Write>(&mut self, out: &mut W) {
        let mut evaluator = BoardEvaluator::new();
        evaluator.calc_board(&self.position);
        let json = serde_json::to_string(&evaluator.classified_cells()).unwrap();
        writeln!(out, "classification {}", json).unwrap();
        out.flush().unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardStatus, BOARD_SIZE};
    use crate::search::ClassifiedCell;

    #[test]
    fn new_engine_starts_an_empty_board() {
        let engine = Engine::new();
        assert_eq!(engine.position.status(), BoardStatus::EmptyBoard);
        assert!(engine.options.is_empty());
    }

    #[test]
    fn new_game_resets_the_position_but_keeps_options() {
        let mut engine = Engine::new();
        engine.set_position("XO..X..../o").unwrap();
        engine.set_option("Difficulty".to_string(), Some("hard".to_string()));
        engine.new_game();
        assert_eq!(engine.position.status(), BoardStatus::EmptyBoard);
        assert_eq!(engine.difficulty(), AiLevel::Hard);
    }

    #[test]
    fn set_position_rejects_garbage() {
        let mut engine = Engine::new();
        assert!(engine.set_position("garbage").is_err());
        assert_eq!(engine.position.status(), BoardStatus::EmptyBoard);
    }

    #[test]
    fn difficulty_defaults_to_medium() {
        let mut engine = Engine::new();
        assert_eq!(engine.difficulty(), AiLevel::Medium);
        engine.set_option("Difficulty".to_string(), Some("easy".to_string()));
        assert_eq!(engine.difficulty(), AiLevel::Easy);
        engine.set_option("Difficulty".to_string(), Some("bogus".to_string()));
        assert_eq!(engine.difficulty(), AiLevel::Medium);
    }

    #[test]
    fn handle_go_outputs_a_legal_bestmove() {
        let mut engine = Engine::new();
        engine.set_position("XO..X..../o").unwrap();

        let mut output = Vec::new();
        engine.handle_go(&mut output);

        let line = String::from_utf8(output).unwrap();
        let cell: CellLoc = line
            .trim()
            .strip_prefix("bestmove ")
            .unwrap()
            .parse()
            .unwrap();
        assert!(cell < BOARD_SIZE);
        assert!(engine.position.cell_at(cell).unwrap().is_none());
    }

    #[test]
    fn handle_go_on_a_finished_game_reports_none() {
        let mut engine = Engine::new();
        engine.set_position("XXXOO..../o").unwrap();

        let mut output = Vec::new();
        engine.handle_go(&mut output);
        assert_eq!(String::from_utf8(output).unwrap().trim(), "bestmove none");
    }

    #[test]
    fn handle_move_applies_and_reports_status() {
        let mut engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_move(4, &mut output);
        assert_eq!(String::from_utf8(output).unwrap().trim(), "status in_progress");
    }

    #[test]
    fn handle_move_rejects_occupied_cells_silently_on_stdout() {
        let mut engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_move(4, &mut output);
        output.clear();
        engine.handle_move(4, &mut output);
        assert!(output.is_empty());
    }

    #[test]
    fn handle_classify_emits_the_full_index() {
        let mut engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_classify(&mut output);

        let line = String::from_utf8(output).unwrap();
        let json = line.trim().strip_prefix("classification ").unwrap();
        let cells: Vec<ClassifiedCell> = serde_json::from_str(json).unwrap();
        assert_eq!(cells.len(), BOARD_SIZE);
    }

    #[test]
    fn handle_tti_outputs_handshake() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_tti(&mut output);

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("id name oxo"));
        assert!(output_str.contains("option name Difficulty"));
        assert!(output_str.contains("protocol_version 1"));
        assert!(output_str.contains("ttiok"));
    }

    #[test]
    fn handle_isready_outputs_readyok() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_isready(&mut output);
        assert_eq!(String::from_utf8(output).unwrap().trim(), "readyok");
    }
}
