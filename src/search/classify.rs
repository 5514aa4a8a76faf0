//! Move classification index and randomized filtered queries.
//!
//! `BoardEvaluator::calc_board` grades every empty cell of a position by
//! the outcome it guarantees under optimal play (win, tie, lose) and a
//! quality band within that outcome (best, mid, worst). The index is
//! rebuilt from scratch on every call and answered read-only by
//! `rand_cell_query`, which picks uniformly among the cells matching an
//! outcome/rank filter.

use std::ops::BitOr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::minimax::evaluate_move;
use crate::board::{CellLoc, MatchState, BOARD_SIZE};
use crate::eval::open_lines;

/// The game result a move guarantees for the acting player when both
/// sides play optimally from there on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    Win,
    Tie,
    Lose,
}

impl MoveOutcome {
    const fn bit(self) -> u8 {
        match self {
            MoveOutcome::Win => 1,
            MoveOutcome::Tie => 2,
            MoveOutcome::Lose => 4,
        }
    }

    const fn index(self) -> usize {
        match self {
            MoveOutcome::Win => 0,
            MoveOutcome::Tie => 1,
            MoveOutcome::Lose => 2,
        }
    }
}

/// Quality band of a move relative to other moves with the same outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveRank {
    Best,
    Mid,
    Worst,
}

impl MoveRank {
    const fn bit(self) -> u8 {
        match self {
            MoveRank::Best => 1,
            MoveRank::Mid => 2,
            MoveRank::Worst => 4,
        }
    }
}

/// A set of move outcomes, combined with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeSet(u8);

impl OutcomeSet {
    pub const WIN: OutcomeSet = OutcomeSet(MoveOutcome::Win.bit());
    pub const TIE: OutcomeSet = OutcomeSet(MoveOutcome::Tie.bit());
    pub const LOSE: OutcomeSet = OutcomeSet(MoveOutcome::Lose.bit());
    pub const ANY: OutcomeSet = OutcomeSet(1 | 2 | 4);

    /// Returns true if `outcome` is in the set.
    pub const fn contains(self, outcome: MoveOutcome) -> bool {
        self.0 & outcome.bit() != 0
    }
}

impl BitOr for OutcomeSet {
    type Output = OutcomeSet;

    fn bitor(self, rhs: OutcomeSet) -> OutcomeSet {
        OutcomeSet(self.0 | rhs.0)
    }
}

/// A set of move ranks, combined with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankSet(u8);

impl RankSet {
    pub const BEST: RankSet = RankSet(MoveRank::Best.bit());
    pub const MID: RankSet = RankSet(MoveRank::Mid.bit());
    pub const WORST: RankSet = RankSet(MoveRank::Worst.bit());
    pub const ANY: RankSet = RankSet(1 | 2 | 4);

    /// Returns true if `rank` is in the set.
    pub const fn contains(self, rank: MoveRank) -> bool {
        self.0 & rank.bit() != 0
    }
}

impl BitOr for RankSet {
    type Output = RankSet;

    fn bitor(self, rhs: RankSet) -> RankSet {
        RankSet(self.0 | rhs.0)
    }
}

/// The classification of one empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveClass {
    pub outcome: MoveOutcome,
    pub rank: MoveRank,
}

/// One entry of the classification index, as exposed to callers and the
/// protocol layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCell {
    pub cell: CellLoc,
    pub outcome: MoveOutcome,
    pub rank: MoveRank,
}

/// Exhaustive move classifier for one position at a time.
///
/// The evaluator starts without an index; `calc_board` must run before
/// the first query. Each call discards the previous index entirely.
pub struct BoardEvaluator {
    index: Option<[Option<MoveClass>; BOARD_SIZE]>,
}

impl Default for BoardEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardEvaluator {
    /// Creates an evaluator with no classification index yet.
    pub fn new() -> Self {
        BoardEvaluator { index: None }
    }

    /// Rebuilds the classification index for `state`.
    ///
    /// Every empty cell of a non-terminal position receives exactly one
    /// outcome/rank pair; a terminal position yields an empty index.
    /// The input state is only read.
    pub fn calc_board(&mut self, state: &MatchState) {
        let mut index = [None; BOARD_SIZE];

        if !state.status().is_terminal() {
            let player = state.active_player();

            // First pass: outcome plus a per-class quality metric where
            // higher is better. Wins grade on negated plies (faster is
            // better), losses on plies (slower is better), ties on the
            // open-line count through the cell.
            let mut graded: Vec<(CellLoc, MoveOutcome, i16)> = Vec::new();
            for loc in state.legal_moves() {
                let eval = evaluate_move(state, loc);
                let (outcome, quality) = match eval.value {
                    1 => (MoveOutcome::Win, -(eval.plies as i16)),
                    -1 => (MoveOutcome::Lose, eval.plies as i16),
                    _ => (MoveOutcome::Tie, open_lines(state, loc, player) as i16),
                };
                graded.push((loc, outcome, quality));
            }

            // Second pass: band each class by its quality extremes. The
            // class best is Best, the class worst is Worst when distinct,
            // everything between is Mid. A single-valued class is all Best.
            let mut bounds: [Option<(i16, i16)>; 3] = [None; 3];
            for &(_, outcome, quality) in &graded {
                let entry = &mut bounds[outcome.index()];
                *entry = match *entry {
                    None => Some((quality, quality)),
                    Some((lo, hi)) => Some((lo.min(quality), hi.max(quality))),
                };
            }
            for &(loc, outcome, quality) in &graded {
                let (lo, hi) = bounds[outcome.index()].unwrap();
                let rank = if quality == hi {
                    MoveRank::Best
                } else if quality == lo {
                    MoveRank::Worst
                } else {
                    MoveRank::Mid
                };
                index[loc] = Some(MoveClass { outcome, rank });
            }
        }

        self.index = Some(index);
    }

    /// Returns the classification of one cell, or `None` for occupied
    /// cells and cells of a terminal position.
    ///
    /// Panics if called before the first `calc_board`.
    pub fn classification(&self, loc: CellLoc) -> Option<MoveClass> {
        let index = self
            .index
            .as_ref()
            .expect("classification queried before calc_board");
        index.get(loc).copied().flatten()
    }

    /// Returns the full index in cell order.
    ///
    /// Panics if called before the first `calc_board`.
    pub fn classified_cells(&self) -> Vec<ClassifiedCell> {
        let index = self
            .index
            .as_ref()
            .expect("classified_cells queried before calc_board");
        index
            .iter()
            .enumerate()
            .filter_map(|(cell, class)| {
                class.map(|c| ClassifiedCell {
                    cell,
                    outcome: c.outcome,
                    rank: c.rank,
                })
            })
            .collect()
    }

    /// Picks uniformly at random among the classified cells whose outcome
    /// and rank both match the given sets. Returns `None` when no cell
    /// matches. Read-only; may be called repeatedly against one index.
    ///
    /// Panics if called before the first `calc_board`.
    pub fn rand_cell_query(
        &self,
        outcomes: OutcomeSet,
        ranks: RankSet,
        rng: &mut impl Rng,
    ) -> Option<CellLoc> {
        let index = self
            .index
            .as_ref()
            .expect("rand_cell_query called before calc_board");

        let candidates: Vec<CellLoc> = index
            .iter()
            .enumerate()
            .filter_map(|(loc, class)| class.map(|c| (loc, c)))
            .filter(|(_, c)| outcomes.contains(c.outcome) && ranks.contains(c.rank))
            .map(|(loc, _)| loc)
            .collect();

        if candidates.is_empty() {
            None
        } else {
            Some(candidates[rng.gen_range(0..candidates.len())])
        }
    }
}
