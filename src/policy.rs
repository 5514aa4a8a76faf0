//! Move-selection policy on top of the board evaluator.
//!
//! Three difficulty tiers. On an empty board each tier opens with its
//! own weighted preference among center, corners, and edges; afterwards
//! each tier combines one or two filtered evaluator queries, with a
//! weighted coin-flip between them on the medium tier.

use rand::Rng;

use crate::board::{BoardStatus, CellLoc, MatchState, CENTER, CORNERS, EDGES};
use crate::search::{BoardEvaluator, OutcomeSet, RankSet};

/// Playing strength of the automated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiLevel {
    Easy,
    Medium,
    Hard,
}

impl AiLevel {
    /// Returns the lowercase option name of the level.
    pub const fn name(self) -> &'static str {
        match self {
            AiLevel::Easy => "easy",
            AiLevel::Medium => "medium",
            AiLevel::Hard => "hard",
        }
    }

    /// Parses a level from its option name.
    pub fn from_name(name: &str) -> Option<AiLevel> {
        match name {
            "easy" => Some(AiLevel::Easy),
            "medium" => Some(AiLevel::Medium),
            "hard" => Some(AiLevel::Hard),
            _ => None,
        }
    }
}

/// Picks `a` with probability `ratio`, otherwise `b`. Ratios at or
/// beyond the ends of the unit interval pick unconditionally.
fn ratio_pick<T>(rng: &mut impl Rng, ratio: f64, a: T, b: T) -> T {
    if ratio >= 1.0 {
        a
    } else if ratio <= 0.0 {
        b
    } else if rng.gen_bool(ratio) {
        a
    } else {
        b
    }
}

/// Selects the opening cell for an empty board according to the tier's
/// center/edge/corner weights.
fn opening_move(level: AiLevel, rng: &mut impl Rng) -> CellLoc {
    let corner = CORNERS[rng.gen_range(0..CORNERS.len())];
    let edge = EDGES[rng.gen_range(0..EDGES.len())];

    match level {
        // 75% center, 20% edge, 5% corner.
        AiLevel::Easy => {
            let other = ratio_pick(rng, 0.80, edge, corner);
            ratio_pick(rng, 0.75, CENTER, other)
        }
        // 40% edge, 30% corner, 30% center.
        AiLevel::Medium => {
            let other = ratio_pick(rng, 0.50, corner, CENTER);
            ratio_pick(rng, 0.40, edge, other)
        }
        // 80% corner, 10% edge, 10% center.
        AiLevel::Hard => {
            let other = ratio_pick(rng, 0.50, edge, CENTER);
            ratio_pick(rng, 0.80, corner, other)
        }
    }
}

/// Chooses a move for the active player, or `None` when the game has
/// already ended.
pub fn choose_move(level: AiLevel, state: &MatchState, rng: &mut impl Rng) -> Option<CellLoc> {
    match state.status() {
        BoardStatus::EmptyBoard => Some(opening_move(level, rng)),
        BoardStatus::InProgress => {
            let mut evaluator = BoardEvaluator::new();
            evaluator.calc_board(state);
            evaluated_move(level, &evaluator, rng)
        }
        _ => None,
    }
}

/// Queries the evaluated index according to the tier.
fn evaluated_move(
    level: AiLevel,
    evaluator: &BoardEvaluator,
    rng: &mut impl Rng,
) -> Option<CellLoc> {
    match level {
        // Any move at all.
        AiLevel::Easy => evaluator.rand_cell_query(OutcomeSet::ANY, RankSet::ANY, rng),

        // 80% a winning or tying move, 20% a deliberately weaker one.
        // If either query comes up empty the other is taken; the final
        // unfiltered query covers positions where every move loses at
        // the same depth and both filters are empty.
        AiLevel::Medium => {
            let smarter =
                evaluator.rand_cell_query(OutcomeSet::WIN | OutcomeSet::TIE, RankSet::ANY, rng);
            let weaker = evaluator.rand_cell_query(
                OutcomeSet::LOSE | OutcomeSet::TIE,
                RankSet::MID | RankSet::WORST,
                rng,
            );
            match (smarter, weaker) {
                (Some(s), Some(w)) => Some(ratio_pick(rng, 0.80, s, w)),
                (Some(s), None) => Some(s),
                (None, Some(w)) => Some(w),
                (None, None) => evaluator.rand_cell_query(OutcomeSet::ANY, RankSet::ANY, rng),
            }
        }

        // The best winning move, else the best tying move, else the
        // loss that holds out longest.
        AiLevel::Hard => evaluator
            .rand_cell_query(OutcomeSet::WIN, RankSet::BEST, rng)
            .or_else(|| evaluator.rand_cell_query(OutcomeSet::TIE, RankSet::BEST, rng))
            .or_else(|| evaluator.rand_cell_query(OutcomeSet::LOSE, RankSet::BEST, rng)),
    }
}
