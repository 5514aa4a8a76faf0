//! Move search and classification.
//!
//! Exhaustively evaluates every legal move of a position and exposes the
//! resulting outcome/rank index for randomized filtered queries.

pub mod classify;
pub mod minimax;

pub use classify::{
    BoardEvaluator, ClassifiedCell, MoveClass, MoveOutcome, MoveRank, OutcomeSet, RankSet,
};
