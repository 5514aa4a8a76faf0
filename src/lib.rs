//! Oxo engine library.
//!
//! Exposes the board representation, minimax move classifier, selection
//! policy, and protocol modules for use by integration tests and the
//! binary entry point.

pub mod board;
pub mod engine;
pub mod eval;
pub mod policy;
pub mod protocol;
pub mod search;
