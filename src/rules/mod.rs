//! Game-ending rules.
//!
//! The turn state machine calls [`evaluate_end_of_round`] after every turn
//! advance and moves to `Phase::GameOver` when it returns a result.

pub mod engine;

pub use engine::{evaluate_end_of_round, GameResult};
