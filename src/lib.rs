//! # davinci-code
//!
//! Rules engine for the Da Vinci Code deduction card game.
//!
//! Players hold concealed numbered cards in two colors, take turns drawing,
//! guess the values of opponents' cards, and reveal their own cards as a
//! penalty for wrong guesses. Once the deck is exhausted, the last player
//! with a hidden card wins.
//!
//! ## Design Principles
//!
//! 1. **One authoritative aggregate**: `Game` owns every card. Hosts send
//!    `Command`s and read snapshots; nothing else mutates state.
//!
//! 2. **Atomic commands**: a command fully applies or is rejected with a
//!    `GameError` before any mutation.
//!
//! 3. **Injected randomness**: the shuffle, the four-player color split and
//!    every draw go through a `RandomSource`, so seeded games replay exactly.
//!
//! ## Modules
//!
//! - `core`: Cards, hands, players, phases, commands, RNG, configuration
//! - `deck`: Deck building and starting-hand distribution
//! - `game`: The `Game` aggregate and its turn state machine
//! - `rules`: End-of-round evaluation and game results
//! - `error`: Error types

pub mod core;
pub mod deck;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Card, CardKey, Color, Hand,
    Player, PlayerId,
    GameRng, GameRngState, RandomSource,
    GameConfig, GameConfigBuilder,
    Command, CommandRecord,
    Phase,
};

pub use crate::deck::{build_deck, deal_initial_hands, Deck};

pub use crate::error::{DistributionError, ErrorKind, GameError, InvariantViolation};

pub use crate::game::{Game, GameSnapshot, Outcome, TurnEnd};

pub use crate::rules::{evaluate_end_of_round, GameResult};
