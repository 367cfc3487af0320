//! Core types: cards, players, phases, commands, RNG, configuration.
//!
//! These are plain data. The rules that move them between states live in
//! `deck` (dealing) and `game` (the turn state machine).

pub mod card;
pub mod player;
pub mod rng;
pub mod config;
pub mod command;
pub mod phase;

pub use card::{Card, CardKey, Color, Hand, DECK_SIZE, MAX_VALUE};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{GameConfig, GameConfigBuilder, MAX_PLAYERS, MIN_PLAYERS};
pub use command::{Command, CommandRecord};
pub use phase::Phase;
