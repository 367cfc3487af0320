//! Error types.
//!
//! Every rejected command is a local, recoverable [`GameError`]: the game
//! state is left untouched and the caller can surface the message and keep
//! playing. [`DistributionError`] is the only error that prevents a game
//! from starting.
//!
//! Messages number seats and cards from 1, like the game's own status
//! messages. Payload fields keep the 0-based values.

use thiserror::Error;

use crate::core::{Color, PlayerId};

/// Configuration that the distribution engine cannot deal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    #[error("unsupported player count {count} (expected {min}-{max})")]
    UnsupportedPlayerCount { count: usize, min: usize, max: usize },
    #[error("expected {expected} player names, got {got}")]
    NameCountMismatch { expected: usize, got: usize },
}

/// A rejected command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("you cannot guess your own cards")]
    CannotGuessSelf,
    #[error("card {} of {player} is already revealed", .card_index + 1)]
    CardAlreadyRevealed { player: PlayerId, card_index: usize },
    #[error("draw a card before guessing")]
    MustDrawFirst,
    #[error("a card was already drawn this turn")]
    AlreadyDrew,
    #[error("no {0} cards left in the deck")]
    NoCardsOfColor(Color),
    #[error("card {} cannot be revealed as a penalty", .card_index + 1)]
    InvalidPenaltySelection { card_index: usize },
    #[error("guess {0} is outside 0-11")]
    InvalidGuessValue(u8),
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("{player} has no card {}", .card_index + 1)]
    CardIndexOutOfRange { player: PlayerId, card_index: usize },
    #[error("{command} is not allowed while {phase}")]
    IllegalPhaseTransition {
        phase: &'static str,
        command: &'static str,
    },
    #[error(transparent)]
    Distribution(#[from] DistributionError),
}

/// Category of a [`GameError`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CannotGuessSelf,
    CardAlreadyRevealed,
    MustDrawFirst,
    AlreadyDrew,
    NoCardsOfColor,
    InvalidPenaltySelection,
    InvalidGuessValue,
    UnknownPlayer,
    CardIndexOutOfRange,
    IllegalPhaseTransition,
    DistributionError,
}

impl GameError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::CannotGuessSelf => ErrorKind::CannotGuessSelf,
            GameError::CardAlreadyRevealed { .. } => ErrorKind::CardAlreadyRevealed,
            GameError::MustDrawFirst => ErrorKind::MustDrawFirst,
            GameError::AlreadyDrew => ErrorKind::AlreadyDrew,
            GameError::NoCardsOfColor(_) => ErrorKind::NoCardsOfColor,
            GameError::InvalidPenaltySelection { .. } => ErrorKind::InvalidPenaltySelection,
            GameError::InvalidGuessValue(_) => ErrorKind::InvalidGuessValue,
            GameError::UnknownPlayer(_) => ErrorKind::UnknownPlayer,
            GameError::CardIndexOutOfRange { .. } => ErrorKind::CardIndexOutOfRange,
            GameError::IllegalPhaseTransition { .. } => ErrorKind::IllegalPhaseTransition,
            GameError::Distribution(_) => ErrorKind::DistributionError,
        }
    }
}

/// A broken game-state invariant, reported by `Game::audit`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{color} {value} is held in more than one place")]
    DuplicateCard { color: Color, value: u8 },
    #[error("{color} {value} is missing from the table")]
    MissingCard { color: Color, value: u8 },
    #[error("hand of {0} is out of order")]
    UnsortedHand(PlayerId),
    #[error("{0} holds a drawn card outside their turn")]
    StrayDrawnCard(PlayerId),
}
