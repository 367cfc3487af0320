//! Turn phases.
//!
//! One sum type drives which commands are legal. Pending selections (the
//! guess target, the card revealed as a penalty, the final result) live in
//! the variant that needs them, so they cannot outlive their phase.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::player::PlayerId;
use crate::rules::GameResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Start of a turn.
    AwaitingDraw,
    /// Both colors remain in the deck; the player picks one.
    AwaitingColorChoice,
    /// A card was drawn or a guess was right: guess (again) or pass.
    AwaitingGuessOrEndTurn,
    /// Guess mode entered, no card picked yet.
    AwaitingGuessTarget,
    /// A target card is selected; waiting for the guessed value.
    AwaitingGuessValue { target: PlayerId, card_index: usize },
    /// Wrong guess: the player must reveal one of their own hidden cards.
    AwaitingPenaltyCardChoice,
    /// Penalty card revealed; waiting for acknowledgement.
    AwaitingPenaltyConfirmation { revealed: Card },
    GameOver(GameResult),
}

impl Phase {
    /// Short human-readable description.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Phase::AwaitingDraw => "awaiting draw",
            Phase::AwaitingColorChoice => "awaiting color choice",
            Phase::AwaitingGuessOrEndTurn => "awaiting guess or end of turn",
            Phase::AwaitingGuessTarget => "awaiting guess target",
            Phase::AwaitingGuessValue { .. } => "awaiting guess value",
            Phase::AwaitingPenaltyCardChoice => "awaiting penalty card choice",
            Phase::AwaitingPenaltyConfirmation { .. } => "awaiting penalty confirmation",
            Phase::GameOver(_) => "game over",
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
