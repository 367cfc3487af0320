//! Terminal-state detection.
//!
//! The game only ends at a turn boundary once the deck is exhausted:
//! - exactly one player still holds a hidden card: that player wins
//! - nobody holds a hidden card: the game is a draw
//! - otherwise play continues
//!
//! Players whose hands are fully revealed are never eliminated; they keep
//! taking turns until the game ends.

use serde::{Deserialize, Serialize};

use crate::core::player::{Player, PlayerId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// End-of-round evaluation, run after every turn advance.
///
/// Returns `Some(result)` if the game has ended, `None` if it continues.
#[must_use]
pub fn evaluate_end_of_round(deck_is_empty: bool, players: &[Player]) -> Option<GameResult> {
    if !deck_is_empty {
        return None;
    }

    let mut holders = players.iter().filter(|p| p.has_hidden_cards());
    match (holders.next(), holders.next()) {
        (None, _) => Some(GameResult::Draw),
        (Some(only), None) => Some(GameResult::Winner(only.id)),
        _ => None,
    }
}
