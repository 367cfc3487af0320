//! Read-only views of a game.
//!
//! A snapshot carries true card values together with each card's
//! `revealed` flag. Deciding what a given viewer may see (own hand,
//! debug reveal-all) is left to the presentation layer.

use serde::{Deserialize, Serialize};

use super::Game;
use crate::core::{Phase, Player, PlayerId, RandomSource};
use crate::rules::GameResult;

/// Owned copy of the observable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<Player>,
    pub current_player: PlayerId,
    pub deck_size: usize,
    pub phase: Phase,
    pub message: String,
    pub result: Option<GameResult>,
    pub turn: u32,
}

impl GameSnapshot {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.and_then(|r| r.winner())
    }
}

impl<R: RandomSource> Game<R> {
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            current_player: self.current_id(),
            deck_size: self.deck.len(),
            phase: self.phase,
            message: self.message.clone(),
            result: self.result(),
            turn: self.turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{GameConfig, PlayerId};
    use crate::game::{Game, GameSnapshot};

    #[test]
    fn test_snapshot_reflects_state() {
        let config = GameConfig::builder().player_count(3).seed(21).build().unwrap();
        let game = Game::start(config).unwrap();

        let snapshot = game.snapshot();

        assert_eq!(snapshot.players.len(), 3);
        assert_eq!(snapshot.current_player, PlayerId::new(0));
        assert_eq!(snapshot.deck_size, 12);
        assert_eq!(snapshot.turn, 1);
        assert_eq!(snapshot.winner(), None);
        assert_eq!(snapshot.message, game.message());
    }

    #[test]
    fn test_snapshot_serialization() {
        let config = GameConfig::builder().player_count(2).seed(4).build().unwrap();
        let mut game = Game::start(config).unwrap();
        game.draw().unwrap();

        let snapshot = game.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, restored);
    }
}
