//! Game configuration.
//!
//! A game is configured once, before the deal:
//! - `player_count`: 2, 3 or 4 players
//! - `player_names`: optional display names (defaults to "Player 1".."Player N")
//! - `seed`: optional RNG seed; `None` draws one from entropy
//!
//! Configs are plain serde data so a host can load them from a file, or
//! build them in code with [`GameConfigBuilder`].

use serde::{Deserialize, Serialize};

use crate::error::DistributionError;

/// Fewest players the deal supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players the deal supports.
pub const MAX_PLAYERS: usize = 4;

/// Configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: usize,

    /// Display names in seating order. Empty means default names.
    #[serde(default)]
    pub player_names: Vec<String>,

    /// RNG seed. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 3,
            player_names: Vec::new(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Config for `player_count` players with default names and no seed.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    /// Check that the configuration can be dealt.
    pub fn validate(&self) -> Result<(), DistributionError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(DistributionError::UnsupportedPlayerCount {
                count: self.player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if !self.player_names.is_empty() && self.player_names.len() != self.player_count {
            return Err(DistributionError::NameCountMismatch {
                expected: self.player_count,
                got: self.player_names.len(),
            });
        }
        Ok(())
    }

    /// Display name for the player at `index`.
    #[must_use]
    pub fn player_name(&self, index: usize) -> String {
        self.player_names
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Player {}", index + 1))
    }
}

/// Builder for [`GameConfig`].
#[derive(Clone, Debug, Default)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate and return the config.
    pub fn build(self) -> Result<GameConfig, DistributionError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 3);
        assert!(config.validate().is_ok());
        assert_eq!(config.player_name(0), "Player 1");
        assert_eq!(config.player_name(2), "Player 3");
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::builder()
            .player_count(2)
            .player_names(["Ada", "Leonardo"])
            .seed(9)
            .build()
            .unwrap();

        assert_eq!(config.player_count, 2);
        assert_eq!(config.player_name(1), "Leonardo");
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_rejects_player_counts() {
        for count in [0, 1, 5, 8] {
            let err = GameConfig::new(count).validate().unwrap_err();
            assert_eq!(
                err,
                DistributionError::UnsupportedPlayerCount { count, min: 2, max: 4 }
            );
        }
        for count in 2..=4 {
            assert!(GameConfig::new(count).validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_name_mismatch() {
        let err = GameConfig::builder()
            .player_count(3)
            .player_names(["Ada"])
            .build()
            .unwrap_err();
        assert_eq!(err, DistributionError::NameCountMismatch { expected: 3, got: 1 });
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"player_count": 4}"#).unwrap();
        assert_eq!(config, GameConfig::new(4));

        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
