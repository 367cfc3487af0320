//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are 0-based, stable, and follow seating
//! (and therefore turn) order.
//!
//! ## Player
//!
//! A seat at the table: display name, sorted hand, and the card drawn this
//! turn that has not yet been merged into the hand.

use serde::{Deserialize, Serialize};

use super::card::{Card, Hand};

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`, shown
/// as "Player 1" to match default seat names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use davinci_code::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", u16::from(self.0) + 1)
    }
}

impl From<u8> for PlayerId {
    fn from(id: u8) -> Self {
        PlayerId(id)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand: Hand,
    /// Card drawn this turn. Known to its owner, merged into `hand` when
    /// the turn ends.
    pub drawn_card: Option<Card>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, hand: Hand) -> Self {
        Self {
            id,
            name: name.into(),
            hand,
            drawn_card: None,
        }
    }

    /// Whether any card in the hand is still hidden.
    ///
    /// A pending drawn card does not count.
    #[must_use]
    pub fn has_hidden_cards(&self) -> bool {
        !self.hand.is_fully_revealed()
    }

    /// Remove the pending drawn card without merging it.
    pub fn take_drawn_card(&mut self) -> Option<Card> {
        self.drawn_card.take()
    }

    /// Merge the pending drawn card into the hand.
    ///
    /// Returns the merged card, if there was one.
    pub fn merge_drawn_card(&mut self) -> Option<Card> {
        let card = self.take_drawn_card()?.hidden();
        self.hand.insert(card);
        Some(card)
    }

    /// Number of cards the player holds, including the pending drawn card.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + usize::from(self.drawn_card.is_some())
    }
}
