//! Consistency checks over the whole table.

use rustc_hash::FxHashSet;

use super::Game;
use crate::core::card::{full_card_set, Card, CardKey};
use crate::core::RandomSource;
use crate::error::InvariantViolation;

impl<R: RandomSource> Game<R> {
    /// Verify the table invariants.
    ///
    /// - deck, hands and pending drawn cards together hold each of the 24
    ///   cards exactly once
    /// - every hand is in table order
    /// - only the current player may hold a drawn card
    pub fn audit(&self) -> Result<(), InvariantViolation> {
        let mut seen: FxHashSet<CardKey> = FxHashSet::default();
        let mut note = |card: &Card| {
            if seen.insert(card.key()) {
                Ok(())
            } else {
                Err(InvariantViolation::DuplicateCard {
                    color: card.color,
                    value: card.value,
                })
            }
        };

        for card in self.deck.iter() {
            note(card)?;
        }
        for player in &self.players {
            for card in &player.hand {
                note(card)?;
            }
            if let Some(card) = &player.drawn_card {
                note(card)?;
            }
        }

        if let Some(missing) = full_card_set().find(|c| !seen.contains(&c.key())) {
            return Err(InvariantViolation::MissingCard {
                color: missing.color,
                value: missing.value,
            });
        }

        for (index, player) in self.players.iter().enumerate() {
            if !player.hand.is_sorted() {
                return Err(InvariantViolation::UnsortedHand(player.id));
            }
            if player.drawn_card.is_some() && index != self.current {
                return Err(InvariantViolation::StrayDrawnCard(player.id));
            }
        }

        Ok(())
    }
}
