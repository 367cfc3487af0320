//! Deck & distribution engine.
//!
//! - [`Deck`]: the undealt cards. Order carries no game meaning, but it is
//!   kept stable so a seeded game replays exactly.
//! - [`build_deck`]: the full 24-card set in uniformly random order.
//! - [`deal_initial_hands`]: starting hands under the per-player-count
//!   color constraints.

pub mod distribution;

pub use distribution::{build_deck, deal_initial_hands};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{full_card_set, Card, Color, CardKey};
use crate::core::rng::RandomSource;

/// The undealt cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full 24-card set, unshuffled (Black then White for each value).
    #[must_use]
    pub fn full() -> Self {
        Self {
            cards: full_card_set().collect(),
        }
    }

    /// A deck holding exactly `cards`, in the given order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().map(Card::hidden).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn contains(&self, key: CardKey) -> bool {
        self.cards.iter().any(|c| c.key() == key)
    }

    #[must_use]
    pub fn count_color(&self, color: Color) -> usize {
        self.cards.iter().filter(|c| c.color == color).count()
    }

    #[must_use]
    pub fn has_color(&self, color: Color) -> bool {
        self.cards.iter().any(|c| c.color == color)
    }

    /// Colors with at least one card left, in table order.
    #[must_use]
    pub fn available_colors(&self) -> SmallVec<[Color; 2]> {
        Color::ALL.into_iter().filter(|&c| self.has_color(c)).collect()
    }

    /// The only color left, if exactly one remains.
    #[must_use]
    pub fn forced_color(&self) -> Option<Color> {
        match self.available_colors().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Remove a card of `color` chosen uniformly among those left.
    ///
    /// Returns `None` if no card of that color remains.
    pub fn take_random_of_color<R: RandomSource>(&mut self, color: Color, rng: &mut R) -> Option<Card> {
        let positions: SmallVec<[usize; 12]> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.color == color)
            .map(|(i, _)| i)
            .collect();

        let pick = rng.choose_index(positions.len())?;
        Some(self.cards.remove(positions[pick]))
    }

    /// Remove up to `count` cards of `color`, scanning from the tail.
    ///
    /// Takes fewer when the color runs out.
    pub fn take_from_tail(&mut self, color: Color, count: usize) -> Vec<Card> {
        let mut taken = Vec::with_capacity(count);
        let mut k = self.cards.len();
        while k > 0 && taken.len() < count {
            k -= 1;
            if self.cards[k].color == color {
                taken.push(self.cards.remove(k));
            }
        }
        taken
    }

    pub(crate) fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_full_deck() {
        let deck = Deck::full();
        assert_eq!(deck.len(), 24);
        assert_eq!(deck.count_color(Color::Black), 12);
        assert_eq!(deck.count_color(Color::White), 12);
        assert!(deck.contains((Color::White, 11)));
        assert_eq!(deck.forced_color(), None);
    }

    #[test]
    fn test_forced_color() {
        let deck = Deck::from_cards([Card::new(Color::Black, 3), Card::new(Color::Black, 8)]);
        assert_eq!(deck.forced_color(), Some(Color::Black));
        assert_eq!(deck.available_colors().as_slice(), &[Color::Black]);

        assert_eq!(Deck::default().forced_color(), None);
        assert!(Deck::default().available_colors().is_empty());
    }

    #[test]
    fn test_take_random_of_color() {
        let mut deck = Deck::full();
        let mut rng = GameRng::new(42);

        for _ in 0..12 {
            let card = deck.take_random_of_color(Color::White, &mut rng).unwrap();
            assert_eq!(card.color, Color::White);
            assert!(!deck.contains(card.key()));
        }

        assert!(!deck.has_color(Color::White));
        assert!(deck.take_random_of_color(Color::White, &mut rng).is_none());
        assert_eq!(deck.len(), 12);
    }

    #[test]
    fn test_take_from_tail() {
        let mut deck = Deck::full();

        let taken = deck.take_from_tail(Color::Black, 2);
        let keys: Vec<_> = taken.iter().map(Card::key).collect();

        assert_eq!(keys, vec![(Color::Black, 11), (Color::Black, 10)]);
        assert_eq!(deck.len(), 22);
        assert!(deck.contains((Color::White, 11)));
    }

    #[test]
    fn test_take_from_tail_starved() {
        let mut deck = Deck::from_cards([Card::new(Color::Black, 0), Card::new(Color::White, 1)]);

        let taken = deck.take_from_tail(Color::Black, 2);

        assert_eq!(taken.len(), 1);
        assert_eq!(deck.len(), 1);
        assert!(deck.take_from_tail(Color::Black, 1).is_empty());
    }
}
