//! Cards and hands.
//!
//! ## Card
//!
//! A card is identified by its `(color, value)` pair. The full set holds one
//! card for every value `0..=11` in each color, 24 cards in total.
//!
//! ## Hand
//!
//! A player's cards, always kept in table order: ascending value, with
//! Black placed before White on equal values. Every mutation re-sorts.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Highest card value.
pub const MAX_VALUE: u8 = 11;

/// Number of cards in a complete set (12 values, 2 colors).
pub const DECK_SIZE: usize = (MAX_VALUE as usize + 1) * 2;

/// Card color.
///
/// The derived ordering puts Black before White, which is the tie-break
/// rule for hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors, in table order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Identity of a card. Unique within a game.
pub type CardKey = (Color, u8);

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub value: u8,
    /// Revealed cards are public knowledge. Revealing is irreversible.
    pub revealed: bool,
}

impl Card {
    /// Create a hidden card.
    ///
    /// # Panics
    ///
    /// Panics if `value` exceeds [`MAX_VALUE`].
    #[must_use]
    pub fn new(color: Color, value: u8) -> Self {
        assert!(value <= MAX_VALUE, "Card value must be 0-{MAX_VALUE}");
        Self {
            color,
            value,
            revealed: false,
        }
    }

    #[must_use]
    pub fn key(&self) -> CardKey {
        (self.color, self.value)
    }

    /// Same card with the revealed flag cleared.
    #[must_use]
    pub fn hidden(self) -> Self {
        Self {
            revealed: false,
            ..self
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}

/// Table ordering: ascending value, Black before White on ties.
#[must_use]
pub fn hand_order(a: &Card, b: &Card) -> Ordering {
    a.value.cmp(&b.value).then(a.color.cmp(&b.color))
}

/// Every card identity in a complete set, Black then White per value.
pub fn full_card_set() -> impl Iterator<Item = Card> {
    (0..=MAX_VALUE).flat_map(|value| Color::ALL.into_iter().map(move |color| Card::new(color, value)))
}

/// A sorted hand of cards.
///
/// Hands rarely exceed eight cards before the deck runs dry, so storage
/// stays inline in the common case.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from arbitrary cards, establishing table order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self {
            cards: cards.into_iter().collect(),
        };
        hand.sort();
        hand
    }

    /// Merge a card into the hand, keeping table order.
    pub fn insert(&mut self, card: Card) {
        self.cards.push(card);
        self.sort();
    }

    /// Reveal the card at `index`.
    ///
    /// Returns the revealed card, or `None` if the index is out of range.
    /// Revealing never changes a card's sort key, so `index` still refers
    /// to the same card afterwards.
    pub fn reveal(&mut self, index: usize) -> Option<Card> {
        let card = self.cards.get_mut(index)?;
        card.revealed = true;
        let card = *card;
        self.sort();
        Some(card)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
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
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards still hidden.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.revealed).count()
    }

    /// True when no hidden card remains (vacuously true for an empty hand).
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.cards.iter().all(|c| c.revealed)
    }

    /// Indices of cards still hidden.
    pub fn hidden_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.revealed)
            .map(|(i, _)| i)
    }

    /// `(black, white)` card counts.
    #[must_use]
    pub fn color_counts(&self) -> (usize, usize) {
        let black = self.cards.iter().filter(|c| c.color == Color::Black).count();
        (black, self.cards.len() - black)
    }

    /// Check the table-order invariant.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.cards
            .windows(2)
            .all(|w| hand_order(&w[0], &w[1]) != Ordering::Greater)
    }

    fn sort(&mut self) {
        self.cards.sort_by(hand_order);
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_card_set() {
        let cards: Vec<_> = full_card_set().collect();
        assert_eq!(cards.len(), DECK_SIZE);
        assert_eq!(cards[0], Card::new(Color::Black, 0));
        assert_eq!(cards[1], Card::new(Color::White, 0));
        assert_eq!(cards[23], Card::new(Color::White, 11));
    }

    #[test]
    #[should_panic(expected = "Card value must be 0-11")]
    fn test_card_value_out_of_range() {
        let _ = Card::new(Color::Black, 12);
    }

    #[test]
    fn test_hand_order_black_before_white() {
        let black = Card::new(Color::Black, 5);
        let white = Card::new(Color::White, 5);
        assert_eq!(hand_order(&black, &white), Ordering::Less);
        assert_eq!(hand_order(&white, &Card::new(Color::Black, 6)), Ordering::Less);
    }

    #[test]
    fn test_from_cards_sorts() {
        let hand = Hand::from_cards([
            Card::new(Color::White, 7),
            Card::new(Color::Black, 2),
            Card::new(Color::Black, 7),
            Card::new(Color::White, 0),
        ]);

        let keys: Vec<_> = hand.iter().map(Card::key).collect();
        assert_eq!(
            keys,
            vec![
                (Color::White, 0),
                (Color::Black, 2),
                (Color::Black, 7),
                (Color::White, 7),
            ]
        );
        assert!(hand.is_sorted());
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut hand = Hand::from_cards([Card::new(Color::Black, 1), Card::new(Color::White, 9)]);
        hand.insert(Card::new(Color::White, 1));

        assert_eq!(hand.get(1).map(Card::key), Some((Color::White, 1)));
        assert!(hand.is_sorted());
    }

    #[test]
    fn test_reveal() {
        let mut hand = Hand::from_cards([Card::new(Color::Black, 3), Card::new(Color::White, 4)]);

        let revealed = hand.reveal(1).unwrap();
        assert_eq!(revealed.key(), (Color::White, 4));
        assert!(revealed.revealed);
        assert!(hand.get(1).unwrap().revealed);
        assert!(!hand.get(0).unwrap().revealed);
        assert_eq!(hand.hidden_count(), 1);
        assert!(!hand.is_fully_revealed());

        assert!(hand.reveal(5).is_none());
        hand.reveal(0);
        assert!(hand.is_fully_revealed());
    }

    #[test]
    fn test_color_counts_and_hidden_indices() {
        let mut hand = Hand::from_cards([
            Card::new(Color::Black, 0),
            Card::new(Color::Black, 4),
            Card::new(Color::White, 8),
        ]);
        hand.reveal(1);

        assert_eq!(hand.color_counts(), (2, 1));
        assert_eq!(hand.hidden_indices().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_hand_serde() {
        let hand = Hand::from_cards([Card::new(Color::White, 2), Card::new(Color::Black, 10)]);
        let json = serde_json::to_string(&hand).unwrap();
        let restored: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, restored);
    }
}
