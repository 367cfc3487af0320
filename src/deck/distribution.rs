//! Starting-hand distribution.
//!
//! | players | cards each | colors                                  |
//! |---------|------------|-----------------------------------------|
//! | 2 or 3  | 4          | 2 Black + 2 White                       |
//! | 4       | 3          | 2 Black + 1 White or 1 Black + 2 White  |
//!
//! The four-player split is a fair coin per player. Cards are taken from
//! the tail of the shuffled deck, Black first. If a color runs dry the deal
//! takes what is left and moves on, so a starved hand can come up short.

use tracing::{debug, warn};

use super::Deck;
use crate::core::card::{Color, Hand};
use crate::core::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::rng::RandomSource;
use crate::error::DistributionError;

/// Build the full 24-card deck in uniformly random order.
pub fn build_deck<R: RandomSource>(rng: &mut R) -> Deck {
    let mut deck = Deck::full();
    deck.shuffle(rng);
    deck
}

/// `(black, white)` cards a player should receive.
fn color_split<R: RandomSource>(player_count: usize, rng: &mut R) -> (usize, usize) {
    if player_count == 4 {
        if rng.gen_bool(0.5) {
            (2, 1)
        } else {
            (1, 2)
        }
    } else {
        (2, 2)
    }
}

/// Deal starting hands from `deck`, one per player in seating order.
///
/// Dealt cards are removed from the deck; every returned hand is sorted.
pub fn deal_initial_hands<R: RandomSource>(
    deck: &mut Deck,
    player_count: usize,
    rng: &mut R,
) -> Result<Vec<Hand>, DistributionError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(DistributionError::UnsupportedPlayerCount {
            count: player_count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        });
    }

    let mut hands = Vec::with_capacity(player_count);
    for seat in 0..player_count {
        let (black, white) = color_split(player_count, rng);

        let mut cards = deck.take_from_tail(Color::Black, black);
        cards.extend(deck.take_from_tail(Color::White, white));

        if cards.len() < black + white {
            warn!(
                seat,
                wanted = black + white,
                dealt = cards.len(),
                "deck ran out of a color while dealing"
            );
        }

        hands.push(Hand::from_cards(cards));
    }

    debug!(player_count, remaining = deck.len(), "starting hands dealt");
    Ok(hands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Card, DECK_SIZE};
    use crate::core::GameRng;

    #[test]
    fn test_build_deck_is_complete() {
        let mut rng = GameRng::new(11);
        let deck = build_deck(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        for card in crate::core::card::full_card_set() {
            assert!(deck.contains(card.key()));
        }
        assert_ne!(deck, Deck::full());
    }

    #[test]
    fn test_two_and_three_players() {
        for player_count in [2, 3] {
            let mut rng = GameRng::new(5);
            let mut deck = build_deck(&mut rng);

            let hands = deal_initial_hands(&mut deck, player_count, &mut rng).unwrap();

            assert_eq!(hands.len(), player_count);
            for hand in &hands {
                assert_eq!(hand.color_counts(), (2, 2));
                assert!(hand.is_sorted());
            }
            assert_eq!(deck.len(), DECK_SIZE - 4 * player_count);
        }
    }

    #[test]
    fn test_four_players() {
        let mut rng = GameRng::new(8);
        let mut deck = build_deck(&mut rng);

        let hands = deal_initial_hands(&mut deck, 4, &mut rng).unwrap();

        for hand in &hands {
            let counts = hand.color_counts();
            assert!(counts == (2, 1) || counts == (1, 2), "bad split {counts:?}");
        }
        assert_eq!(deck.len(), DECK_SIZE - 12);
    }

    #[test]
    fn test_rejects_player_count() {
        let mut rng = GameRng::new(1);
        let mut deck = build_deck(&mut rng);

        let err = deal_initial_hands(&mut deck, 5, &mut rng).unwrap_err();

        assert!(matches!(err, DistributionError::UnsupportedPlayerCount { count: 5, .. }));
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn test_starved_color_deals_short() {
        // Only one black card left for four players who each want one or two.
        let mut deck = Deck::from_cards(
            std::iter::once(Card::new(Color::Black, 0))
                .chain((0..=11).map(|v| Card::new(Color::White, v))),
        );
        let mut rng = GameRng::new(3);

        let hands = deal_initial_hands(&mut deck, 4, &mut rng).unwrap();

        let dealt: usize = hands.iter().map(Hand::len).sum();
        let blacks: usize = hands.iter().map(|h| h.color_counts().0).sum();
        assert_eq!(blacks, 1);
        assert!(dealt < 12);
        assert_eq!(dealt + deck.len(), 13);
    }
}
