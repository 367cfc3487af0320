//! Deck building and starting-hand distribution tests.
//!
//! These run the distribution engine across many seeds and check the
//! per-player-count color rules and card conservation.

use std::collections::HashSet;

use davinci_code::core::{Card, Color, GameRng, Hand, DECK_SIZE};
use davinci_code::deck::{build_deck, deal_initial_hands, Deck};
use davinci_code::{DistributionError, Game, GameConfig, Phase, PlayerId};

fn deal(player_count: usize, seed: u64) -> (Deck, Vec<Hand>) {
    let mut rng = GameRng::new(seed);
    let mut deck = build_deck(&mut rng);
    let hands = deal_initial_hands(&mut deck, player_count, &mut rng).unwrap();
    (deck, hands)
}

fn assert_conserved(deck: &Deck, hands: &[Hand]) {
    let mut seen = HashSet::new();
    for card in deck.iter().chain(hands.iter().flat_map(|h| h.iter())) {
        assert!(seen.insert(card.key()), "duplicate {card}");
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

/// 2 and 3 players always get 2 Black + 2 White.
#[test]
fn test_small_tables_get_two_of_each_color() {
    for player_count in [2, 3] {
        for seed in 0..50 {
            let (deck, hands) = deal(player_count, seed);

            assert_eq!(hands.len(), player_count);
            for hand in &hands {
                assert_eq!(hand.len(), 4);
                assert_eq!(hand.color_counts(), (2, 2));
            }
            assert_eq!(deck.len(), DECK_SIZE - 4 * player_count);
            assert_conserved(&deck, &hands);
        }
    }
}

/// 4 players get 3 cards split 2/1 or 1/2.
#[test]
fn test_four_players_get_three_cards() {
    let mut splits = HashSet::new();

    for seed in 0..100 {
        let (deck, hands) = deal(4, seed);

        for hand in &hands {
            let counts = hand.color_counts();
            assert!(counts == (2, 1) || counts == (1, 2), "unexpected split {counts:?}");
            splits.insert(counts);
        }
        assert_eq!(deck.len(), DECK_SIZE - 12);
        assert_conserved(&deck, &hands);
    }

    // Both splits should show up across 400 coin flips.
    assert_eq!(splits.len(), 2);
}

/// Dealt hands are in table order and hidden.
#[test]
fn test_dealt_hands_sorted_and_hidden() {
    for player_count in 2..=4 {
        let (_, hands) = deal(player_count, 99);
        for hand in &hands {
            assert!(hand.is_sorted());
            assert!(hand.iter().all(|c| !c.revealed));
        }
    }
}

/// Unsupported player counts fail and leave the deck untouched.
#[test]
fn test_rejects_unsupported_player_counts() {
    for player_count in [0, 1, 5, 6] {
        let mut rng = GameRng::new(1);
        let mut deck = build_deck(&mut rng);
        let before = deck.clone();

        let err = deal_initial_hands(&mut deck, player_count, &mut rng).unwrap_err();

        assert_eq!(
            err,
            DistributionError::UnsupportedPlayerCount {
                count: player_count,
                min: 2,
                max: 4,
            }
        );
        assert_eq!(deck, before);
    }
}

/// Color starvation: the deal takes what it can and keeps going.
#[test]
fn test_four_player_starvation_is_best_effort() {
    let cards = [
        Card::new(Color::Black, 1),
        Card::new(Color::Black, 2),
        Card::new(Color::White, 3),
        Card::new(Color::White, 4),
        Card::new(Color::White, 5),
    ];
    let mut deck = Deck::from_cards(cards);
    let mut rng = GameRng::new(12);

    let hands = deal_initial_hands(&mut deck, 4, &mut rng).unwrap();

    assert_eq!(hands.len(), 4);
    let dealt: usize = hands.iter().map(Hand::len).sum();
    assert_eq!(dealt + deck.len(), 5);
    assert!(hands.iter().all(|h| h.len() <= 3 && h.is_sorted()));
    assert!(hands.iter().any(|h| h.len() < 3));
}

/// Every card can end up anywhere: the shuffle is not biased to the build order.
#[test]
fn test_build_deck_varies_with_seed() {
    let mut first_cards = HashSet::new();
    for seed in 0..200 {
        let mut rng = GameRng::new(seed);
        let deck = build_deck(&mut rng);
        first_cards.insert(deck.iter().next().map(Card::key));
    }
    assert!(first_cards.len() > 12);
}

/// Starting a game runs the same distribution and seats players in order.
#[test]
fn test_game_start_deals_every_seat() {
    for player_count in 2..=4 {
        let config = GameConfig::builder()
            .player_count(player_count)
            .seed(31)
            .build()
            .unwrap();
        let game = Game::start(config).unwrap();

        let ids: Vec<_> = game.players().iter().map(|p| p.id).collect();
        assert_eq!(ids, PlayerId::all(player_count).collect::<Vec<_>>());
        assert_eq!(game.phase(), Phase::AwaitingDraw);
        assert!(game.players().iter().all(|p| p.drawn_card.is_none()));
        game.audit().unwrap();
    }
}
