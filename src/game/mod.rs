//! The game aggregate and its turn state machine.
//!
//! A [`Game`] owns the whole table: players, deck, phase, and the random
//! source. The distribution engine deals it once at start (and again on
//! reset); afterwards only [`Game::apply`] mutates it.
//!
//! ## Commands
//!
//! Every command either fully applies its transition or is rejected with a
//! [`GameError`] before anything changes:
//!
//! ```
//! use davinci_code::{Command, Game, GameConfig, Phase, PlayerId};
//!
//! let config = GameConfig::builder().player_count(2).seed(7).build().unwrap();
//! let mut game = Game::start(config).unwrap();
//!
//! // Guessing before drawing is rejected and changes nothing.
//! let before = game.snapshot();
//! assert!(game.select_guess_target(PlayerId::new(1), 0).is_err());
//! assert_eq!(game.snapshot(), before);
//!
//! game.apply(Command::Draw).unwrap();
//! assert_eq!(game.phase(), Phase::AwaitingColorChoice);
//! ```
//!
//! ## Randomness
//!
//! `Game` is generic over its [`RandomSource`]. `Game::start` uses a
//! [`GameRng`] seeded from the config; `Game::with_rng` accepts any source.

mod audit;
mod snapshot;
mod turn;

pub use snapshot::GameSnapshot;
pub use turn::{Outcome, TurnEnd};

use im::Vector;
use tracing::{debug, info};

use crate::core::{
    Color, Command, CommandRecord, GameConfig, GameRng, Phase, Player, PlayerId, RandomSource,
};
use crate::deck::{build_deck, deal_initial_hands, Deck};
use crate::error::GameError;
use crate::rules::GameResult;

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    config: GameConfig,
    players: Vec<Player>,
    current: usize,
    deck: Deck,
    phase: Phase,
    message: String,
    /// Turn number (starts at 1).
    turn: u32,
    /// Commands applied within the current turn.
    sequence: u32,
    history: Vector<CommandRecord>,
    rng: R,
}

impl Game<GameRng> {
    /// Start a game, seeding the RNG from `config.seed` (or entropy).
    pub fn start(config: GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> Game<R> {
    /// Start a game drawing all randomness from `rng`.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let (deck, players) = deal_table(&config, &mut rng)?;

        let mut game = Self {
            config,
            players,
            current: 0,
            deck,
            phase: Phase::AwaitingDraw,
            message: String::new(),
            turn: 1,
            sequence: 0,
            history: Vector::new(),
            rng,
        };
        game.message = game.turn_prompt();

        info!(
            players = game.players.len(),
            deck = game.deck.len(),
            "game started"
        );
        Ok(game)
    }

    /// Apply a command for the current player.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, GameError> {
        let player = self.current_id();
        let (turn, sequence) = (self.turn, self.sequence);

        let result = match command {
            Command::Draw => self.handle_draw(),
            Command::ChooseDrawColor(color) => self.handle_choose_draw_color(color),
            Command::BeginGuess => self.handle_begin_guess(),
            Command::SelectGuessTarget { player, card_index } => {
                self.handle_select_guess_target(player, card_index)
            }
            Command::SubmitGuess(value) => self.handle_submit_guess(value),
            Command::CancelGuess => self.handle_cancel_guess(),
            Command::SelectPenaltyCard(card_index) => self.handle_select_penalty_card(card_index),
            Command::ConfirmPenaltyAndEndTurn => self.handle_confirm_penalty(),
            Command::EndTurn => self.handle_end_turn(),
            Command::Reset => self.handle_reset(),
        };

        match &result {
            Ok(outcome) => {
                if command != Command::Reset {
                    self.history
                        .push_back(CommandRecord::new(player, command, turn, sequence));
                    if self.turn == turn {
                        self.sequence += 1;
                    }
                }
                debug!(%player, %command, ?outcome, phase = %self.phase, "command applied");
            }
            Err(err) => {
                debug!(%player, %command, ?err, phase = %self.phase, "command rejected");
            }
        }

        result
    }

    // === Command shorthands ===

    pub fn draw(&mut self) -> Result<Outcome, GameError> {
        self.apply(Command::Draw)
    }

    pub fn choose_draw_color(&mut self, color: Color) -> Result<Outcome, GameError> {
        self.apply(Command::ChooseDrawColor(color))
    }

    pub fn begin_guess(&mut self) -> Result<Outcome, GameError> {
        self.apply(Command::BeginGuess)
    }

    pub fn select_guess_target(&mut self, player: PlayerId, card_index: usize) -> Result<Outcome, GameError> {
        self.apply(Command::SelectGuessTarget { player, card_index })
    }

    pub fn submit_guess(&mut self, value: u8) -> Result<Outcome, GameError> {
        self.apply(Command::SubmitGuess(value))
    }

    pub fn cancel_guess(&mut self) -> Result<Outcome, GameError> {
        self.apply(Command::CancelGuess)
    }

    pub fn select_penalty_card(&mut self, card_index: usize) -> Result<Outcome, GameError> {
        self.apply(Command::SelectPenaltyCard(card_index))
    }

    pub fn confirm_penalty_and_end_turn(&mut self) -> Result<Outcome, GameError> {
        self.apply(Command::ConfirmPenaltyAndEndTurn)
    }

    pub fn end_turn(&mut self) -> Result<Outcome, GameError> {
        self.apply(Command::EndTurn)
    }

    pub fn reset(&mut self) -> Result<Outcome, GameError> {
        self.apply(Command::Reset)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        self.players[self.current].id
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last user-facing status message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.result()?.winner().and_then(|id| self.player(id))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_game_over()
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Commands applied since the last deal.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Status line for the start of the current player's turn.
    fn turn_prompt(&self) -> String {
        let name = &self.current_player().name;
        if self.deck.is_empty() {
            format!("{name}'s turn. The deck is empty: guess or end the turn.")
        } else {
            format!("{name}'s turn. Draw a card.")
        }
    }

    fn handle_reset(&mut self) -> Result<Outcome, GameError> {
        let (deck, players) = deal_table(&self.config, &mut self.rng)?;

        self.players = players;
        self.deck = deck;
        self.current = 0;
        self.phase = Phase::AwaitingDraw;
        self.turn = 1;
        self.sequence = 0;
        self.history = Vector::new();
        self.message = self.turn_prompt();

        info!(players = self.players.len(), "game reset");
        Ok(Outcome::Reset)
    }
}

/// Run the distribution engine for `config`.
fn deal_table<R: RandomSource>(config: &GameConfig, rng: &mut R) -> Result<(Deck, Vec<Player>), GameError> {
    let mut deck = build_deck(rng);
    let hands = deal_initial_hands(&mut deck, config.player_count, rng)?;

    let players = hands
        .into_iter()
        .zip(PlayerId::all(config.player_count))
        .map(|(hand, id)| Player::new(id, config.player_name(id.index()), hand))
        .collect();

    Ok((deck, players))
}
