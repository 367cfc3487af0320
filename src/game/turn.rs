//! Turn state machine transitions.
//!
//! ```text
//! AwaitingDraw ──draw──> AwaitingColorChoice ──choose──┐
//!      │  (one color left: forced draw)                 v
//!      └──────────────────────────────> AwaitingGuessOrEndTurn <──correct──┐
//!                                         │        │                       │
//!                                    end turn   select target ──> AwaitingGuessValue
//!                                         │                                │ wrong
//!                                         v                                v
//!                                  next player <──confirm── AwaitingPenalty{CardChoice,Confirmation}
//! ```
//!
//! Each handler validates everything it needs before its first mutation.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::Game;
use crate::core::card::{Card, MAX_VALUE};
use crate::core::{Color, Command, Phase, PlayerId, RandomSource};
use crate::error::GameError;
use crate::rules::{evaluate_end_of_round, GameResult};

/// What a successfully applied command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The deck is empty; nothing was drawn.
    DeckEmpty,
    /// Both colors remain; waiting for `ChooseDrawColor`.
    ColorChoiceRequired,
    /// A card was drawn and is pending for the current player.
    Drew(Card),
    GuessStarted,
    TargetSelected { target: PlayerId, card_index: usize },
    /// Right value; the target card is now revealed.
    GuessCorrect { target: PlayerId, card: Card },
    /// Wrong value; the guesser must reveal a card of their own.
    GuessIncorrect,
    /// Wrong value, but the guesser had nothing left to reveal.
    GuessIncorrectNoPenalty(TurnEnd),
    GuessCancelled,
    PenaltyRevealed(Card),
    TurnEnded(TurnEnd),
    Reset,
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEnd {
    /// Player whose turn it is now.
    pub next: PlayerId,
    /// Set when the end-of-round evaluation finished the game.
    pub result: Option<GameResult>,
}

impl<R: RandomSource> Game<R> {
    pub(super) fn handle_draw(&mut self) -> Result<Outcome, GameError> {
        if !self.phase.is_game_over() && self.current_player().drawn_card.is_some() {
            return Err(GameError::AlreadyDrew);
        }
        self.expect_phase(Command::Draw, matches!(self.phase, Phase::AwaitingDraw))?;

        if self.deck.is_empty() {
            self.message = "The deck is empty. Guess a card or end the turn.".to_string();
            return Ok(Outcome::DeckEmpty);
        }

        match self.deck.forced_color() {
            Some(color) => self.draw_color(color),
            None => {
                self.phase = Phase::AwaitingColorChoice;
                self.message = format!("{}, choose a color to draw.", self.current_player().name);
                Ok(Outcome::ColorChoiceRequired)
            }
        }
    }

    pub(super) fn handle_choose_draw_color(&mut self, color: Color) -> Result<Outcome, GameError> {
        self.expect_phase(
            Command::ChooseDrawColor(color),
            matches!(self.phase, Phase::AwaitingColorChoice),
        )?;
        if !self.deck.has_color(color) {
            return Err(GameError::NoCardsOfColor(color));
        }
        self.draw_color(color)
    }

    pub(super) fn handle_begin_guess(&mut self) -> Result<Outcome, GameError> {
        if matches!(self.phase, Phase::AwaitingGuessTarget) {
            return Err(self.illegal(Command::BeginGuess));
        }
        self.guess_gate(Command::BeginGuess)?;

        self.phase = Phase::AwaitingGuessTarget;
        self.message = "Select an opponent's hidden card to guess.".to_string();
        Ok(Outcome::GuessStarted)
    }

    pub(super) fn handle_select_guess_target(
        &mut self,
        target: PlayerId,
        card_index: usize,
    ) -> Result<Outcome, GameError> {
        if target == self.current_id() {
            return Err(GameError::CannotGuessSelf);
        }
        self.guess_gate(Command::SelectGuessTarget {
            player: target,
            card_index,
        })?;

        let player = self.player(target).ok_or(GameError::UnknownPlayer(target))?;
        let card = player
            .hand
            .get(card_index)
            .ok_or(GameError::CardIndexOutOfRange {
                player: target,
                card_index,
            })?;
        if card.revealed {
            return Err(GameError::CardAlreadyRevealed {
                player: target,
                card_index,
            });
        }

        self.message = format!(
            "{} is guessing card {} of {}.",
            self.current_player().name,
            card_index + 1,
            player.name
        );
        self.phase = Phase::AwaitingGuessValue { target, card_index };
        Ok(Outcome::TargetSelected { target, card_index })
    }

    pub(super) fn handle_submit_guess(&mut self, value: u8) -> Result<Outcome, GameError> {
        let Phase::AwaitingGuessValue { target, card_index } = self.phase else {
            return Err(self.illegal(Command::SubmitGuess(value)));
        };
        if value > MAX_VALUE {
            return Err(GameError::InvalidGuessValue(value));
        }
        let actual = self
            .player(target)
            .and_then(|p| p.hand.get(card_index))
            .copied()
            .ok_or(GameError::CardIndexOutOfRange {
                player: target,
                card_index,
            })?;

        if actual.value == value {
            let target_player = &mut self.players[target.index()];
            let card = target_player.hand.reveal(card_index).unwrap_or(actual);
            self.message = format!(
                "Correct! {} revealed {}'s {}. Guess again or end the turn.",
                self.players[self.current].name, self.players[target.index()].name, card
            );
            self.phase = Phase::AwaitingGuessOrEndTurn;
            return Ok(Outcome::GuessCorrect { target, card });
        }

        let guesser = self.current_player();
        if guesser.hand.is_fully_revealed() {
            let name = guesser.name.clone();
            let end = self.finish_turn();
            if end.result.is_none() {
                self.message = format!("Wrong guess. {name} has no hidden card to reveal. {}", self.message);
            }
            return Ok(Outcome::GuessIncorrectNoPenalty(end));
        }

        self.message = format!(
            "Wrong guess! {}, reveal one of your hidden cards.",
            guesser.name
        );
        self.phase = Phase::AwaitingPenaltyCardChoice;
        Ok(Outcome::GuessIncorrect)
    }

    pub(super) fn handle_cancel_guess(&mut self) -> Result<Outcome, GameError> {
        self.expect_phase(
            Command::CancelGuess,
            matches!(
                self.phase,
                Phase::AwaitingGuessTarget | Phase::AwaitingGuessValue { .. }
            ),
        )?;

        self.phase = Phase::AwaitingGuessOrEndTurn;
        self.message = "Guess cancelled.".to_string();
        Ok(Outcome::GuessCancelled)
    }

    pub(super) fn handle_select_penalty_card(&mut self, card_index: usize) -> Result<Outcome, GameError> {
        self.expect_phase(
            Command::SelectPenaltyCard(card_index),
            matches!(self.phase, Phase::AwaitingPenaltyCardChoice),
        )?;

        let player = &mut self.players[self.current];
        let card = match player.hand.get(card_index) {
            Some(card) if !card.revealed => *card,
            _ => return Err(GameError::InvalidPenaltySelection { card_index }),
        };
        let revealed = player.hand.reveal(card_index).unwrap_or(card);

        self.message = format!("{} revealed their {}.", player.name, revealed);
        self.phase = Phase::AwaitingPenaltyConfirmation { revealed };
        Ok(Outcome::PenaltyRevealed(revealed))
    }

    pub(super) fn handle_confirm_penalty(&mut self) -> Result<Outcome, GameError> {
        self.expect_phase(
            Command::ConfirmPenaltyAndEndTurn,
            matches!(self.phase, Phase::AwaitingPenaltyConfirmation { .. }),
        )?;
        Ok(Outcome::TurnEnded(self.finish_turn()))
    }

    pub(super) fn handle_end_turn(&mut self) -> Result<Outcome, GameError> {
        let allowed = match self.phase {
            Phase::AwaitingGuessOrEndTurn => true,
            Phase::AwaitingDraw => self.deck.is_empty(),
            _ => false,
        };
        self.expect_phase(Command::EndTurn, allowed)?;
        Ok(Outcome::TurnEnded(self.finish_turn()))
    }

    /// Commands the current player may issue right now.
    ///
    /// Every listed command is accepted by [`Game::apply`]. A draw from an
    /// empty deck is accepted as a no-op but not listed.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        let mut commands = Vec::new();

        match self.phase {
            Phase::GameOver(_) => {}
            Phase::AwaitingDraw => {
                if self.deck.is_empty() {
                    commands.push(Command::BeginGuess);
                    commands.extend(self.guess_targets());
                    commands.push(Command::EndTurn);
                } else {
                    commands.push(Command::Draw);
                }
            }
            Phase::AwaitingColorChoice => {
                commands.extend(
                    self.deck
                        .available_colors()
                        .into_iter()
                        .map(Command::ChooseDrawColor),
                );
            }
            Phase::AwaitingGuessOrEndTurn => {
                commands.push(Command::BeginGuess);
                commands.extend(self.guess_targets());
                commands.push(Command::EndTurn);
            }
            Phase::AwaitingGuessTarget => {
                commands.extend(self.guess_targets());
                commands.push(Command::CancelGuess);
            }
            Phase::AwaitingGuessValue { .. } => {
                commands.extend((0..=MAX_VALUE).map(Command::SubmitGuess));
                commands.push(Command::CancelGuess);
            }
            Phase::AwaitingPenaltyCardChoice => {
                commands.extend(
                    self.current_player()
                        .hand
                        .hidden_indices()
                        .map(Command::SelectPenaltyCard),
                );
            }
            Phase::AwaitingPenaltyConfirmation { .. } => {
                commands.push(Command::ConfirmPenaltyAndEndTurn);
            }
        }

        commands.push(Command::Reset);
        commands
    }

    /// Every hidden opponent card, as target selections.
    fn guess_targets(&self) -> impl Iterator<Item = Command> + '_ {
        let me = self.current_id();
        self.players
            .iter()
            .filter(move |p| p.id != me)
            .flat_map(|p| {
                p.hand
                    .hidden_indices()
                    .map(move |card_index| Command::SelectGuessTarget {
                        player: p.id,
                        card_index,
                    })
            })
    }

    /// Shared precondition for entering or continuing a guess.
    ///
    /// Guessing needs a drawn card, unless the deck is empty and drawing is
    /// no longer possible.
    fn guess_gate(&self, command: Command) -> Result<(), GameError> {
        match self.phase {
            Phase::AwaitingGuessOrEndTurn | Phase::AwaitingGuessTarget => Ok(()),
            Phase::AwaitingDraw | Phase::AwaitingColorChoice => {
                if self.current_player().drawn_card.is_none() && !self.deck.is_empty() {
                    Err(GameError::MustDrawFirst)
                } else {
                    Ok(())
                }
            }
            _ => Err(self.illegal(command)),
        }
    }

    /// Take a random card of `color` for the current player.
    ///
    /// Callers check that the color is available.
    fn draw_color(&mut self, color: Color) -> Result<Outcome, GameError> {
        let card = self
            .deck
            .take_random_of_color(color, &mut self.rng)
            .ok_or(GameError::NoCardsOfColor(color))?;

        let player = &mut self.players[self.current];
        player.drawn_card = Some(card);
        self.message = format!(
            "{} drew a {} {}. Guess a card or end the turn.",
            player.name, card.color, card.value
        );
        self.phase = Phase::AwaitingGuessOrEndTurn;
        Ok(Outcome::Drew(card))
    }

    /// Merge the drawn card, pass to the next seat, and evaluate the round.
    fn finish_turn(&mut self) -> TurnEnd {
        self.players[self.current].merge_drawn_card();

        self.current = (self.current + 1) % self.players.len();
        self.turn += 1;
        self.sequence = 0;
        self.phase = Phase::AwaitingDraw;
        self.message = self.turn_prompt();

        let result = evaluate_end_of_round(self.deck.is_empty(), &self.players);
        if let Some(result) = result {
            self.phase = Phase::GameOver(result);
            self.message = match result.winner().and_then(|id| self.player(id)) {
                Some(winner) => format!("{} wins! Every other hand is revealed.", winner.name),
                None => "Every hand is revealed and the deck is empty. It's a draw!".to_string(),
            };
            info!(?result, turn = self.turn, "game over");
        }

        TurnEnd {
            next: self.current_id(),
            result,
        }
    }

    fn expect_phase(&self, command: Command, allowed: bool) -> Result<(), GameError> {
        if allowed {
            Ok(())
        } else {
            Err(self.illegal(command))
        }
    }

    fn illegal(&self, command: Command) -> GameError {
        GameError::IllegalPhaseTransition {
            phase: self.phase.name(),
            command: command.name(),
        }
    }
}
