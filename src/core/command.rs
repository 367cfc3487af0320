//! Commands: the player intents a host forwards into a game.
//!
//! A command is a verb plus at most two operands (a target player and a
//! card index, a color, or a guessed value). Commands are plain data so
//! they can be logged, replayed and compared.

use serde::{Deserialize, Serialize};

use super::card::Color;
use super::player::PlayerId;

/// A player intent.
///
/// ## Example
///
/// ```
/// use davinci_code::core::{Color, Command, PlayerId};
///
/// let draw = Command::Draw;
/// let pick = Command::ChooseDrawColor(Color::White);
/// let target = Command::SelectGuessTarget { player: PlayerId::new(1), card_index: 0 };
/// assert_eq!(target.name(), "select guess target");
/// # let _ = (draw, pick);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Draw from the deck (may ask for a color choice).
    Draw,
    /// Pick the color to draw when both are available.
    ChooseDrawColor(Color),
    /// Enter guess mode before choosing a target.
    BeginGuess,
    /// Pick an opponent's hidden card to guess.
    SelectGuessTarget { player: PlayerId, card_index: usize },
    /// Guess the selected card's value.
    SubmitGuess(u8),
    /// Abandon the pending guess.
    CancelGuess,
    /// Reveal one of your own hidden cards after a wrong guess.
    SelectPenaltyCard(usize),
    /// Acknowledge the penalty reveal; ends the turn.
    ConfirmPenaltyAndEndTurn,
    /// Pass the turn.
    EndTurn,
    /// Deal a fresh game with the same configuration.
    Reset,
}

impl Command {
    /// Short human-readable verb.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::Draw => "draw",
            Command::ChooseDrawColor(_) => "choose draw color",
            Command::BeginGuess => "begin guess",
            Command::SelectGuessTarget { .. } => "select guess target",
            Command::SubmitGuess(_) => "submit guess",
            Command::CancelGuess => "cancel guess",
            Command::SelectPenaltyCard(_) => "select penalty card",
            Command::ConfirmPenaltyAndEndTurn => "confirm penalty",
            Command::EndTurn => "end turn",
            Command::Reset => "reset",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An applied command with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// The command applied.
    pub command: Command,

    /// Turn number when the command was applied.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl CommandRecord {
    #[must_use]
    pub fn new(player: PlayerId, command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            command,
            turn,
            sequence,
        }
    }
}
