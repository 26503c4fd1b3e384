//! Round resolution.
//!
//! `resolve` is the whole rule set: equal moves draw, otherwise the
//! dominance cycle decides. Pure and deterministic.

use serde::{Deserialize, Serialize};

use crate::core::{InvalidMoveError, Move, Side};

/// Result of a round from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same result seen from the computer's side.
    #[must_use]
    pub const fn flip(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// The side that scores, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Win => Some(Side::Player),
            Outcome::Lose => Some(Side::Computer),
            Outcome::Draw => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, side: Side) -> bool {
        self.winner() == Some(side)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Lose => write!(f, "lose"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Resolve a round.
///
/// ```
/// use rust_rps::core::Move;
/// use rust_rps::rules::{resolve, Outcome};
///
/// assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::Win);
/// assert_eq!(resolve(Move::Rock, Move::Paper), Outcome::Lose);
/// assert_eq!(resolve(Move::Rock, Move::Rock), Outcome::Draw);
/// ```
#[must_use]
pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if player.beats(computer) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Resolve a round from untyped move names.
///
/// Fails fast with `InvalidMoveError` if either name is not a move.
/// The player's input is checked first.
pub fn resolve_names(player: &str, computer: &str) -> Result<Outcome, InvalidMoveError> {
    let player: Move = player.parse()?;
    let computer: Move = computer.parse()?;
    Ok(resolve(player, computer))
}

/// A resolved round as plain data for renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundResult {
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
}

impl RoundResult {
    /// Resolve and record a round.
    #[must_use]
    pub fn new(player_move: Move, computer_move: Move) -> Self {
        Self {
            player_move,
            computer_move,
            outcome: resolve(player_move, computer_move),
        }
    }

    /// The move chosen by a side.
    #[must_use]
    pub fn move_of(&self, side: Side) -> Move {
        match side {
            Side::Player => self.player_move,
            Side::Computer => self.computer_move,
        }
    }

    /// The (winning, losing) pair, `None` on a draw.
    #[must_use]
    pub fn decisive_pair(&self) -> Option<(Move, Move)> {
        self.outcome
            .winner()
            .map(|side| (self.move_of(side), self.move_of(side.opponent())))
    }
}
