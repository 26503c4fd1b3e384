//! The three moves and the dominance cycle between them.
//!
//! Rock beats scissors, scissors beats paper, paper beats rock. Every
//! relation is written as an exhaustive `match`, so adding a variant
//! would fail to compile until the cycle is updated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InvalidMoveError;

/// One of rock, paper or scissors.
///
/// Serializes as its lowercase name, the same token the input surface
/// uses (`"rock"`, `"paper"`, `"scissors"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in index order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Lowercase name, as shown to users and stored on disk.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// Stable 0-based index (rock = 0, paper = 1, scissors = 2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// The move this one defeats.
    #[must_use]
    pub const fn beats_what(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one.
    #[must_use]
    pub const fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Does `self` dominate `other`?
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.beats_what() == other
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = InvalidMoveError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(InvalidMoveError::new(s)),
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = InvalidMoveError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| InvalidMoveError::new(index.to_string()))
    }
}
