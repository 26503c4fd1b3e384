//! Round phases and the cosmetic reveal countdown.
//!
//! ```text
//! Idle ──choose──▶ AwaitingReveal ──reveal──▶ Resolved ──play_again/reset──▶ Idle
//!                        ▲                        │
//!                        └─────────choose─────────┘
//! ```
//!
//! Only `Idle` and `Resolved` accept a move, so a second submission
//! while a reveal is pending is rejected by construction.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::config::serialize_millis;
use crate::core::Move;
use crate::rules::RoundResult;

/// Where the current round stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player's move.
    #[default]
    Idle,
    /// Both moves are fixed; the computer's is not shown yet.
    AwaitingReveal {
        player_move: Move,
        computer_move: Move,
    },
    /// Outcome computed, tally updated and persisted.
    Resolved(RoundResult),
}

impl Phase {
    /// Does this phase accept a new move?
    #[must_use]
    pub fn accepts_move(&self) -> bool {
        !self.is_pending()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::AwaitingReveal { .. })
    }

    /// The last resolved round, if it is still on display.
    #[must_use]
    pub fn round(&self) -> Option<&RoundResult> {
        match self {
            Phase::Resolved(round) => Some(round),
            _ => None,
        }
    }

    /// The player's move, once submitted.
    #[must_use]
    pub fn player_move(&self) -> Option<Move> {
        match self {
            Phase::Idle => None,
            Phase::AwaitingReveal { player_move, .. } => Some(*player_move),
            Phase::Resolved(round) => Some(round.player_move),
        }
    }

    /// The computer's move, once revealed.
    #[must_use]
    pub fn revealed_computer_move(&self) -> Option<Move> {
        self.round().map(|round| round.computer_move)
    }
}

/// One step of the reveal countdown.
///
/// Serializes as `{"label":"3...","delay_ms":500}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tick {
    /// Text to show, e.g. `"2..."`.
    pub label: String,
    /// How long to show it before the next tick.
    #[serde(rename = "delay_ms", serialize_with = "serialize_millis")]
    pub delay: Duration,
}

/// The 3-2-1 shown between a move and its reveal.
///
/// Purely cosmetic: the computer's move is already drawn. Callers may
/// sleep on each tick's delay or skip the countdown entirely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u8,
    delay: Duration,
}

impl Countdown {
    #[must_use]
    pub fn new(steps: u8, delay: Duration) -> Self {
        Self {
            remaining: steps,
            delay,
        }
    }

    /// Total time left if every tick is waited out.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay.saturating_mul(u32::from(self.remaining))
    }
}

impl Iterator for Countdown {
    type Item = Tick;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tick = Tick {
            label: format!("{}...", self.remaining),
            delay: self.delay,
        };
        self.remaining -= 1;
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Countdown {}
