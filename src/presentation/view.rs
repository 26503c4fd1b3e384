//! Render snapshot.

use std::time::Duration;

use serde::Serialize;

use crate::core::config::serialize_optional_millis;
use crate::core::{Move, Side};
use crate::game::Phase;
use crate::rules::Outcome;
use crate::session::{Preferences, ScoreTally};

use super::{outcome_message, sound_glyph, tip, Theme, PROMPT, REVEALING};

/// Everything a renderer needs for one frame, as plain data.
///
/// The computer's move stays `None` until it is revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct View {
    pub scores: ScoreTally,
    pub preferences: Preferences,
    pub theme: Theme,
    pub sound_glyph: &'static str,
    pub theme_glyph: &'static str,
    pub awaiting_reveal: bool,
    pub player_move: Option<Move>,
    pub computer_move: Option<Move>,
    pub outcome: Option<Outcome>,
    pub message: &'static str,
    pub tip: Option<&'static str>,
    /// Side whose choice display gets the winning highlight.
    pub highlight: Option<Side>,
    /// How long to keep the highlight on. Set exactly when `highlight` is.
    #[serde(rename = "highlight_ms", serialize_with = "serialize_optional_millis")]
    pub highlight_for: Option<Duration>,
}

impl View {
    #[must_use]
    pub fn new(
        scores: ScoreTally,
        preferences: Preferences,
        phase: &Phase,
        highlight_duration: Duration,
    ) -> Self {
        let theme = Theme::from_preferences(&preferences);
        let round = phase.round();
        let highlight = round.and_then(|r| r.outcome.winner());

        let message = match (phase, round) {
            (_, Some(round)) => outcome_message(round.outcome),
            (Phase::AwaitingReveal { .. }, None) => REVEALING,
            _ => PROMPT,
        };

        Self {
            scores,
            preferences,
            theme,
            sound_glyph: sound_glyph(preferences.sound_enabled),
            theme_glyph: theme.toggle_glyph(),
            awaiting_reveal: phase.is_pending(),
            player_move: phase.player_move(),
            computer_move: phase.revealed_computer_move(),
            outcome: round.map(|r| r.outcome),
            message,
            tip: round.and_then(|r| tip(r.player_move, r.computer_move)),
            highlight,
            highlight_for: highlight.map(|_| highlight_duration),
        }
    }
}
