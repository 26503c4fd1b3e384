//! Presentation data.
//!
//! The core never draws, plays audio or styles anything. It names what
//! a renderer should show: the outcome message, the tip for the
//! deciding pair, the audio cue and the theme. Renderers map these to
//! assets.

pub mod view;

use serde::{Deserialize, Serialize};

use crate::core::Move;
use crate::rules::Outcome;
use crate::session::Preferences;

pub use view::View;

/// Message shown while waiting for a move.
pub const PROMPT: &str = "Choose your weapon!";

/// Message shown while the computer's move is hidden.
pub const REVEALING: &str = "...";

/// Short audio clips a renderer may play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    /// Any interaction: a move, play again, reset.
    Click,
    Win,
    Lose,
    Draw,
}

impl Cue {
    #[must_use]
    pub const fn for_outcome(outcome: Outcome) -> Cue {
        match outcome {
            Outcome::Win => Cue::Win,
            Outcome::Lose => Cue::Lose,
            Outcome::Draw => Cue::Draw,
        }
    }

    /// Asset name, e.g. `"win"` for `assets/win.mp3`.
    #[must_use]
    pub const fn asset(self) -> &'static str {
        match self {
            Cue::Click => "click",
            Cue::Win => "win",
            Cue::Lose => "lose",
            Cue::Draw => "draw",
        }
    }
}

/// Visual theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn from_preferences(prefs: &Preferences) -> Theme {
        if prefs.theme_is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Value of the document's theme attribute.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Label of the theme toggle control.
    #[must_use]
    pub const fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }
}

/// Label of the sound toggle control.
#[must_use]
pub const fn sound_glyph(sound_enabled: bool) -> &'static str {
    if sound_enabled {
        "🔊"
    } else {
        "🔇"
    }
}

/// Headline for a resolved round.
#[must_use]
pub const fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "🎉 You Win! 🎉",
        Outcome::Lose => "😔 You Lose! 😔",
        Outcome::Draw => "🤝 It's a Draw! 🤝",
    }
}

/// Explanation of why one move beat the other.
///
/// Symmetric in its arguments. Equal moves have no tip.
#[must_use]
pub const fn tip(a: Move, b: Move) -> Option<&'static str> {
    match (a, b) {
        (Move::Rock, Move::Paper) | (Move::Paper, Move::Rock) => Some("Paper covers Rock!"),
        (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Rock) => {
            Some("Rock smashes Scissors!")
        }
        (Move::Paper, Move::Scissors) | (Move::Scissors, Move::Paper) => {
            Some("Scissors cut Paper!")
        }
        (Move::Rock, Move::Rock) | (Move::Paper, Move::Paper) | (Move::Scissors, Move::Scissors) => {
            None
        }
    }
}

/// Asset name of a move's icon, e.g. `"rock"` for `assets/rock.png`.
#[must_use]
pub const fn move_icon(m: Move) -> &'static str {
    m.name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_for_outcome() {
        assert_eq!(Cue::for_outcome(Outcome::Win), Cue::Win);
        assert_eq!(Cue::for_outcome(Outcome::Lose), Cue::Lose);
        assert_eq!(Cue::for_outcome(Outcome::Draw), Cue::Draw);
        assert_eq!(Cue::Click.asset(), "click");
    }

    #[test]
    fn test_theme() {
        let mut prefs = Preferences::default();
        assert_eq!(Theme::from_preferences(&prefs), Theme::Dark);
        prefs.toggle_theme();
        let theme = Theme::from_preferences(&prefs);
        assert_eq!(theme, Theme::Light);
        assert_eq!(theme.attribute(), "light");
        assert_eq!(theme.toggle_glyph(), "☀️");
    }

    #[test]
    fn test_tips_symmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                assert_eq!(tip(a, b), tip(b, a));
                assert_eq!(tip(a, b).is_none(), a == b);
            }
        }
        assert_eq!(tip(Move::Scissors, Move::Paper), Some("Scissors cut Paper!"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(outcome_message(Outcome::Win), "🎉 You Win! 🎉");
        assert_eq!(outcome_message(Outcome::Draw), "🤝 It's a Draw! 🤝");
        assert_eq!(sound_glyph(false), "🔇");
        assert_eq!(move_icon(Move::Paper), "paper");
    }
}
