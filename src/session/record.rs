//! The persisted session record: score tally plus preferences.
//!
//! Wire shape (JSON, one storage slot):
//!
//! ```text
//! {"scores":{"player":1,"computer":0},"soundEnabled":true,"themeIsDark":true}
//! ```
//!
//! Older browser builds wrote `isDarkTheme`; it is accepted on read, and
//! `themeIsDark` wins when both are present. Any other shape fails to
//! deserialize and is treated as absent.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::rules::Outcome;

/// Running score. Unsigned, so never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreTally {
    pub player: u32,
    pub computer: u32,
}

impl ScoreTally {
    #[must_use]
    pub const fn new(player: u32, computer: u32) -> Self {
        Self { player, computer }
    }

    /// Apply one resolved round: the winner gains a point, a draw changes
    /// nothing. Returns the side that scored.
    pub fn record(&mut self, outcome: Outcome) -> Option<Side> {
        let side = outcome.winner()?;
        let score = match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        };
        *score = score.saturating_add(1);
        Some(side)
    }

    /// Back to (0, 0).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get a side's score.
    #[must_use]
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.player == 0 && self.computer == 0
    }
}

impl Index<Side> for ScoreTally {
    type Output = u32;

    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }
}

/// User preferences. Defaults: sound on, dark theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "soundEnabled")]
    pub sound_enabled: bool,

    #[serde(rename = "themeIsDark")]
    pub theme_is_dark: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            theme_is_dark: true,
        }
    }
}

impl Preferences {
    /// Flip sound on/off. Returns the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Flip dark/light theme. Returns the new value.
    pub fn toggle_theme(&mut self) -> bool {
        self.theme_is_dark = !self.theme_is_dark;
        self.theme_is_dark
    }
}

/// Everything that survives a restart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord", into = "SessionRecord")]
pub struct PersistedSession {
    pub scores: ScoreTally,
    pub preferences: Preferences,
}

/// Flat wire form of `PersistedSession`.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct SessionRecord {
    scores: ScoreTally,
    #[serde(rename = "soundEnabled")]
    sound_enabled: bool,
    #[serde(rename = "themeIsDark", default)]
    theme_is_dark: Option<bool>,
    #[serde(rename = "isDarkTheme", default, skip_serializing_if = "Option::is_none")]
    legacy_is_dark_theme: Option<bool>,
}

impl TryFrom<SessionRecord> for PersistedSession {
    type Error = &'static str;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let theme_is_dark = record
            .theme_is_dark
            .or(record.legacy_is_dark_theme)
            .ok_or("missing field `themeIsDark`")?;
        Ok(Self {
            scores: record.scores,
            preferences: Preferences {
                sound_enabled: record.sound_enabled,
                theme_is_dark,
            },
        })
    }
}

impl From<PersistedSession> for SessionRecord {
    fn from(session: PersistedSession) -> Self {
        Self {
            scores: session.scores,
            sound_enabled: session.preferences.sound_enabled,
            theme_is_dark: Some(session.preferences.theme_is_dark),
            legacy_is_dark_theme: None,
        }
    }
}

impl PersistedSession {
    #[must_use]
    pub const fn new(scores: ScoreTally, preferences: Preferences) -> Self {
        Self {
            scores,
            preferences,
        }
    }

    /// Serialize to the slot's JSON shape.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the slot's JSON shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
