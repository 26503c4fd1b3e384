//! Game configuration.
//!
//! Shells configure the game at startup: which storage key to persist
//! under, how the computer's RNG is seeded, and the pacing of the
//! cosmetic reveal. None of these values affect round results.

use std::time::Duration;

use serde::{Deserialize, Serialize, Serializer};

/// Storage key the browser build has always used.
pub const DEFAULT_STORAGE_KEY: &str = "rpsGameState";

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Key of the single persistent slot.
    pub storage_key: String,

    /// RNG seed for computer moves. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Number of countdown ticks before the computer's move is revealed.
    pub countdown_steps: u8,

    /// Pause between countdown ticks (0 collapses the reveal).
    pub tick_delay: Duration,

    /// How long a renderer keeps the winning side highlighted.
    pub highlight_duration: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed: None,
            countdown_steps: 3,
            tick_delay: Duration::from_millis(500),
            highlight_duration: Duration::from_millis(1000),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with the reveal collapsed to zero delay.
    pub fn instant() -> Self {
        Self::default().with_tick_delay(Duration::ZERO)
    }

    /// Set the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Seed the computer's RNG.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of countdown ticks.
    #[must_use]
    pub fn with_countdown_steps(mut self, steps: u8) -> Self {
        self.countdown_steps = steps;
        self
    }

    /// Set the pause between countdown ticks.
    #[must_use]
    pub fn with_tick_delay(mut self, delay: Duration) -> Self {
        self.tick_delay = delay;
        self
    }

    /// Set how long renderers keep the winning side highlighted.
    #[must_use]
    pub fn with_highlight_duration(mut self, duration: Duration) -> Self {
        self.highlight_duration = duration;
        self
    }

    /// Total cosmetic delay before a reveal.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        self.tick_delay.saturating_mul(u32::from(self.countdown_steps))
    }
}

/// Serialize a duration as whole milliseconds, for JS hosts.
pub(crate) fn serialize_millis<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

pub(crate) fn serialize_optional_millis<S: Serializer>(
    d: &Option<Duration>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match d {
        Some(d) => s.serialize_some(&u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
        None => s.serialize_none(),
    }
}
