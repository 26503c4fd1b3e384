//! # rust-rps
//!
//! Rock-paper-scissors game core with a persistent score tally and
//! user preferences.
//!
//! ## Design Principles
//!
//! 1. **Pure resolution**: `rules::resolve` maps two moves to an outcome
//!    with no state and no side effects.
//!
//! 2. **Recoverable persistence**: the session lives in one key-value
//!    slot. Unreadable data loads as absent, failed writes are logged,
//!    and gameplay never stops for storage.
//!
//! 3. **Plain data out**: outcomes, moves, tallies, cues and themes are
//!    returned as values so any renderer (terminal, browser) can draw
//!    them without reaching into the game.
//!
//! ## Modules
//!
//! - `core`: Moves, sides, RNG, configuration, errors
//! - `rules`: Round resolver
//! - `session`: Score tally, preferences, slots and the session store
//! - `presentation`: Messages, tips, cues, theme, render snapshot
//! - `game`: Round state machine, computer policy, the `Game` shell

pub mod core;
pub mod game;
pub mod presentation;
pub mod rules;
pub mod session;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, InvalidMoveError, Move, Side, StoreError,
    DEFAULT_STORAGE_KEY,
};

pub use crate::rules::{resolve, resolve_names, Outcome, RoundResult};

pub use crate::session::{
    FileSlot, MemorySlot, PersistedSession, Preferences, ScoreTally, SessionSlot, SessionStore,
};

pub use crate::presentation::{Cue, Theme, View};

pub use crate::game::{
    ComputerPolicy, Countdown, Game, Phase, ScriptedComputer, Tick, UniformComputer,
};
