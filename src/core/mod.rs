//! Core types: moves, sides, RNG, configuration, errors.
//!
//! Everything here is a leaf; the resolver, the session store and the
//! game shell build on these without depending on each other.

pub mod config;
pub mod error;
pub mod moves;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_STORAGE_KEY};
pub use error::{GameError, InvalidMoveError, StoreError};
pub use moves::Move;
pub use player::Side;
pub use rng::GameRng;
