//! Round resolver.
//!
//! Maps a (player move, computer move) pair to an `Outcome`. It has no
//! state and no side effects; the game shell applies the outcome to
//! the tally.

pub mod resolver;

pub use resolver::{resolve, resolve_names, Outcome, RoundResult};
