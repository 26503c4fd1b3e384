//! Game orchestration.
//!
//! - `round`: phase state machine and the cosmetic countdown
//! - `policy`: computer move selection
//! - `shell`: the `Game` struct that ties resolver, tally and store together

pub mod policy;
pub mod round;
pub mod shell;

pub use policy::{ComputerPolicy, ScriptedComputer, UniformComputer};
pub use round::{Countdown, Phase, Tick};
pub use shell::Game;
