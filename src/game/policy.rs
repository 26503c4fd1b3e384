//! How the computer picks its move.
//!
//! - `UniformComputer`: independent uniform draw each round
//! - `ScriptedComputer`: replays a fixed sequence (tests, demos)

use crate::core::{GameConfig, GameRng, Move};

/// Source of computer moves.
pub trait ComputerPolicy {
    /// Pick the computer's move for the next round.
    fn pick(&mut self) -> Move;
}

impl<P: ComputerPolicy + ?Sized> ComputerPolicy for Box<P> {
    fn pick(&mut self) -> Move {
        (**self).pick()
    }
}

/// Uniform random draw over the three moves.
#[derive(Clone, Debug)]
pub struct UniformComputer {
    rng: GameRng,
}

impl UniformComputer {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Deterministic sequence for a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Seed from the config, or from the OS when none is set.
    pub fn from_config(config: &GameConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(GameRng::from_entropy()),
        }
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl ComputerPolicy for UniformComputer {
    fn pick(&mut self) -> Move {
        Move::ALL[self.rng.gen_range_usize(0..Move::ALL.len())]
    }
}

/// Plays the given moves in order, starting over at the end.
#[derive(Clone, Debug)]
pub struct ScriptedComputer {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedComputer {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        let moves: Vec<Move> = moves.into_iter().collect();
        assert!(!moves.is_empty(), "Script must contain at least 1 move");
        Self { moves, next: 0 }
    }

    /// Always plays `m`.
    pub fn always(m: Move) -> Self {
        Self::new([m])
    }
}

impl ComputerPolicy for ScriptedComputer {
    fn pick(&mut self) -> Move {
        let m = self.moves[self.next];
        self.next = (self.next + 1) % self.moves.len();
        m
    }
}
