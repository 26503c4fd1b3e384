//! The game shell: owns the session state and drives rounds.
//!
//! `Game` holds the tally, preferences and round phase explicitly, draws
//! computer moves from its policy, and writes the session through its
//! store after every mutation. It never sleeps; the reveal countdown is
//! handed back to the caller as data.

use crate::core::{GameConfig, GameError, Move};
use crate::presentation::{Cue, Theme, View};
use crate::rules::RoundResult;
use crate::session::{PersistedSession, Preferences, ScoreTally, SessionSlot, SessionStore};

use super::policy::{ComputerPolicy, UniformComputer};
use super::round::{Countdown, Phase};

/// A running game.
pub struct Game<S, P = UniformComputer> {
    config: GameConfig,
    store: SessionStore<S>,
    policy: P,
    tally: ScoreTally,
    preferences: Preferences,
    phase: Phase,
    cues: Vec<Cue>,
}

impl<S: SessionSlot> Game<S, UniformComputer> {
    /// Start a game with a uniform random computer seeded per `config`.
    pub fn from_config(config: GameConfig, slot: S) -> Self {
        let policy = UniformComputer::from_config(&config);
        Self::start(config, slot, policy)
    }
}

impl<S: SessionSlot, P: ComputerPolicy> Game<S, P> {
    /// Start a game, restoring the persisted session once.
    ///
    /// A missing or unreadable session starts from (0, 0) with sound on
    /// and the dark theme.
    pub fn start(config: GameConfig, slot: S, policy: P) -> Self {
        let store = SessionStore::new(slot, config.storage_key.clone());
        let session = store.load_or_default();
        log::debug!(
            "starting game: scores {}-{}, sound {}, dark theme {}",
            session.scores.player,
            session.scores.computer,
            session.preferences.sound_enabled,
            session.preferences.theme_is_dark
        );

        Self {
            config,
            store,
            policy,
            tally: session.scores,
            preferences: session.preferences,
            phase: Phase::Idle,
            cues: Vec::new(),
        }
    }

    // === Round ===

    /// Submit the player's move.
    ///
    /// The computer's move is drawn now and revealed by `reveal`. The
    /// returned countdown is cosmetic.
    pub fn choose(&mut self, player_move: Move) -> Result<Countdown, GameError> {
        if !self.phase.accepts_move() {
            return Err(GameError::RevealPending);
        }

        self.cue(Cue::Click);
        let computer_move = self.policy.pick();
        self.phase = Phase::AwaitingReveal {
            player_move,
            computer_move,
        };
        log::debug!("player chose {player_move}; computer move drawn");

        Ok(Countdown::new(self.config.countdown_steps, self.config.tick_delay))
    }

    /// Reveal the computer's move, score the round and persist.
    pub fn reveal(&mut self) -> Result<RoundResult, GameError> {
        let Phase::AwaitingReveal {
            player_move,
            computer_move,
        } = self.phase
        else {
            return Err(GameError::NothingToReveal);
        };

        let round = RoundResult::new(player_move, computer_move);
        self.tally.record(round.outcome);
        self.cue(Cue::for_outcome(round.outcome));
        self.phase = Phase::Resolved(round);
        log::debug!(
            "{} vs {}: {} ({}-{})",
            player_move,
            computer_move,
            round.outcome,
            self.tally.player,
            self.tally.computer
        );

        self.persist();
        Ok(round)
    }

    /// Choose and reveal with no countdown.
    pub fn play(&mut self, player_move: Move) -> Result<RoundResult, GameError> {
        self.choose(player_move)?;
        self.reveal()
    }

    /// Clear the displayed round and wait for the next move.
    pub fn play_again(&mut self) -> Result<(), GameError> {
        if self.phase.is_pending() {
            return Err(GameError::RevealPending);
        }
        self.cue(Cue::Click);
        self.phase = Phase::Idle;
        Ok(())
    }

    /// Zero the tally. Preferences are untouched.
    pub fn reset_score(&mut self) -> Result<(), GameError> {
        if self.phase.is_pending() {
            return Err(GameError::RevealPending);
        }
        self.cue(Cue::Click);
        self.tally.reset();
        self.phase = Phase::Idle;
        log::info!("score reset");

        self.persist();
        Ok(())
    }

    // === Preferences ===

    /// Flip sound on/off. Returns whether sound is now enabled.
    pub fn toggle_sound(&mut self) -> bool {
        let enabled = self.preferences.toggle_sound();
        self.persist();
        enabled
    }

    /// Flip dark/light theme. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.preferences.toggle_theme();
        self.persist();
        Theme::from_preferences(&self.preferences)
    }

    // === Accessors ===

    #[must_use]
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The record that would be persisted right now.
    #[must_use]
    pub fn session(&self) -> PersistedSession {
        PersistedSession::new(self.tally, self.preferences)
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Snapshot for renderers.
    #[must_use]
    pub fn view(&self) -> View {
        View::new(
            self.tally,
            self.preferences,
            &self.phase,
            self.config.highlight_duration,
        )
    }

    /// Take the audio cues emitted since the last call.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    // === Internal ===

    fn cue(&mut self, cue: Cue) {
        if self.preferences.sound_enabled {
            self.cues.push(cue);
        }
    }

    fn persist(&mut self) {
        let session = self.session();
        self.store.save(&session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedComputer;
    use crate::rules::Outcome;
    use crate::session::MemorySlot;

    fn game(computer: Move) -> Game<MemorySlot, ScriptedComputer> {
        Game::start(
            GameConfig::instant(),
            MemorySlot::new(),
            ScriptedComputer::always(computer),
        )
    }

    #[test]
    fn test_choose_then_reveal() {
        let mut game = game(Move::Scissors);

        let countdown = game.choose(Move::Rock).unwrap();
        assert_eq!(countdown.len(), 3);
        assert!(game.phase().is_pending());
        assert_eq!(game.tally(), ScoreTally::new(0, 0));

        let round = game.reveal().unwrap();
        assert_eq!(round.outcome, Outcome::Win);
        assert_eq!(game.tally(), ScoreTally::new(1, 0));
        assert_eq!(game.phase(), &Phase::Resolved(round));
    }

    #[test]
    fn test_second_move_while_pending_rejected() {
        let mut game = game(Move::Rock);
        game.choose(Move::Paper).unwrap();

        assert_eq!(game.choose(Move::Rock).unwrap_err(), GameError::RevealPending);
        assert_eq!(game.play_again().unwrap_err(), GameError::RevealPending);
        assert_eq!(game.reset_score().unwrap_err(), GameError::RevealPending);

        let round = game.reveal().unwrap();
        assert_eq!(round.player_move, Move::Paper);
    }

    #[test]
    fn test_reveal_without_move() {
        let mut game = game(Move::Rock);
        assert_eq!(game.reveal().unwrap_err(), GameError::NothingToReveal);

        game.play(Move::Rock).unwrap();
        assert_eq!(game.reveal().unwrap_err(), GameError::NothingToReveal);
    }

    #[test]
    fn test_cues_follow_sound_preference() {
        let mut game = game(Move::Paper);

        game.play(Move::Rock).unwrap();
        assert_eq!(game.drain_cues(), vec![Cue::Click, Cue::Lose]);
        assert!(game.drain_cues().is_empty());

        assert!(!game.toggle_sound());
        game.play(Move::Rock).unwrap();
        game.play_again().unwrap();
        assert!(game.drain_cues().is_empty());
    }

    #[test]
    fn test_new_round_from_resolved() {
        let mut game = game(Move::Rock);
        game.play(Move::Paper).unwrap();
        game.play(Move::Paper).unwrap();
        assert_eq!(game.tally(), ScoreTally::new(2, 0));
    }
}
