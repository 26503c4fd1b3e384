//! Game shell integration tests.
//!
//! These tests drive full rounds through the shell and check the
//! tally, the preferences and what ends up in the persisted slot.

use std::time::Duration;

use rust_rps::core::{GameConfig, GameError, Move, Side};
use rust_rps::game::{Game, Phase, ScriptedComputer, UniformComputer};
use rust_rps::presentation::{Cue, Theme};
use rust_rps::rules::Outcome;
use rust_rps::session::{
    FileSlot, MemorySlot, PersistedSession, Preferences, ScoreTally, SessionStore,
};

fn scripted(moves: &[Move]) -> Game<MemorySlot, ScriptedComputer> {
    Game::start(
        GameConfig::instant(),
        MemorySlot::new(),
        ScriptedComputer::new(moves.iter().copied()),
    )
}

fn persisted(game: &Game<MemorySlot, ScriptedComputer>) -> Option<PersistedSession> {
    game.store().load()
}

// =============================================================================
// End-to-End Rounds
// =============================================================================

/// Rock against scissors wins and persists (1, 0).
#[test]
fn test_rock_beats_scissors_end_to_end() {
    let mut game = scripted(&[Move::Scissors]);

    let round = game.play(Move::Rock).unwrap();
    assert_eq!(round.outcome, Outcome::Win);
    assert_eq!(round.computer_move, Move::Scissors);
    assert_eq!(game.tally(), ScoreTally::new(1, 0));

    let saved = persisted(&game).unwrap();
    assert_eq!(saved.scores, ScoreTally::new(1, 0));
}

/// Paper against paper draws; the tally and the slot stay unchanged.
#[test]
fn test_paper_draw_end_to_end() {
    let mut game = scripted(&[Move::Scissors, Move::Paper]);
    game.play(Move::Rock).unwrap();
    assert_eq!(persisted(&game).unwrap().scores, ScoreTally::new(1, 0));

    let round = game.play(Move::Paper).unwrap();
    assert_eq!(round.outcome, Outcome::Draw);
    assert_eq!(game.tally(), ScoreTally::new(1, 0));
    assert_eq!(persisted(&game).unwrap().scores, ScoreTally::new(1, 0));
}

/// A loss scores for the computer.
#[test]
fn test_loss_scores_computer() {
    let mut game = scripted(&[Move::Rock]);
    let round = game.play(Move::Scissors).unwrap();

    assert_eq!(round.outcome, Outcome::Lose);
    assert_eq!(game.tally()[Side::Computer], 1);
    assert_eq!(game.view().highlight, Some(Side::Computer));
}

/// Each resolved round moves the tally by at most one point.
#[test]
fn test_one_increment_per_round() {
    let script = [Move::Rock, Move::Paper, Move::Scissors];
    let mut game = scripted(&script);

    let mut previous = game.tally();
    for player in Move::ALL.iter().cycle().take(30) {
        game.play(*player).unwrap();
        let now = game.tally();
        let delta = (now.player - previous.player) + (now.computer - previous.computer);
        assert!(delta <= 1);
        previous = now;
    }
}

// =============================================================================
// State Machine
// =============================================================================

/// The countdown is cosmetic: the outcome is fixed at `choose`.
#[test]
fn test_countdown_does_not_change_result() {
    let mut game = Game::start(
        GameConfig::default(),
        MemorySlot::new(),
        ScriptedComputer::always(Move::Rock),
    );

    let countdown = game.choose(Move::Paper).unwrap();
    let labels: Vec<_> = countdown.map(|t| t.label).collect();
    assert_eq!(labels, vec!["3...", "2...", "1..."]);

    assert!(game.view().computer_move.is_none());
    let round = game.reveal().unwrap();
    assert_eq!(round.outcome, Outcome::Win);
}

/// A second move while a reveal is pending is rejected.
#[test]
fn test_double_submission_guard() {
    let mut game = scripted(&[Move::Paper]);
    game.choose(Move::Rock).unwrap();

    assert_eq!(game.choose(Move::Scissors), Err(GameError::RevealPending));
    assert_eq!(game.tally(), ScoreTally::new(0, 0));

    game.reveal().unwrap();
    assert_eq!(game.tally(), ScoreTally::new(0, 1));
}

/// Play again returns to idle without touching the tally.
#[test]
fn test_play_again() {
    let mut game = scripted(&[Move::Scissors]);
    game.play(Move::Rock).unwrap();

    game.play_again().unwrap();
    assert_eq!(game.phase(), &Phase::Idle);
    assert_eq!(game.tally(), ScoreTally::new(1, 0));
    assert_eq!(game.view().message, "Choose your weapon!");
}

// =============================================================================
// Reset and Preferences
// =============================================================================

/// Reset zeroes the tally and leaves preferences alone.
#[test]
fn test_reset_keeps_preferences() {
    let mut game = scripted(&[Move::Scissors]);
    game.play(Move::Rock).unwrap();
    game.toggle_theme();
    let prefs = game.preferences();

    game.reset_score().unwrap();
    assert_eq!(game.tally(), ScoreTally::new(0, 0));
    assert_eq!(game.preferences(), prefs);
    assert_eq!(game.phase(), &Phase::Idle);

    let saved = persisted(&game).unwrap();
    assert_eq!(saved.scores, ScoreTally::new(0, 0));
    assert!(!saved.preferences.theme_is_dark);
}

/// Toggles never alter the tally, and each one is persisted.
#[test]
fn test_toggles_keep_tally() {
    let mut game = scripted(&[Move::Scissors]);
    game.play(Move::Rock).unwrap();

    assert!(!game.toggle_sound());
    assert_eq!(game.toggle_theme(), Theme::Light);
    assert_eq!(game.tally(), ScoreTally::new(1, 0));
    assert_eq!(
        persisted(&game).unwrap().preferences,
        Preferences {
            sound_enabled: false,
            theme_is_dark: false
        }
    );

    assert!(game.toggle_sound());
    assert_eq!(game.toggle_theme(), Theme::Dark);
    assert_eq!(game.tally(), ScoreTally::new(1, 0));
}

/// Toggles are accepted while a reveal is pending, and the reveal
/// persists the new tally alongside the toggled preference.
#[test]
fn test_toggle_while_reveal_pending() {
    let mut game = scripted(&[Move::Scissors]);
    game.choose(Move::Rock).unwrap();

    assert_eq!(game.toggle_theme(), Theme::Light);
    assert!(game.phase().is_pending());
    assert_eq!(game.tally(), ScoreTally::new(0, 0));
    assert!(!persisted(&game).unwrap().preferences.theme_is_dark);

    let round = game.reveal().unwrap();
    assert_eq!(round.outcome, Outcome::Win);
    assert_eq!(game.tally(), ScoreTally::new(1, 0));

    let saved = persisted(&game).unwrap();
    assert_eq!(saved.scores, ScoreTally::new(1, 0));
    assert_eq!(
        saved.preferences,
        Preferences {
            sound_enabled: true,
            theme_is_dark: false
        }
    );
}

/// The configured highlight duration accompanies a winning highlight.
#[test]
fn test_highlight_duration_reaches_view() {
    let config = GameConfig::instant().with_highlight_duration(Duration::from_millis(750));
    let mut game = Game::start(
        config,
        MemorySlot::new(),
        ScriptedComputer::new([Move::Rock, Move::Paper]),
    );

    game.play(Move::Paper).unwrap();
    let view = game.view();
    assert_eq!(view.highlight, Some(Side::Player));
    assert_eq!(view.highlight_for, Some(Duration::from_millis(750)));

    game.play(Move::Paper).unwrap();
    assert_eq!(game.view().highlight_for, None);
}

/// Cues are named per outcome and suppressed when sound is off.
#[test]
fn test_cues() {
    let mut game = scripted(&[Move::Rock]);
    game.play(Move::Rock).unwrap();
    assert_eq!(game.drain_cues(), vec![Cue::Click, Cue::Draw]);

    game.toggle_sound();
    game.play(Move::Paper).unwrap();
    game.reset_score().unwrap();
    assert!(game.drain_cues().is_empty());
}

// =============================================================================
// Startup
// =============================================================================

/// A saved session is restored once at startup.
#[test]
fn test_restore_on_start() {
    let mut slot = MemorySlot::new();
    slot.insert_raw(
        "rpsGameState",
        r#"{"scores":{"player":5,"computer":9},"soundEnabled":false,"themeIsDark":false}"#,
    );

    let game = Game::start(GameConfig::instant(), slot, ScriptedComputer::always(Move::Rock));
    assert_eq!(game.tally(), ScoreTally::new(5, 9));
    assert!(!game.preferences().sound_enabled);
    assert_eq!(game.view().theme, Theme::Light);
}

/// A corrupt slot starts from defaults.
#[test]
fn test_corrupt_slot_starts_fresh() {
    let mut slot = MemorySlot::new();
    slot.insert_raw("rpsGameState", "{\"scores\":");

    let game = Game::start(GameConfig::instant(), slot, ScriptedComputer::always(Move::Rock));
    assert_eq!(game.tally(), ScoreTally::new(0, 0));
    assert_eq!(game.preferences(), Preferences::default());
}

/// Gameplay continues when storage is unavailable.
#[test]
fn test_play_without_storage() {
    let mut game = Game::start(
        GameConfig::instant(),
        MemorySlot::unavailable(),
        ScriptedComputer::always(Move::Paper),
    );

    game.play(Move::Scissors).unwrap();
    game.toggle_sound();
    game.reset_score().unwrap();
    game.play(Move::Scissors).unwrap();
    assert_eq!(game.tally(), ScoreTally::new(1, 0));
}

/// A custom storage key is honoured, and a file slot carries the session
/// across restarts.
#[test]
fn test_file_backed_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::instant().with_storage_key("custom").with_seed(1);

    let mut game = Game::from_config(config.clone(), FileSlot::new(dir.path()));
    for _ in 0..10 {
        game.play(Move::Rock).unwrap();
    }
    let tally = game.tally();
    drop(game);

    assert!(dir.path().join("custom.json").exists());
    let store = SessionStore::new(FileSlot::new(dir.path()), "custom");
    assert_eq!(store.load().unwrap().scores, tally);

    let game: Game<FileSlot, UniformComputer> = Game::from_config(config, FileSlot::new(dir.path()));
    assert_eq!(game.tally(), tally);
}

/// The same seed yields the same computer moves.
#[test]
fn test_seeded_games_repeat() {
    let config = GameConfig::instant().with_seed(77);
    let mut a = Game::from_config(config.clone(), MemorySlot::new());
    let mut b = Game::from_config(config, MemorySlot::new());

    for _ in 0..20 {
        let ra = a.play(Move::Paper).unwrap();
        let rb = b.play(Move::Paper).unwrap();
        assert_eq!(ra, rb);
    }
}
