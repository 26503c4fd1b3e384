//! Terminal rock-paper-scissors.
//!
//! Score and preferences persist to a JSON file under the state
//! directory, in the same shape the browser build keeps in localStorage.

use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;
use dialoguer::Select;

use rust_rps::core::{GameConfig, Move, Side};
use rust_rps::game::{Game, UniformComputer};
use rust_rps::presentation::{self, Cue, Theme, View};
use rust_rps::rules::Outcome;
use rust_rps::session::FileSlot;

#[derive(Parser, Debug)]
#[command(name = "rps", about = "Rock, paper, scissors against the computer")]
struct Args {
    /// Directory the session file is kept in.
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Seed for the computer's moves.
    #[arg(long)]
    seed: Option<u64>,

    /// Reveal immediately, without the 3-2-1 countdown.
    #[arg(long)]
    instant: bool,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

const MENU: [&str; 8] = [
    "Rock",
    "Paper",
    "Scissors",
    "Play again",
    "Reset score",
    "Toggle sound",
    "Toggle theme",
    "Quit",
];

fn main() {
    let args = Args::parse();
    log(args.verbose);

    let dir = args.state_dir.unwrap_or_else(default_state_dir);
    log::debug!("session directory {}", dir.display());

    let mut config = if args.instant {
        GameConfig::instant()
    } else {
        GameConfig::default()
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut game = Game::from_config(config, FileSlot::new(dir));
    let mut revealed_at: Option<Instant> = None;
    render(&game.view(), revealed_at);

    loop {
        let choice = match Select::new()
            .with_prompt(presentation::PROMPT)
            .items(&MENU)
            .default(0)
            .interact_opt()
        {
            Ok(Some(choice)) => choice,
            Ok(None) => break,
            Err(err) => {
                log::error!("input failed: {err}");
                break;
            }
        };

        match choice {
            0..=2 => {
                if play_round(&mut game, Move::ALL[choice]) {
                    revealed_at = Some(Instant::now());
                }
            }
            3 => {
                if let Err(err) = game.play_again() {
                    log::warn!("{err}");
                }
            }
            4 => {
                if let Err(err) = game.reset_score() {
                    log::warn!("{err}");
                }
            }
            5 => {
                game.toggle_sound();
            }
            6 => {
                game.toggle_theme();
            }
            _ => break,
        }

        play_cues(&mut game);
        render(&game.view(), revealed_at);
    }
}

/// Returns whether a round was revealed.
fn play_round(game: &mut Game<FileSlot, UniformComputer>, player_move: Move) -> bool {
    let countdown = match game.choose(player_move) {
        Ok(countdown) => countdown,
        Err(err) => {
            log::warn!("{err}");
            return false;
        }
    };
    play_cues(game);
    println!("You chose {}", player_move.to_string().bold());

    for tick in countdown {
        println!("{}", tick.label.dimmed());
        thread::sleep(tick.delay);
    }

    match game.reveal() {
        Ok(_) => true,
        Err(err) => {
            log::warn!("{err}");
            false
        }
    }
}

fn play_cues(game: &mut Game<FileSlot, UniformComputer>) {
    for cue in game.drain_cues() {
        match cue {
            Cue::Click => {}
            Cue::Win | Cue::Lose | Cue::Draw => print!("\x07"),
        }
    }
}

fn render(view: &View, revealed_at: Option<Instant>) {
    let dark = view.theme == Theme::Dark;
    let heading = |s: &str| if dark { s.bright_white().bold() } else { s.black().bold() };

    println!();
    println!(
        "{}  {} {}   {} {}",
        heading("Score"),
        side_label(view, Side::Player, revealed_at),
        view.scores.player,
        side_label(view, Side::Computer, revealed_at),
        view.scores.computer,
    );

    if let (Some(player), Some(computer)) = (view.player_move, view.computer_move) {
        println!("{} vs {}", player.to_string().cyan(), computer.to_string().magenta());
    }

    let message = match view.outcome {
        Some(Outcome::Win) => view.message.green().bold(),
        Some(Outcome::Lose) => view.message.red().bold(),
        Some(Outcome::Draw) => view.message.yellow().bold(),
        None => view.message.normal(),
    };
    println!("{message}");

    if let Some(tip) = view.tip {
        println!("{}", tip.italic());
    }
    println!("{} {}", view.sound_glyph, view.theme_glyph);
}

fn side_label(view: &View, side: Side, revealed_at: Option<Instant>) -> colored::ColoredString {
    let label = side.to_string();
    let lit = match (view.highlight_for, revealed_at) {
        (Some(duration), Some(at)) => at.elapsed() < duration,
        _ => false,
    };
    if lit && view.highlight == Some(side) {
        label.green().bold()
    } else {
        label.normal()
    }
}

fn default_state_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("rust-rps"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn log(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(err) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logger already initialized: {err}");
    }
}
