use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use snake_classic::config::{BOARD_CLASSIC, BOARD_WIDE, Level, THEME_CLASSIC, TICK_INTERVAL_MS};
use snake_classic::game::{GameState, Phase};
use snake_classic::grid::GridSize;
use snake_classic::input::{InputHandler, MenuChoice};
use snake_classic::platform::Platform;
use snake_classic::renderer;
use snake_classic::score::{append_session, load_high_score, load_sessions, save_high_score};
use snake_classic::sound::SoundPlayer;
use snake_classic::terminal_runtime::{TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Difficulty level: 1 beginner, 2 intermediate, 3 advanced.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    level: u8,

    /// Player name recorded in the session log.
    #[arg(short, long, default_value = "player")]
    player: String,

    /// Play on the 50x20 wide board instead of the classic 30x20.
    #[arg(long)]
    wide: bool,

    /// Seed the session RNG for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable sound effects.
    #[arg(long)]
    quiet: bool,

    /// Print past sessions and the high score, then exit.
    #[arg(long)]
    scores: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.scores {
        show_scores();
        return Ok(());
    }

    install_panic_hook();
    run(&cli)
}

fn run(cli: &Cli) -> io::Result<()> {
    let grid = if cli.wide { BOARD_WIDE } else { BOARD_CLASSIC };
    let level = Level::from_number(cli.level).expect("clap range keeps level in 1..=3");
    let sound = SoundPlayer::new(!cli.quiet, Platform::detect());

    let mut high_score = match load_high_score() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("Warning: could not load high score: {error}");
            0
        }
    };

    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);

    loop {
        let mut state = new_session(grid, level, &cli.player, high_score, cli.seed);
        let mut last_tick = Instant::now();

        while state.phase != Phase::Over {
            session
                .terminal_mut()
                .draw(|frame| renderer::render(frame, &state.snapshot(), &THEME_CLASSIC))?;

            input.poll()?;

            if last_tick.elapsed() >= tick_interval {
                if let Some(event) = state.step(input.take_command()) {
                    sound.on_event(event);
                }
                last_tick = Instant::now();
            }

            thread::sleep(Duration::from_millis(16));
        }

        persist_session(&state, high_score);
        high_score = state.high_score;

        // One more frame so the game-over popup is on screen while we wait.
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state.snapshot(), &THEME_CLASSIC))?;

        match input.wait_for_menu_choice()? {
            MenuChoice::Restart => {}
            MenuChoice::Quit => break,
        }
    }

    Ok(())
}

fn new_session(
    grid: GridSize,
    level: Level,
    player: &str,
    high_score: i32,
    seed: Option<u64>,
) -> GameState {
    match seed {
        Some(seed) => GameState::new_with_seed(grid, level, player, high_score, seed),
        None => GameState::new(grid, level, player, high_score),
    }
}

/// Writes the session log entry and, when beaten, the new high score.
///
/// Storage failures are reported and otherwise ignored; they must never take
/// the game down.
fn persist_session(state: &GameState, previous_high_score: i32) {
    let summary = state.session_summary();

    if let Err(error) = append_session(&summary) {
        eprintln!("Failed to record session: {error}");
    }

    if state.high_score > previous_high_score {
        if let Err(error) = save_high_score(state.high_score) {
            eprintln!("Failed to save high score: {error}");
        }
    }
}

fn show_scores() {
    match load_sessions() {
        Ok(records) if records.is_empty() => println!("No past scores found."),
        Ok(records) => {
            for record in records {
                println!(
                    "Player: {} | Score: {} | Played at: {}",
                    record.player, record.score, record.timestamp
                );
            }
        }
        Err(error) => eprintln!("Could not read past sessions: {error}"),
    }

    match load_high_score() {
        Ok(score) => println!("High Score: {score}"),
        Err(error) => eprintln!("Could not read high score: {error}"),
    }
}
