/// Entry point: config, logging, terminal session and the menu loop.

mod config;
mod domain;
mod error;
mod sim;
mod ui;

use std::fs::File;

use log::{error, info, LevelFilter};

use config::GameConfig;
use domain::spawn::SpawnSelector;
use error::GameError;
use sim::scores::FileScoreStore;
use sim::session::{self, Outcome};
use sim::world::WorldState;
use ui::art::Art;
use ui::input::TerminalInput;
use ui::renderer::Renderer;
use ui::screens::{self, MenuChoice};
use ui::terminal::TerminalSession;

fn main() {
    let config = GameConfig::load();
    init_logging(&config);
    info!("starting with {:?}", config.arena);

    let term = match TerminalSession::start() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Terminal init failed: {e}");
            return;
        }
    };

    let result = menu_loop(&config);

    if let Err(e) = term.finish() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    match result {
        Ok(Some(score)) => {
            println!("Thanks for playing VimWizards!");
            println!("Final Score: {}", score);
        }
        Ok(None) => println!("Thanks for playing VimWizards!"),
        Err(e) => {
            error!("{e}");
            eprintln!("Game error: {e}");
        }
    }
}

/// Log to a file: stdout belongs to the alternate screen while playing.
fn init_logging(config: &GameConfig) {
    let file = match File::create(&config.log_file) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Logging disabled ({}): {e}", config.log_file.display());
            return;
        }
    };
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_env("RUST_LOG")
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

/// Runs until the player picks Quit. Returns the last game's score, if any.
fn menu_loop(config: &GameConfig) -> Result<Option<u32>, GameError> {
    let art = Art::load(&config.assets_dir);
    let mut store = FileScoreStore::new(&config.scores_file);
    info!("scores kept in {}", store.path().display());
    let mut renderer = Renderer::new();
    let mut last_score = None;

    loop {
        match screens::title_screen(&mut renderer, &art)? {
            MenuChoice::StartGame => {
                let outcome = play(config, &mut renderer)?;
                last_score = Some(outcome.score());
                if let Outcome::GameOver { score } = outcome {
                    screens::game_over_screen(&mut renderer, &art, score, &mut store, config.top_n)?;
                }
            }
            MenuChoice::HighScores => {
                screens::high_score_screen(&mut renderer, &mut store, config.top_n, "")?;
            }
            MenuChoice::Quit => return Ok(last_score),
        }
    }
}

fn play(config: &GameConfig, renderer: &mut Renderer) -> Result<Outcome, GameError> {
    let spawner = match config.seed {
        Some(seed) => SpawnSelector::seeded(seed),
        None => SpawnSelector::from_entropy(),
    };
    let mut world = WorldState::new(&config.arena, spawner)?;
    let mut input = TerminalInput::new(config.arena.height - 1);
    let outcome = session::run(&mut world, &mut input, renderer)?;
    info!("game finished: {:?} after {} moves", outcome, world.moves);
    Ok(outcome)
}
