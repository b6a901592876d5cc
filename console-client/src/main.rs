mod config;
mod console_game;

use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use tictactoe_engine::games::tictactoe::FirstPlayerMode;
use tictactoe_engine::{SessionRng, log, logger};

use console_game::ConsoleGame;

#[derive(Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    Random,
    Human,
    Ai,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Random => FirstPlayerMode::Random,
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Ai => FirstPlayerMode::Ai,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe against a perfect AI")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Who makes the first move
    #[arg(long, value_enum)]
    first: Option<FirstPlayerArg>,

    /// Seed for the first-player choice and the random bot
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Disable log output on stderr
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, !args.quiet);

    let config = config::get_config_manager(args.config).get_config()?;

    let mut settings = config.game;
    if let Some(first) = args.first {
        settings.first_player = first.into();
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let mut rng = SessionRng::from_optional_seed(settings.seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = ConsoleGame::new(stdin.lock(), stdout.lock(), config.show_search_stats);

    match game.run(&settings, &mut rng)? {
        Some(outcome) => log!("Finished with {:?}", outcome),
        None => log!("Exited before the game finished"),
    }

    Ok(())
}
