mod config;
mod ui;

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use tictactoe_engine::{SessionRng, log, logger};

use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_desktop", about = "Play tic-tac-toe against a perfect AI")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

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
        Some("Desktop".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, !args.quiet);

    let config = config::get_config_manager(args.config).get_config()?;

    let mut settings = config.game;
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let rng = SessionRng::from_optional_seed(settings.seed);
    log!("Session seed {}", rng.seed());
    let app = TicTacToeApp::new(settings, rng)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;

    Ok(())
}
