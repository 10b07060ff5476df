mod config;
mod ui;

use std::str::FromStr;

use clap::Parser;
use eframe::egui;
use tictactoe_common::games::tictactoe::Difficulty;
use tictactoe_common::{log, logger};

use config::{GameModeKind, get_config_manager};
use ui::MenuApp;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Start straight into a game: pvp or pve
    #[arg(long, value_parser = GameModeKind::from_str)]
    mode: Option<GameModeKind>,

    /// Computer difficulty: easy, medium or hard
    #[arg(long, value_parser = Difficulty::from_str)]
    difficulty: Option<Difficulty>,

    /// Path to the config file, defaults to next to the executable
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    let start_mode = args.mode.map(|mode| mode.with_difficulty(config.difficulty));

    log!(
        "Tic-tac-toe client starting, difficulty {}, bot delay {}ms",
        config.difficulty,
        config.bot_move_delay_ms
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width as f32, config.window.height as f32])
            .with_title("Tic-tac-toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-tac-toe",
        options,
        Box::new(move |_cc| Ok(Box::new(MenuApp::new(config_manager, config, start_mode)))),
    )?;

    Ok(())
}
