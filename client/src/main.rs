mod config;
mod local_game;
mod state;
mod ui;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tictactoe_common::tictactoe::GameMode;
use tictactoe_common::{log, log_error, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use local_game::{CommandOutcome, LocalGame};
use state::{ClientCommand, HELP_TEXT};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Pvp,
    Pva,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::HumanVsHuman,
            ModeArg::Pva => GameMode::HumanVsComputer,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a friend or an unbeatable computer")]
struct Args {
    /// Starting mode; overrides the config file.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::get_config_manager(args.config).get_config()?;
    let mode = args.mode.map(GameMode::from).unwrap_or(config.mode);
    log!("Starting {} game, computer delay {} ms", mode, config.computer_delay_ms);

    let mut game = LocalGame::new(
        mode,
        config.computer_delay(),
        config.show_cell_numbers,
        std::io::stdout(),
    );

    println!("{}", HELP_TEXT);
    game.render()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<ClientCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match game.handle_command(command).await {
            Ok(CommandOutcome::Continue) => {}
            Ok(CommandOutcome::Quit) => break,
            Err(e) => {
                log_error!("{}", e);
                return Err(e.into());
            }
        }
    }

    log!("Bye");
    Ok(())
}
