mod args;
mod bench;
mod selfplay;

use ahash::AHashMap;
use args::{Args, Command};
use clap::Parser;
use cozy_chess::Board;
use log::{debug, info, LevelFilter};
use search::{create_engine, EngineConfig};
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;
use uci::{move_to_uci, UciConnection, UciInput, UciOutput, NULL_MOVE};

const ENGINE_NAME: &str = "Halberd";
const ENGINE_AUTHOR: &str = "Halberd developers";

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match &args.command {
        Some(Command::Selfplay(selfplay)) => return selfplay::run(selfplay),
        Some(Command::Bench { depth, nodes }) => {
            bench::run(*depth, *nodes);
            return Ok(());
        }
        None => {}
    }

    init(&args)?;

    let mut config = EngineConfig::default();
    let mut engine = create_engine(&config);

    // Kept here so a strategy switch can hand the new engine the current game
    let mut board = Board::default();
    let mut history = AHashMap::new();

    UciConnection::new().listen(|input, output| {
        match input {
            UciInput::Uci => {
                output.send(UciOutput::IdName(format!(
                    "{} {}",
                    ENGINE_NAME,
                    env!("CARGO_PKG_VERSION")
                )))?;
                output.send(UciOutput::IdAuthor(ENGINE_AUTHOR.to_string()))?;
                config.to_uci(&output)?;
                output.send(UciOutput::UciOk)?;
            }
            UciInput::IsReady => {
                output.send(UciOutput::ReadyOk)?;
            }
            UciInput::SetOption { name, value } => {
                let strategy = config.strategy.value;

                if let Err(e) = config.update_from_uci(name, value) {
                    debug!("Option setting failed: {}", e);
                } else if config.strategy.value != strategy {
                    info!("Switching strategy to {}", config.strategy.value);
                    engine = create_engine(&config);
                    engine.set_position(board.clone(), history.clone());
                } else {
                    debug!("Set option '{}' to '{}'", name, value);
                    engine.configure(&config);
                }
            }
            UciInput::UciNewGame => {
                board = Board::default();
                history.clear();
                engine.new_game();
            }
            UciInput::Position {
                board: new_board,
                game_history,
            } => {
                board = new_board.clone();
                history = game_history.clone();
                engine.set_position(board.clone(), history.clone());
            }
            UciInput::Go(params) => {
                let best_move = match engine.search(params, Some(&output)) {
                    Some(result) => move_to_uci(&board, result.best_move),
                    None => NULL_MOVE.to_string(),
                };
                output.send(UciOutput::BestMove(best_move))?;
            }
            // Searches run to completion before the next command is read
            UciInput::Stop | UciInput::Quit => {}
            UciInput::Unknown(_) => {}
        }
        Ok(())
    })?;

    Ok(())
}

fn init(args: &Args) -> Result<(), Box<dyn Error>> {
    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(())
}
