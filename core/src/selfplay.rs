//! Plays one game between two strategies and prints it move by move.

use std::error::Error;

use ahash::AHashMap;
use cozy_chess::{Board, Color};
use log::{info, warn};
use search::{create_engine, Engine, EngineConfig, Strategy};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use uci::commands::GoParams;
use utils::{move_to_san, Position};

use crate::args::SelfplayArgs;

pub fn run(args: &SelfplayArgs) -> Result<(), Box<dyn Error>> {
    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let board = match &args.fen {
        Some(fen) => fen
            .parse::<Board>()
            .map_err(|e| format!("Invalid FEN {:?}: {:?}", fen, e))?,
        None => Board::default(),
    };

    let mut white = create_engine(&player_config(args, args.white, args.seed));
    let mut black = create_engine(&player_config(args, args.black, args.seed.wrapping_add(1)));
    info!("{} (white) vs {} (black)", white.name(), black.name());

    let params = GoParams {
        depth: Some(args.depth),
        nodes: Some(args.nodes),
    };

    let mut game = Position::new(board);
    let mut history: AHashMap<u64, usize> = AHashMap::new();
    let start_move = game.board().fullmove_number();

    println!("{}", game.board());

    while !game.is_game_over(false) {
        if game.board().fullmove_number() - start_move >= args.max_moves as u16 {
            info!("Move limit reached");
            break;
        }

        let side = game.side_to_move();
        let engine: &mut dyn Engine = match side {
            Color::White => white.as_mut(),
            Color::Black => black.as_mut(),
        };

        engine.set_position(game.board().clone(), history.clone());
        let Some(result) = engine.search(&params, None) else {
            warn!("{:?} found no move in a live position", side);
            break;
        };

        let san = move_to_san(game.board(), result.best_move);
        let number = game.board().fullmove_number();
        match side {
            Color::White => println!("{}. {} ({})", number, san, result.score),
            Color::Black => println!("{}... {} ({})", number, san, result.score),
        }

        *history.entry(game.board().hash()).or_insert(0) += 1;
        game.push(result.best_move);
        println!("{}", game.board());
    }

    println!("{}", outcome(&game));
    Ok(())
}

fn player_config(args: &SelfplayArgs, strategy: Strategy, seed: u64) -> EngineConfig {
    let mut config = EngineConfig::default();
    config.strategy.value = strategy;
    config.nodes.value = args.nodes;
    config.depth.value = args.depth;
    config.seed.value = seed;
    config
}

/// PGN-style result of the game so far.
fn outcome(game: &Position) -> &'static str {
    if game.is_checkmate() {
        match game.side_to_move() {
            Color::White => "0-1",
            Color::Black => "1-0",
        }
    } else if game.is_game_over(false) {
        "1/2-1/2"
    } else {
        "*"
    }
}
