use std::time::{Duration, Instant};

use ahash::AHashMap;
use cozy_chess::Board;
use search::{create_engine, EngineConfig, SearchResult, Strategy};
use uci::commands::GoParams;
use utils::move_to_san;

/// Opening, middlegame and endgame positions with tactics for the threat logic to find.
const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
];

pub fn run(depth: u8, nodes: u64) {
    println!("Running benchmark: depth {}, nodes {}\n", depth, nodes);

    let params = GoParams {
        depth: Some(depth),
        nodes: Some(nodes),
    };

    for strategy in [Strategy::BestFirst, Strategy::Negamax, Strategy::Greedy] {
        let mut config = EngineConfig::default();
        config.strategy.value = strategy;
        let mut engine = create_engine(&config);

        println!("=== {} ===", engine.name());

        let mut total_nodes = 0;
        let mut total_time = Duration::ZERO;

        for fen in POSITIONS {
            let Ok(board) = fen.parse::<Board>() else {
                continue;
            };

            engine.new_game();
            engine.set_position(board.clone(), AHashMap::new());

            let start = Instant::now();
            let result = engine.search(&params, None);
            let elapsed = start.elapsed();

            print_result(&board, result.as_ref(), elapsed);

            total_nodes += result.map_or(0, |r| r.nodes);
            total_time += elapsed;
        }

        println!(
            "Total: {} nodes in {} ms ({} nps)\n",
            total_nodes,
            total_time.as_millis(),
            nodes_per_second(total_nodes, total_time)
        );
    }
}

fn print_result(board: &Board, result: Option<&SearchResult>, elapsed: Duration) {
    match result {
        Some(result) => println!(
            "{:<8} score {:>6}  nodes {:>8}  time {:>6} ms  {}",
            move_to_san(board, result.best_move),
            result.score,
            result.nodes,
            elapsed.as_millis(),
            board
        ),
        None => println!("{:<8} no move  {}", "-", board),
    }
}

fn nodes_per_second(nodes: u64, elapsed: Duration) -> u64 {
    let seconds = elapsed.as_secs_f64();
    if seconds > 0.0 {
        (nodes as f64 / seconds) as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_parse() {
        for fen in POSITIONS {
            assert!(fen.parse::<Board>().is_ok(), "{}", fen);
        }
    }

    #[test]
    fn test_nodes_per_second() {
        assert_eq!(nodes_per_second(5000, Duration::from_millis(500)), 10_000);
        assert_eq!(nodes_per_second(5000, Duration::ZERO), 0);
    }
}
