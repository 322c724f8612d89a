//! Fixed-depth negamax with alpha-beta pruning and a capture-only quiescence tail.
//!
//! <https://www.chessprogramming.org/Negamax>

mod quiescence;
mod search;

use std::sync::mpsc::Sender;
use std::time::Instant;

use ahash::AHashMap;
use cozy_chess::Board;
use evaluation::scores::KING_COST;
use log::info;
use uci::{commands::GoParams, UciOutput};
use utils::move_to_san;

use crate::{state::EngineState, Engine, EngineConfig, SearchResult};

pub struct NegamaxEngine {
    state: EngineState,

    /// Nodes visited in the current search, quiescence included.
    nodes: u64,
}

impl NegamaxEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            state: EngineState::new(config),
            nodes: 0,
        }
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> String {
        format!("Negamax ({})", self.state.hce.name())
    }

    fn configure(&mut self, config: &EngineConfig) {
        self.state.configure(config);
    }

    fn new_game(&mut self) {
        self.state.new_game();
    }

    fn set_position(&mut self, board: Board, game_history: AHashMap<u64, usize>) {
        self.state.set_position(board, game_history);
    }

    fn search(
        &mut self,
        params: &GoParams,
        output: Option<&Sender<UciOutput>>,
    ) -> Option<SearchResult> {
        let mut position = self.state.root();
        if position.is_game_over(false) {
            return None;
        }

        // Depth 0 would go straight to the tail, which never names a move
        let depth = params.depth.unwrap_or(self.state.config.depth.value).max(1);
        let start = Instant::now();
        self.nodes = 0;

        let (score, best_move) = self.negamax(&mut position, depth, -KING_COST, KING_COST);
        let best_move = best_move?;

        let result = SearchResult {
            best_move,
            score,
            nodes: self.nodes,
            depth,
        };

        info!("Negamax move: {}", move_to_san(self.state.board(), best_move));
        self.state.send_search_info(output, &result, start.elapsed());

        Some(result)
    }
}
