//! One-ply search: every legal move is scored by a single evaluation of the position
//! it leads to, with check danger optionally taken into account.

use std::sync::mpsc::Sender;
use std::time::Instant;

use ahash::AHashMap;
use cozy_chess::{Board, Move};
use evaluation::scores::KING_COST;
use log::info;
use rand::seq::SliceRandom;
use uci::{commands::GoParams, UciOutput};
use utils::{move_to_san, Position};

use crate::{state::EngineState, Engine, EngineConfig, SearchResult};

pub struct GreedyEngine {
    state: EngineState,
}

impl GreedyEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            state: EngineState::new(config),
        }
    }

    /// Score of playing `mv`, from the mover's side.
    fn score_move(&mut self, position: &mut Position, mv: Move) -> i16 {
        let check_danger = self.state.config.check_danger.value;

        position.push(mv);
        let score = if position.is_game_over(true) {
            if position.is_checkmate() {
                KING_COST
            } else {
                0
            }
        } else {
            -self
                .state
                .hce
                .evaluate(position, &mut self.state.rng, check_danger)
        };
        position.pop();

        score
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> String {
        format!("Greedy ({})", self.state.hce.name())
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
        _params: &GoParams,
        output: Option<&Sender<UciOutput>>,
    ) -> Option<SearchResult> {
        let mut position = self.state.root();
        if position.is_game_over(false) {
            return None;
        }

        let start = Instant::now();
        let mut moves = position.legal_moves();
        moves.shuffle(&mut self.state.rng);

        let mut best: Option<(Move, i16)> = None;
        for &mv in &moves {
            let score = self.score_move(&mut position, mv);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        let (best_move, score) = best?;
        let result = SearchResult {
            best_move,
            score,
            nodes: moves.len() as u64,
            depth: 1,
        };

        info!("Greedy move: {}", move_to_san(self.state.board(), best_move));
        self.state.send_search_info(output, &result, start.elapsed());

        Some(result)
    }
}
