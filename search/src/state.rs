use std::sync::mpsc::Sender;
use std::time::Duration;

use ahash::AHashMap;
use cozy_chess::Board;
use evaluation::HCE;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use uci::{commands::Info, move_to_uci, UciOutput};
use utils::Position;

use crate::{EngineConfig, SearchResult};

/// What every strategy keeps between UCI commands: its configuration, evaluator,
/// random source and the root position to search from.
pub(crate) struct EngineState {
    pub config: EngineConfig,
    pub hce: Box<dyn HCE>,
    pub rng: StdRng,

    board: Board,
    game_history: AHashMap<u64, usize>,
}

impl EngineState {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            config: config.clone(),
            hce: Box::new(hce::Evaluator::new(config.get_hce_config())),
            rng: StdRng::seed_from_u64(config.seed.value),
            board: Board::default(),
            game_history: AHashMap::new(),
        }
    }

    pub fn configure(&mut self, config: &EngineConfig) {
        let reseed = self.config.seed.value != config.seed.value;
        self.config = config.clone();

        self.hce = Box::new(hce::Evaluator::new(config.get_hce_config()));
        if reseed {
            self.rng = StdRng::seed_from_u64(config.seed.value);
        }
    }

    pub fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.config.seed.value);
        self.board = Board::default();
        self.game_history.clear();
    }

    pub fn set_position(&mut self, board: Board, game_history: AHashMap<u64, usize>) {
        self.board = board;
        self.game_history = game_history;
    }

    /// A fresh search root. Nothing from earlier searches carries over.
    pub fn root(&self) -> Position {
        Position::with_history(self.board.clone(), self.game_history.clone())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn send_search_info(
        &self,
        output: Option<&Sender<UciOutput>>,
        result: &SearchResult,
        elapsed: Duration,
    ) {
        let Some(output) = output else {
            return;
        };

        let info = Info {
            depth: result.depth,
            nodes: result.nodes,
            time: elapsed.as_millis() as u64,
            score: result.score,
            pv: vec![move_to_uci(&self.board, result.best_move)],
        };
        if output.send(UciOutput::Info(info)).is_err() {
            debug!("Search info dropped, output closed");
        }
    }
}
