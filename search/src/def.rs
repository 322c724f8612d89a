use crate::EngineConfig;
use ahash::AHashMap;
use cozy_chess::{Board, Move};
use std::sync::mpsc::Sender;
use uci::{commands::GoParams, UciOutput};

/// Outcome of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Side-to-move-relative score of the root.
    pub score: i16,
    pub nodes: u64,
    pub depth: u8,
}

pub trait Engine {
    fn name(&self) -> String;
    fn configure(&mut self, config: &EngineConfig);
    fn new_game(&mut self);
    fn set_position(&mut self, board: Board, game_history: AHashMap<u64, usize>);
    /// Returns `None` when the position has no move to play.
    fn search(
        &mut self,
        params: &GoParams,
        output: Option<&Sender<UciOutput>>,
    ) -> Option<SearchResult>;
}
