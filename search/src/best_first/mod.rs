//! Best-first anytime search.
//!
//! The tree grows one leaf expansion at a time along the path that currently looks most
//! promising, tempered by a penalty on subtrees that have already received many visits.
//! It stops when the tree holds `nodes` leaves or every line has been resolved.

mod tree;

pub use tree::Node;

use std::sync::mpsc::Sender;
use std::time::Instant;

use ahash::AHashMap;
use cozy_chess::{Board, Move};
use evaluation::scores::terminal_score;
use log::{debug, info, log_enabled, Level};
use rand::seq::SliceRandom;
use uci::{commands::GoParams, UciOutput};
use utils::{move_to_san, Position};

use crate::{state::EngineState, Engine, EngineConfig, SearchResult};

/// Cost per natural-log unit of subtree size when choosing which child to grow.
pub const VISIT_PENALTY: i16 = 50;

pub struct BestFirstEngine {
    state: EngineState,
}

impl BestFirstEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            state: EngineState::new(config),
        }
    }

    /// Grows a fresh tree for `position` until it is complete or holds `budget` leaves.
    /// The root is always expanded, so a live position yields a move even on a tiny budget.
    pub fn grow_tree(&mut self, position: &mut Position, budget: u64) -> Node {
        let budget = budget.max(1);
        let mut root = Node::root();
        let mut prev_progress = 0;

        while !root.complete && (root.is_leaf() || root.size < budget) {
            let progress = root.size * 100 / budget;
            if progress - prev_progress >= 10 {
                info!("Progress: {}%", progress);
                prev_progress = progress;
            }

            if log_enabled!(Level::Debug) {
                debug!("{}", self.improvement_path(position, &root));
            }
            self.improve(position, &mut root);
        }

        root
    }

    /// Picks uniformly among the children scoring within the score window of the best.
    pub fn choose_child(&mut self, root: &Node) -> Option<Move> {
        let children = root.children.as_ref()?;
        let best = root.min_child_score()?;
        let window = self.state.config.score_window.value;

        let candidates: Vec<Move> = children
            .iter()
            .filter(|c| c.score <= best.saturating_add(window))
            .filter_map(|c| c.mv)
            .collect();

        candidates.choose(&mut self.state.rng).copied()
    }

    fn improve(&mut self, position: &mut Position, node: &mut Node) {
        if node.is_leaf() {
            self.expand(position, node);
            return;
        }

        let visit_penalty = self.state.config.visit_penalty.value;
        let Some(index) = node.child_to_improve(visit_penalty) else {
            node.complete = true;
            return;
        };

        if let Some(children) = node.children.as_mut() {
            let child = &mut children[index];
            if let Some(mv) = child.mv {
                position.push(mv);
                self.improve(position, child);
                position.pop();
            }
        }

        node.aggregate();
    }

    fn expand(&mut self, position: &mut Position, node: &mut Node) {
        if position.is_game_over(false) {
            node.score = terminal_score(position);
            node.complete = true;
            return;
        }

        let moves = position.legal_moves();
        let mut children = Vec::with_capacity(moves.len());

        for mv in moves {
            position.push(mv);
            let score = self.state.hce.evaluate(position, &mut self.state.rng, false);
            position.pop();

            children.push(Node::leaf(mv, score));
        }

        node.children = Some(children);
        node.aggregate();
    }

    /// The line the next improvement step will follow, in SAN, ending with the leaf score.
    fn improvement_path(&self, position: &mut Position, root: &Node) -> String {
        let visit_penalty = self.state.config.visit_penalty.value;
        let mut parts = Vec::new();
        let mut node = root;
        let mut pushed = 0;

        loop {
            let next = node
                .child_to_improve(visit_penalty)
                .and_then(|index| node.children.as_ref().map(|c| &c[index]));
            let Some(child) = next else {
                break;
            };
            let Some(mv) = child.mv else {
                break;
            };

            parts.push(move_to_san(position.board(), mv));
            position.push(mv);
            pushed += 1;
            node = child;
        }
        parts.push(node.score.to_string());

        for _ in 0..pushed {
            position.pop();
        }

        parts.join(" ")
    }
}

impl Engine for BestFirstEngine {
    fn name(&self) -> String {
        format!("BestFirst ({})", self.state.hce.name())
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

        let budget = params.nodes.unwrap_or(self.state.config.nodes.value);
        let start = Instant::now();

        let root = self.grow_tree(&mut position, budget);
        let best_move = self.choose_child(&root)?;

        let result = SearchResult {
            best_move,
            score: root.score,
            nodes: root.size,
            depth: root.principal_line().len().min(u8::MAX as usize) as u8,
        };

        info!(
            "BestFirst move: {}",
            move_to_san(self.state.board(), best_move)
        );
        self.state.send_search_info(output, &result, start.elapsed());

        Some(result)
    }
}
