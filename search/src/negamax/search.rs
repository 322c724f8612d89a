use cozy_chess::Move;
use evaluation::scores::{clamp_decisive, terminal_score};
use rand::seq::SliceRandom;
use utils::Position;

use super::NegamaxEngine;

impl NegamaxEngine {
    /// Side-to-move-relative score of `position` searched `depth` plies deep, and the move
    /// that achieves it. No move is returned at the horizon or when the game is over.
    ///
    /// Moves are tried in random order. A later move only replaces the incumbent when it
    /// beats it by more than the score window, so near-equal moves keep the first one found.
    pub(super) fn negamax(
        &mut self,
        position: &mut Position,
        depth: u8,
        mut alpha: i16,
        beta: i16,
    ) -> (i16, Option<Move>) {
        if depth == 0 {
            return (self.quiescence(position, alpha, beta), None);
        }

        self.nodes += 1;

        // The root was checked by the caller with the automatic rules only
        if position.ply() > 0 && position.is_game_over(true) {
            return (terminal_score(position), None);
        }

        let mut moves = position.legal_moves();
        moves.shuffle(&mut self.state.rng);

        let window = self.state.config.score_window.value;
        let mut best_move = None;
        let mut best_score = i16::MIN;

        for mv in moves {
            position.push(mv);
            let (child_score, _) = self.negamax(position, depth - 1, -beta, -alpha);
            position.pop();

            let score = clamp_decisive(-child_score);

            if best_move.is_none() || score > best_score.saturating_add(window) {
                best_move = Some(mv);
                best_score = score;
            }
            best_score = best_score.max(score);

            if score >= beta {
                return (best_score, best_move);
            }
            if score > alpha {
                alpha = score;
            }
        }

        (best_score, best_move)
    }
}
