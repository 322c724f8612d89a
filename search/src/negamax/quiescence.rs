use evaluation::{enumerate_threats, scores::terminal_score};
use utils::Position;

use super::NegamaxEngine;

impl NegamaxEngine {
    /// Extends the horizon with winning captures only, so the static evaluation is never
    /// taken in the middle of an exchange. Draws by claim are not considered here.
    ///
    /// <https://www.chessprogramming.org/Quiescence_Search>
    pub(super) fn quiescence(
        &mut self,
        position: &mut Position,
        mut alpha: i16,
        beta: i16,
    ) -> i16 {
        self.nodes += 1;

        if position.is_game_over(false) {
            return terminal_score(position);
        }

        let stand_pat = self
            .state
            .hce
            .evaluate(position, &mut self.state.rng, false);
        if stand_pat >= beta {
            return stand_pat;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let threats = enumerate_threats(position, &mut self.state.rng);
        if threats.is_empty() {
            return stand_pat;
        }

        let mut best_score = stand_pat;
        for mv in position.legal_moves() {
            if !threats.iter().any(|t| t.matches(mv)) {
                continue;
            }

            position.push(mv);
            let score = -self.quiescence(position, -beta, -alpha);
            position.pop();

            if score > best_score {
                best_score = score;
                if score >= beta {
                    return score;
                }
                if score > alpha {
                    alpha = score;
                }
            }
        }

        best_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineConfig;
    use cozy_chess::Board;
    use evaluation::scores::KING_COST;

    fn tail(fen: &str) -> (i16, u64) {
        let mut engine = NegamaxEngine::new(&EngineConfig::default());
        let mut position = Position::new(fen.parse::<Board>().unwrap());
        let before = position.board().clone();

        let score = engine.quiescence(&mut position, -KING_COST, KING_COST);

        assert_eq!(position.board(), &before);
        (score, engine.nodes)
    }

    #[test]
    fn test_terminal_positions() {
        assert_eq!(tail("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1").0, -KING_COST);
        assert_eq!(tail("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").0, 0);
    }

    #[test]
    fn test_quiet_position_is_stand_pat() {
        let (score, nodes) = tail("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(score, 0);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn test_resolves_winning_capture() {
        // Stand pat says 365, taking the queen settles at +500
        let (score, nodes) = tail("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
        assert_eq!(score, 500);
        assert_eq!(nodes, 2);
    }
}
