mod config;
mod eval_checks;
mod eval_development;
mod eval_material;
mod eval_pawns;
mod eval_threats;

pub use config::HCEConfig;

use evaluation::{scores::terminal_score, HCE};
use log::trace;
use rand::RngCore;
use utils::Position;

/// Hand-Crafted Evaluation: material, pawn advancement and structure, development,
/// and the capture threats (optionally check danger) both sides hold.
///
/// <https://www.chessprogramming.org/Evaluation>
pub struct Evaluator {
    config: HCEConfig,
}

impl Evaluator {
    pub fn new(config: HCEConfig) -> Self {
        Self { config }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(HCEConfig::default())
    }
}

impl HCE for Evaluator {
    fn name(&self) -> String {
        "HCE".to_string()
    }

    /// Evaluates from the side to move's perspective. Positive = side to move is better.
    fn evaluate(
        &mut self,
        position: &mut Position,
        rng: &mut dyn RngCore,
        check_danger: bool,
    ) -> i16 {
        if position.is_game_over(false) {
            return terminal_score(position);
        }

        let board = position.board();
        let us = board.side_to_move();
        let them = !us;

        let mut cp: i16 = 0;

        cp += eval_material::evaluate(board, us);
        cp -= eval_material::evaluate(board, them);

        cp += eval_pawns::evaluate(board, us, &self.config);
        cp -= eval_pawns::evaluate(board, them, &self.config);

        cp += eval_development::evaluate(board, us, &self.config);
        cp -= eval_development::evaluate(board, them, &self.config);

        trace!("basic score = {}", cp);

        cp += eval_threats::evaluate(position, rng, check_danger, &self.config);

        cp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Board;
    use rand::{rngs::StdRng, SeedableRng};

    fn eval(fen: &str, check_danger: bool) -> i16 {
        let mut position = Position::new(fen.parse::<Board>().unwrap());
        let before = position.board().clone();
        let mut rng = StdRng::seed_from_u64(5);

        let score = Evaluator::default().evaluate(&mut position, &mut rng, check_danger);
        assert_eq!(position.board(), &before);
        score
    }

    #[test]
    fn test_terminal_positions() {
        assert_eq!(eval("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1", false), -20000);
        assert_eq!(eval("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", true), 0);
        assert_eq!(eval("k7/8/8/8/8/8/8/KN6 w - - 0 1", false), 0);
    }

    #[test]
    fn test_start_position_is_balanced() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(eval(start, false), 0);
        assert_eq!(eval(start, true), 0);
    }

    #[test]
    fn test_free_queen_capture() {
        // Before: -400 material, +765 for the hanging queen. After Rxd5: -500 for black.
        assert_eq!(eval("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1", false), 365);
        assert_eq!(eval("4k3/8/8/3R4/8/8/8/4K3 b - - 0 1", false), -500);
    }

    #[test]
    fn test_mirrored_positions_score_equal() {
        let white = "4k3/8/2p5/3r4/8/4N3/8/3RK3 w - - 0 1";
        let black = "3rk3/8/4n3/8/3R4/2P5/8/4K3 b - - 0 1";

        assert_eq!(eval(white, false), 445);
        assert_eq!(eval(black, false), 445);

        // The opponent has a safe rook check, Rxd1+ or Rxd8+, once it is their turn
        assert_eq!(eval(white, true), 428);
        assert_eq!(eval(black, true), 428);
    }

    #[test]
    fn test_central_pawn_push_preferred() {
        // Scored for black, after white's first move
        let after_e4 = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
        let after_a4 = "rnbqkbnr/pppppppp/8/8/P7/8/1PPPPPPP/RNBQKBNR b KQkq - 0 1";

        assert_eq!(eval(after_e4, false), -20);
        assert_eq!(eval(after_a4, false), 0);
    }
}
