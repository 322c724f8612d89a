use super::HCEConfig;
use arrayvec::ArrayVec;
use cozy_chess::{Piece, Square};
use evaluation::{piece_cost, resolve_exchange};
use rand::RngCore;
use utils::{
    moves::{captured_piece, landing_square},
    Position,
};

/// Check danger for the side to move: pieces that can give a check the opponent
/// cannot punish by winning back more than the check itself captured.
///
/// Each origin square counts once, on the first safe check found from it.
pub(super) fn evaluate(position: &mut Position, rng: &mut dyn RngCore, config: &HCEConfig) -> i16 {
    let mut checkers = ArrayVec::<Square, 16>::new();

    for mv in position.legal_moves() {
        if checkers.contains(&mv.from) || !position.gives_check(mv) {
            continue;
        }

        let captured = captured_piece(position.board(), mv).map_or(0, piece_cost);
        let landing = landing_square(position.board(), mv);

        position.push(mv);
        let lost = resolve_exchange(position, landing, rng);
        position.pop();

        if lost <= captured {
            let _ = checkers.try_push(mv.from);
        }
    }

    checkers
        .iter()
        .map(|&sq| match position.piece_on(sq) {
            Some(Piece::Queen) => config.queen_check_bonus,
            _ => config.piece_check_bonus,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Board;
    use rand::{rngs::StdRng, SeedableRng};

    fn danger(fen: &str) -> i16 {
        let mut position = Position::new(fen.parse::<Board>().unwrap());
        let before = position.board().clone();
        let mut rng = StdRng::seed_from_u64(3);

        let score = evaluate(&mut position, &mut rng, &HCEConfig::default());
        assert_eq!(position.board(), &before);
        score
    }

    #[test]
    fn test_no_checks_no_danger() {
        assert_eq!(danger("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"), 0);
    }

    #[test]
    fn test_queen_safe_check() {
        // Qd7+ and Qd8+ hang the queen, the other checks are safe and share one origin
        assert_eq!(danger("4k3/8/8/8/8/8/8/3QK3 w - - 0 1"), 8);
    }

    #[test]
    fn test_knight_safe_check_counted_once() {
        // Nd6+ and Nf6+ both come from e4
        assert_eq!(danger("4k3/8/8/8/4N3/8/8/4K3 w - - 0 1"), 17);
    }

    #[test]
    fn test_unsafe_check_ignored() {
        // Nd6+ runs into the c7 pawn, Nf6+ into the g7 pawn
        assert_eq!(danger("4k3/2p3p1/8/8/4N3/8/8/4K3 w - - 0 1"), 0);
    }
}
