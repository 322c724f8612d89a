//! Capture-exchange resolution.
//!
//! Unlike a classic swap-off evaluator, recaptures are played on the real board
//! through [`Position::push`]/[`Position::pop`], so pins and checks are respected.
//! When several pieces of the cheapest kind can recapture, one is picked at random;
//! this is a deliberate source of variance between otherwise identical searches.

use std::fmt;

use arrayvec::ArrayVec;
use cozy_chess::{Move, Square};
use rand::{seq::SliceRandom, Rng};
use utils::Position;

use crate::piece_values::piece_cost;

/// Upper bound on the legal moves that can land on one square.
const MAX_RECAPTURES: usize = 32;

/// A capture available to the side to move that still wins material
/// after the opponent's best sequence of recaptures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threat {
    pub from: Square,
    pub to: Square,
    /// Net material won, always positive.
    pub cost: i16,
}

impl Threat {
    #[inline(always)]
    pub fn matches(&self, mv: Move) -> bool {
        self.from == mv.from && self.to == mv.to
    }
}

impl fmt::Display for Threat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Threat({}->{}, {})", self.from, self.to, self.cost)
    }
}

/// Material the side to move wins by capturing on `square` with its cheapest piece,
/// assuming both sides keep recapturing with their cheapest piece and either side may
/// stop once continuing would lose material. Never negative.
pub fn resolve_exchange<R>(position: &mut Position, square: Square, rng: &mut R) -> i16
where
    R: Rng + ?Sized,
{
    let board = position.board();
    if !board.colors(!board.side_to_move()).has(square) {
        return 0;
    }
    let captured = position.piece_on(square).map_or(0, piece_cost);

    let mut cheapest = ArrayVec::<Move, MAX_RECAPTURES>::new();
    let mut cheapest_cost = i16::MAX;
    board.generate_moves(|moves| {
        let cost = piece_cost(moves.piece);
        let mut onto = moves;
        onto.to &= square.bitboard();

        for mv in onto {
            if cost < cheapest_cost {
                cheapest.clear();
                cheapest_cost = cost;
            }
            if cost == cheapest_cost {
                let _ = cheapest.try_push(mv);
            }
        }
        false
    });

    let Some(&mv) = cheapest.choose(rng) else {
        return 0;
    };

    position.push(mv);
    let balance = captured - resolve_exchange(position, square, rng);
    position.pop();

    balance.max(0)
}

/// Every capture of the side to move that nets material after recaptures.
pub fn enumerate_threats<R>(position: &mut Position, rng: &mut R) -> Vec<Threat>
where
    R: Rng + ?Sized,
{
    let board = position.board();
    let enemies = board.colors(!board.side_to_move());

    let mut captures = Vec::new();
    board.generate_moves(|moves| {
        let mut onto = moves;
        onto.to &= enemies;
        captures.extend(onto);
        false
    });

    let mut threats = Vec::new();
    for mv in captures {
        let captured = position.piece_on(mv.to).map_or(0, piece_cost);

        position.push(mv);
        let balance = captured - resolve_exchange(position, mv.to, rng);
        position.pop();

        if balance > 0 {
            threats.push(Threat {
                from: mv.from,
                to: mv.to,
                cost: balance,
            });
        }
    }

    threats
}

#[inline(always)]
pub fn max_threat_cost(threats: &[Threat]) -> Option<i16> {
    threats.iter().map(|t| t.cost).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Board;
    use rand::{rngs::StdRng, SeedableRng};

    fn position(fen: &str) -> Position {
        Position::new(fen.parse::<Board>().unwrap())
    }

    #[test]
    fn test_no_attackers_resolves_to_zero() {
        let mut rng = StdRng::seed_from_u64(1);

        let mut pos = Position::new(Board::default());
        assert_eq!(resolve_exchange(&mut pos, Square::E4, &mut rng), 0);

        let mut pos = position("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1");
        assert_eq!(resolve_exchange(&mut pos, Square::D5, &mut rng), 0);
    }

    #[test]
    fn test_own_piece_is_not_exchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pos = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        // The king can "capture" its rook by castling, which is not an exchange.
        assert_eq!(resolve_exchange(&mut pos, Square::H1, &mut rng), 0);
    }

    #[test]
    fn test_undefended_pawn_is_won() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pos = position("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(resolve_exchange(&mut pos, Square::D5, &mut rng), 100);
    }

    #[test]
    fn test_defended_pawn_trade_is_even() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pos = position("4k3/8/2p5/3p4/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(resolve_exchange(&mut pos, Square::D5, &mut rng), 0);
    }

    #[test]
    fn test_cheapest_attacker_starts_the_sequence() {
        // Nxd5 cxd5 Rxd5: rook for knight, then a pawn back.
        let mut rng = StdRng::seed_from_u64(1);
        let mut pos = position("4k3/8/2p5/3r4/8/4N3/8/3RK3 w - - 0 1");
        let before = pos.board().clone();

        assert_eq!(resolve_exchange(&mut pos, Square::D5, &mut rng), 300);
        assert_eq!(pos.board(), &before);
        assert_eq!(pos.ply(), 0);
    }

    #[test]
    fn test_random_ties_never_go_negative() {
        // Two knights can take; the choice between them is random.
        let fen = "4k3/8/2p5/3r4/8/2N1N3/8/4K3 w - - 0 1";
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pos = position(fen);
            let value = resolve_exchange(&mut pos, Square::D5, &mut rng);
            assert!(value >= 0);
            assert_eq!(value, 300);
        }
    }

    #[test]
    fn test_enumerate_threats_finds_free_queen() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pos = position("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
        let before = pos.board().clone();

        let threats = enumerate_threats(&mut pos, &mut rng);
        assert_eq!(
            threats,
            vec![Threat {
                from: Square::D2,
                to: Square::D5,
                cost: 900
            }]
        );
        assert_eq!(max_threat_cost(&threats), Some(900));
        assert_eq!(pos.board(), &before);
    }

    #[test]
    fn test_even_trades_are_not_threats() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pos = position("4k3/8/2p5/3p4/4P3/8/8/4K3 w - - 0 1");
        let threats = enumerate_threats(&mut pos, &mut rng);
        assert!(threats.is_empty());
        assert_eq!(max_threat_cost(&threats), None);
    }

    #[test]
    fn test_threat_display() {
        let threat = Threat {
            from: Square::E4,
            to: Square::D5,
            cost: 100,
        };
        assert_eq!(threat.to_string(), "Threat(e4->d5, 100)");
    }
}
