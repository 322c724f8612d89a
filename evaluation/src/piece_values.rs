use cozy_chess::Piece;

use crate::scores::KING_COST;

pub const PAWN_COST: i16 = 100;
pub const KNIGHT_COST: i16 = 300;
pub const BISHOP_COST: i16 = 300;
pub const ROOK_COST: i16 = 500;
pub const QUEEN_COST: i16 = 900;

/// Material value of a piece. The king's value only matters when pricing captures;
/// it is never counted as material on the board.
#[inline(always)]
pub const fn piece_cost(piece: Piece) -> i16 {
    match piece {
        Piece::Pawn => PAWN_COST,
        Piece::Knight => KNIGHT_COST,
        Piece::Bishop => BISHOP_COST,
        Piece::Rook => ROOK_COST,
        Piece::Queen => QUEEN_COST,
        Piece::King => KING_COST,
    }
}
