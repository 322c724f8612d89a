use super::HCEConfig;
use cozy_chess::{Board, Color, Piece, Rank};

/// Penalises knights and bishops that have not left their back rank.
pub(super) fn evaluate(board: &Board, color: Color, config: &HCEConfig) -> i16 {
    let minors =
        board.colored_pieces(color, Piece::Knight) | board.colored_pieces(color, Piece::Bishop);
    let home = Rank::First.relative_to(color).bitboard();

    -config.undeveloped_minor_penalty * (minors & home).len() as i16
}
