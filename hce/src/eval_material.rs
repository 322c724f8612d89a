use cozy_chess::{Board, Color, Piece};
use evaluation::piece_cost;

const MATERIAL_PIECES: [Piece; 5] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
];

/// Material on the board for `color`. Kings are not counted.
pub(super) fn evaluate(board: &Board, color: Color) -> i16 {
    MATERIAL_PIECES
        .iter()
        .map(|&piece| piece_cost(piece) * board.colored_pieces(color, piece).len() as i16)
        .sum()
}
