use cozy_chess::{BitBoard, Board, Color, Piece};

const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;

/// True when `color` can never deliver mate, whatever the opponent does.
///
/// A lone knight only fails to mate when the opponent has nothing but queens to block
/// with, and bishops only when they all run on one square colour and no pawns or
/// knights are on the board.
pub fn side_has_insufficient_material(board: &Board, color: Color) -> bool {
    let own = board.colors(color);
    let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
    if !(heavy & own).is_empty() {
        return false;
    }

    let knights = board.pieces(Piece::Knight);
    if !(knights & own).is_empty() {
        let blockers = board.colors(!color) & !board.pieces(Piece::King) & !board.pieces(Piece::Queen);
        return own.len() <= 2 && blockers.is_empty();
    }

    let bishops = board.pieces(Piece::Bishop);
    if !(bishops & own).is_empty() {
        let light = BitBoard(LIGHT_SQUARES_MASK);
        let same_colour = (bishops & light).is_empty() || (bishops & !light).is_empty();
        return same_colour && board.pieces(Piece::Pawn).is_empty() && knights.is_empty();
    }

    true
}

/// Dead draws: neither side can mate. Covers K vs K, K+N vs K, and any number of
/// bishops confined to one square colour.
pub fn has_insufficient_material(board: &Board) -> bool {
    side_has_insufficient_material(board, Color::White)
        && side_has_insufficient_material(board, Color::Black)
}
