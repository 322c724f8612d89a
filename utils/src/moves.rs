use cozy_chess::{Board, File, Move, Piece, Square};

/// True when an enemy piece stands on the destination.
/// cozy-chess encodes castling as "king captures own rook", so castling is never a capture here,
/// and neither is en passant (the destination square is empty).
#[inline(always)]
pub fn is_capture(board: &Board, mv: Move) -> bool {
    board.colors(!board.side_to_move()).has(mv.to)
}

/// The piece taken by `mv`, if any.
#[inline(always)]
pub fn captured_piece(board: &Board, mv: Move) -> Option<Piece> {
    if is_capture(board, mv) {
        board.piece_on(mv.to)
    } else {
        None
    }
}

/// True for castling moves (king onto a square held by its own rook).
#[inline(always)]
pub fn is_castle(board: &Board, mv: Move) -> bool {
    board.piece_on(mv.from) == Some(Piece::King) && board.colors(board.side_to_move()).has(mv.to)
}

/// The square the moving piece ends up on. Same as `mv.to` except for castling,
/// where the king lands on the g- or c-file.
#[inline(always)]
pub fn landing_square(board: &Board, mv: Move) -> Square {
    if !is_castle(board, mv) {
        return mv.to;
    }

    let file = if mv.to.file() as usize > mv.from.file() as usize {
        File::G
    } else {
        File::C
    };
    Square::new(file, mv.from.rank())
}

#[inline(always)]
pub fn make_move(board: &Board, mv: Move) -> Board {
    let mut next = board.clone();
    next.play_unchecked(mv);
    next
}

#[inline(always)]
pub fn has_legal_moves(board: &Board) -> bool {
    board.generate_moves(|_| true)
}

/// All legal moves, in generation order.
#[inline(always)]
pub fn collect_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    board.generate_moves(|batch| {
        moves.extend(batch);
        false
    });
    moves
}

#[inline(always)]
pub fn has_check(board: &Board) -> bool {
    !board.checkers().is_empty()
}

#[inline(always)]
pub fn gives_check(board: &Board, mv: Move) -> bool {
    has_check(&make_move(board, mv))
}
