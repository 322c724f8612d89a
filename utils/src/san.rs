//! Standard algebraic notation, for logs and game records only.

use cozy_chess::{Board, Move, Piece};

use crate::moves::{collect_legal_moves, has_legal_moves, is_capture, is_castle, make_move};

fn piece_letter(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'P',
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
    }
}

/// Renders a legal move as SAN, e.g. `Nbd7`, `exd6`, `O-O`, `e8=Q#`.
pub fn move_to_san(board: &Board, mv: Move) -> String {
    let Some(piece) = board.piece_on(mv.from) else {
        return mv.to_string();
    };

    let mut san = String::with_capacity(8);

    if is_castle(board, mv) {
        if mv.to.file() as usize > mv.from.file() as usize {
            san.push_str("O-O");
        } else {
            san.push_str("O-O-O");
        }
    } else if piece == Piece::Pawn {
        // Pawns change file only when capturing (en passant included).
        if mv.from.file() != mv.to.file() {
            san.push_str(&mv.from.file().to_string());
            san.push('x');
        }
        san.push_str(&mv.to.to_string());
        if let Some(promotion) = mv.promotion {
            san.push('=');
            san.push(piece_letter(promotion));
        }
    } else {
        san.push(piece_letter(piece));
        san.push_str(&disambiguation(board, mv, piece));
        if is_capture(board, mv) {
            san.push('x');
        }
        san.push_str(&mv.to.to_string());
    }

    let after = make_move(board, mv);
    if !after.checkers().is_empty() {
        san.push(if has_legal_moves(&after) { '+' } else { '#' });
    }

    san
}

/// Origin file and/or rank needed when another piece of the same kind can reach the target.
fn disambiguation(board: &Board, mv: Move, piece: Piece) -> String {
    let rivals: Vec<Move> = collect_legal_moves(board)
        .into_iter()
        .filter(|m| m.to == mv.to && m.from != mv.from && board.piece_on(m.from) == Some(piece))
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let file = mv.from.file();
    let rank = mv.from.rank();
    if rivals.iter().all(|m| m.from.file() != file) {
        file.to_string()
    } else if rivals.iter().all(|m| m.from.rank() != rank) {
        rank.to_string()
    } else {
        mv.from.to_string()
    }
}
