// Score constants and helpers shared by every search strategy.
// All scores are relative to the side to move.

use utils::Position;

use crate::piece_values::PAWN_COST;

/// A won (positive) or lost (negative) king. Scores stay within `[-KING_COST, KING_COST]`.
pub const KING_COST: i16 = 20_000;
/// Beyond this magnitude a score is treated as decisive.
pub const HALF_KING_COST: i16 = KING_COST / 2;
/// Scores this close are treated as equally good when picking between moves.
pub const SCORE_WINDOW: i16 = 10;

/// Score of a finished game: `-KING_COST` when the side to move is mated, otherwise a draw.
#[inline(always)]
pub fn terminal_score(position: &Position) -> i16 {
    if position.is_checkmate() {
        -KING_COST
    } else {
        0
    }
}

/// Pulls a decisive score one pawn toward zero, so a mate found further away
/// is worth less than a nearer one.
#[inline(always)]
pub fn clamp_decisive(score: i16) -> i16 {
    if score > HALF_KING_COST {
        score - PAWN_COST
    } else if score < -HALF_KING_COST {
        score + PAWN_COST
    } else {
        score
    }
}

#[inline(always)]
pub fn is_decisive(score: i16) -> bool {
    score.abs() > HALF_KING_COST
}
