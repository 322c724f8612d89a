use super::HCEConfig;
use cozy_chess::{BitBoard, Board, Color, File, Piece, Rank};

/// Files c through f.
const CENTER_FILES: BitBoard = BitBoard(0x3C3C_3C3C_3C3C_3C3C);

pub(super) fn evaluate(board: &Board, color: Color, config: &HCEConfig) -> i16 {
    let pawns = board.colored_pieces(color, Piece::Pawn);
    if pawns.is_empty() {
        return 0;
    }

    let mut score = 0i16;

    // Advancement, ranks relative to `color` so both sides mirror each other
    let bands = [
        Rank::Seventh.relative_to(color).bitboard(),
        Rank::Sixth.relative_to(color).bitboard(),
        Rank::Fifth.relative_to(color).bitboard(),
        Rank::Fourth.relative_to(color).bitboard() & CENTER_FILES,
        Rank::Third.relative_to(color).bitboard() & CENTER_FILES,
    ];
    for (band, bonus) in bands.iter().zip(config.pawn_advance_bonus) {
        score += bonus * (pawns & *band).len() as i16;
    }

    // Doubled pawns: one penalty per file, however many pawns are stacked on it
    for file in File::ALL {
        if (pawns & file.bitboard()).len() > 1 {
            score -= config.doubled_pawn_penalty;
        }
    }

    score
}
