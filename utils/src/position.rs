use ahash::AHashMap;
use cozy_chess::{Board, Color, Move, Piece, Square};

use crate::material::has_insufficient_material;
use crate::moves::{
    collect_legal_moves, gives_check, has_check, has_legal_moves, is_capture, make_move,
};

/// Occurrences of a position that allow a draw claim / end the game outright.
const CLAIMABLE_REPETITIONS: usize = 3;
const AUTOMATIC_REPETITIONS: usize = 5;

/// Halfmove clock values for the fifty- and seventy-five-move rules.
const CLAIMABLE_HALFMOVES: u8 = 100;
const AUTOMATIC_HALFMOVES: u8 = 150;

/// The board being searched plus the line of moves played on top of it.
///
/// Searches share a single `Position` and walk the tree with [`Position::push`] and
/// [`Position::pop`]. Every push must be matched by a pop before the caller returns.
#[derive(Clone, Debug)]
pub struct Position {
    /// The current board.
    board: Board,
    /// Boards replaced by each push, most recent last.
    undo: Vec<Board>,
    /// Occurrences of each position reached before the root, keyed by hash.
    game_history: AHashMap<u64, usize>,
}

impl Position {
    pub fn new(board: Board) -> Self {
        Self::with_history(board, AHashMap::new())
    }

    pub fn with_history(board: Board, game_history: AHashMap<u64, usize>) -> Self {
        Self {
            board,
            undo: Vec::with_capacity(64),
            game_history,
        }
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves currently pushed on top of the root.
    #[inline(always)]
    pub fn ply(&self) -> usize {
        self.undo.len()
    }

    /// Plays a legal move.
    #[inline(always)]
    pub fn push(&mut self, mv: Move) {
        let mut next = self.board.clone();
        next.play_unchecked(mv);
        self.undo.push(std::mem::replace(&mut self.board, next));
    }

    /// Passes the turn. Returns false and leaves the position untouched when the
    /// side to move is in check, since no null move is legal then.
    #[inline(always)]
    pub fn push_null(&mut self) -> bool {
        match self.board.null_move() {
            Some(next) => {
                self.undo.push(std::mem::replace(&mut self.board, next));
                true
            }
            None => false,
        }
    }

    /// Undoes the last push.
    #[inline(always)]
    pub fn pop(&mut self) {
        self.board = self.undo.pop().expect("pop without a matching push");
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline(always)]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.board.piece_on(square)
    }

    #[inline(always)]
    pub fn legal_moves(&self) -> Vec<Move> {
        collect_legal_moves(&self.board)
    }

    #[inline(always)]
    pub fn in_check(&self) -> bool {
        has_check(&self.board)
    }

    #[inline(always)]
    pub fn gives_check(&self, mv: Move) -> bool {
        gives_check(&self.board, mv)
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !has_legal_moves(&self.board)
    }

    /// Mate, stalemate, dead material, the 75-move rule or fivefold repetition.
    /// With `claim_draw` a draw the side to move could claim ends the game too (see [`Position::can_claim_draw`]).
    pub fn is_game_over(&self, claim_draw: bool) -> bool {
        if !has_legal_moves(&self.board) || has_insufficient_material(&self.board) {
            return true;
        }

        if self.board.halfmove_clock() >= AUTOMATIC_HALFMOVES
            || self.repetitions() >= AUTOMATIC_REPETITIONS
        {
            return true;
        }

        claim_draw && self.can_claim_draw()
    }

    /// Fifty-move rule or threefold repetition, either standing now or reached by
    /// one of the side to move's own legal moves.
    pub fn can_claim_draw(&self) -> bool {
        self.can_claim_fifty_moves() || self.can_claim_threefold_repetition()
    }

    fn can_claim_fifty_moves(&self) -> bool {
        let halfmoves = self.board.halfmove_clock();
        if halfmoves >= CLAIMABLE_HALFMOVES {
            return true;
        }
        if halfmoves + 1 < CLAIMABLE_HALFMOVES {
            return false;
        }

        // A quiet non-pawn move brings the clock to the limit, provided the game goes on
        self.legal_moves().into_iter().any(|mv| {
            self.board.piece_on(mv.from) != Some(Piece::Pawn)
                && !is_capture(&self.board, mv)
                && has_legal_moves(&make_move(&self.board, mv))
        })
    }

    fn can_claim_threefold_repetition(&self) -> bool {
        if self.repetitions() >= CLAIMABLE_REPETITIONS {
            return true;
        }

        self.legal_moves().into_iter().any(|mv| {
            let hash = make_move(&self.board, mv).hash();
            self.occurrences(hash) + 1 >= CLAIMABLE_REPETITIONS
        })
    }

    /// How many times the current position has occurred, this occurrence included.
    pub fn repetitions(&self) -> usize {
        self.occurrences(self.board.hash())
    }

    /// Occurrences of `hash` before the root, along the searched line and on the board now.
    fn occurrences(&self, hash: u64) -> usize {
        let before_root = self.game_history.get(&hash).copied().unwrap_or(0);
        let in_line = self.undo.iter().filter(|b| b.hash() == hash).count();
        before_root + in_line + usize::from(self.board.hash() == hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(position: &Position, uci: &str) -> Move {
        position
            .legal_moves()
            .into_iter()
            .find(|mv| mv.to_string() == uci)
            .unwrap()
    }

    #[test]
    fn test_push_pop_restores_board() {
        let mut position = Position::new(Board::default());
        let start = position.board().clone();

        position.push(find(&position, "e2e4"));
        position.push(find(&position, "e7e5"));
        assert_eq!(position.ply(), 2);

        position.pop();
        position.pop();
        assert_eq!(position.ply(), 0);
        assert_eq!(position.board(), &start);
    }

    #[test]
    #[should_panic(expected = "pop without a matching push")]
    fn test_pop_past_root_panics() {
        let mut position = Position::new(Board::default());
        position.pop();
    }

    #[test]
    fn test_null_move_refused_in_check() {
        let board: Board = "4k3/8/8/8/8/8/8/R3K2r w - - 0 1".parse().unwrap();
        let mut position = Position::new(board);
        assert!(position.in_check());
        assert!(!position.push_null());
        assert_eq!(position.ply(), 0);

        let mut position = Position::new(Board::default());
        assert!(position.push_null());
        assert_eq!(position.side_to_move(), Color::Black);
        position.pop();
        assert_eq!(position.side_to_move(), Color::White);
    }

    #[test]
    fn test_checkmate_and_stalemate() {
        let mate: Board = "R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1".parse().unwrap();
        let position = Position::new(mate);
        assert!(position.is_checkmate());
        assert!(position.is_game_over(false));

        let stalemate: Board = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
        let position = Position::new(stalemate);
        assert!(!position.is_checkmate());
        assert!(position.is_game_over(false));
    }

    #[test]
    fn test_threefold_repetition_needs_claim() {
        let mut position = Position::new(Board::default());
        for _ in 0..2 {
            for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                let mv = find(&position, uci);
                position.push(mv);
            }
        }

        assert_eq!(position.repetitions(), 3);
        assert!(position.is_game_over(true));
        assert!(!position.is_game_over(false));
    }

    #[test]
    fn test_fifty_move_rule_needs_claim() {
        let board: Board = "4k3/8/8/8/8/8/4P3/4K2R w - - 100 80".parse().unwrap();
        let position = Position::new(board);
        assert!(position.is_game_over(true));
        assert!(!position.is_game_over(false));
    }

    #[test]
    fn test_threefold_claimable_one_move_ahead() {
        let mut position = Position::new(Board::default());
        for uci in ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1"] {
            let mv = find(&position, uci);
            position.push(mv);
        }

        // ...Ng8 would bring the start position up a third time
        assert_eq!(position.repetitions(), 2);
        assert!(position.can_claim_draw());
        assert!(position.is_game_over(true));
        assert!(!position.is_game_over(false));

        position.pop();
        assert!(!position.can_claim_draw());
    }

    #[test]
    fn test_fifty_move_claimable_one_move_ahead() {
        let board: Board = "4k3/8/8/8/8/8/4P3/4K2R w - - 99 80".parse().unwrap();
        let position = Position::new(board);
        assert!(position.can_claim_draw());
        assert!(position.is_game_over(true));
        assert!(!position.is_game_over(false));

        let board: Board = "4k3/8/8/8/8/8/4P3/4K2R w - - 98 80".parse().unwrap();
        assert!(!Position::new(board).is_game_over(true));
    }

    #[test]
    fn test_game_history_counts_towards_repetition() {
        let board = Board::default();
        let history: AHashMap<u64, usize> =
            [(board.hash(), 2), (0xDEAD_BEEF, 1)].into_iter().collect();
        let position = Position::with_history(board, history);
        assert_eq!(position.repetitions(), 3);
        assert!(position.is_game_over(true));
    }
}
