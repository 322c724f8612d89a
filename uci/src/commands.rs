use ahash::AHashMap;
use cozy_chess::Board;

#[derive(Debug)]
pub enum UciInput {
    Uci,
    IsReady,

    UciNewGame,
    Position {
        board: Board,
        /// Occurrences of each position played before `board`, keyed by hash.
        game_history: AHashMap<u64, usize>,
    },
    Go(GoParams),

    Stop,
    Quit,
    SetOption {
        name: String,
        value: String,
    },
    Unknown(String),
}

#[derive(Debug)]
pub enum UciOutput {
    IdName(String),
    IdAuthor(String),
    UciOk,
    ReadyOk,
    BestMove(String),
    Info(Info),
    Option(String),
}

#[derive(Debug, Default)]
pub struct Info {
    pub depth: u8,
    pub nodes: u64,
    pub time: u64,
    pub score: i16, // centipawns, side to move
    pub pv: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GoParams {
    // Search depth in plies, for the depth-bounded strategies.
    pub depth: Option<u8>,

    // Tree size budget, for the best-first strategy.
    pub nodes: Option<u64>,
}
