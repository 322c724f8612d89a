mod connection;
mod decoder;
mod encoder;
mod options;
mod utils;

pub mod commands;

pub use commands::{GoParams, UciInput, UciOutput};
pub use connection::UciConnection;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use options::{UciOption, UciOptionType};
pub use utils::move_to_uci;

/// Sent as the best move when the position has no legal moves.
pub const NULL_MOVE: &str = "0000";
