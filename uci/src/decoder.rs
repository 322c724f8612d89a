use std::str::FromStr;

use ahash::AHashMap;
use cozy_chess::{util::parse_uci_move, Board};
use log::debug;

use super::commands::{GoParams, UciInput};

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> UciInput {
        match input {
            "uci" => UciInput::Uci,
            "isready" => UciInput::IsReady,
            "ucinewgame" => UciInput::UciNewGame,

            _ if input.starts_with("position") => self.decode_position(input),
            _ if input.starts_with("go") => self.decode_go(input),
            _ if input.starts_with("setoption") => self.decode_setoption(input),
            _ if input.starts_with("stop") => UciInput::Stop,
            _ if input.starts_with("quit") => UciInput::Quit,

            _ => UciInput::Unknown(input.to_string()),
        }
    }

    fn decode_position(&self, input: &str) -> UciInput {
        let (setup, moves) = match input.split_once("moves") {
            Some((setup, moves)) => (setup, moves),
            None => (input, ""),
        };

        let mut board = match setup.split_once("fen") {
            Some((_, fen)) => match Board::from_str(fen.trim()) {
                Ok(board) => board,
                Err(e) => {
                    debug!("Bad FEN {:?}: {:?}", fen.trim(), e);
                    return UciInput::Unknown(input.to_string());
                }
            },
            None if setup.contains("startpos") => Board::default(),
            None => return UciInput::Unknown(input.to_string()),
        };

        // Every position before the final one, for repetition detection
        let mut game_history = AHashMap::new();

        for mv_str in moves.split_whitespace() {
            let Ok(mv) = parse_uci_move(&board, mv_str) else {
                debug!("Bad move {:?} in position command", mv_str);
                return UciInput::Unknown(input.to_string());
            };
            *game_history.entry(board.hash()).or_insert(0) += 1;
            if board.try_play(mv).is_err() {
                debug!("Illegal move {:?} in position command", mv_str);
                return UciInput::Unknown(input.to_string());
            }
        }

        UciInput::Position {
            board,
            game_history,
        }
    }

    fn decode_setoption(&self, input: &str) -> UciInput {
        // Parse: setoption name <name> [value <value>]
        let Some(rest) = input.strip_prefix("setoption name ") else {
            return UciInput::Unknown(input.to_string());
        };

        let (name, value) = match rest.split_once(" value ") {
            Some((n, v)) => (n.trim(), v.trim()),
            None => (rest.trim(), ""),
        };

        UciInput::SetOption {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn decode_go(&self, input: &str) -> UciInput {
        UciInput::Go(GoParams {
            depth: extract_numeric_param(input, "depth")
                .map(|d| d.min(u8::MAX as u64) as u8),
            nodes: extract_numeric_param(input, "nodes"),
        })
    }
}

fn extract_numeric_param(input: &str, param: &str) -> Option<u64> {
    input
        .split_whitespace()
        .collect::<Vec<&str>>()
        .windows(2)
        .find(|w| w[0] == param)
        .and_then(|w| w[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert!(matches!(Decoder.decode("uci"), UciInput::Uci));
        assert!(matches!(Decoder.decode("isready"), UciInput::IsReady));
        assert!(matches!(Decoder.decode("ucinewgame"), UciInput::UciNewGame));
        assert!(matches!(Decoder.decode("stop"), UciInput::Stop));
        assert!(matches!(Decoder.decode("quit"), UciInput::Quit));
    }

    #[test]
    fn test_setoption_with_value() {
        let UciInput::SetOption { name, value } =
            Decoder.decode("setoption name Strategy value Negamax")
        else {
            panic!("Expected SetOption")
        };
        assert_eq!(name, "Strategy");
        assert_eq!(value, "Negamax");
    }

    #[test]
    fn test_setoption_without_value() {
        let UciInput::SetOption { name, value } = Decoder.decode("setoption name Check Danger")
        else {
            panic!("Expected SetOption")
        };
        assert_eq!(name, "Check Danger");
        assert_eq!(value, "");
    }

    #[test]
    fn test_setoption_malformed() {
        assert!(matches!(
            Decoder.decode("setoption value 123"),
            UciInput::Unknown(_)
        ));
    }

    #[test]
    fn test_go_limits() {
        let UciInput::Go(params) = Decoder.decode("go depth 4 nodes 3000") else {
            panic!("Expected Go")
        };
        assert_eq!(params.depth, Some(4));
        assert_eq!(params.nodes, Some(3000));

        let UciInput::Go(params) = Decoder.decode("go") else {
            panic!("Expected Go")
        };
        assert_eq!(params, GoParams::default());
    }

    #[test]
    fn test_go_ignores_clock_parameters() {
        let UciInput::Go(params) = Decoder.decode("go wtime 60000 btime 60000 depth 3") else {
            panic!("Expected Go")
        };
        assert_eq!(params.depth, Some(3));
        assert_eq!(params.nodes, None);
    }

    #[test]
    fn test_position_startpos() {
        let UciInput::Position {
            board,
            game_history,
        } = Decoder.decode("position startpos")
        else {
            panic!("Expected Position")
        };
        assert_eq!(board, Board::default());
        assert!(game_history.is_empty());
    }

    #[test]
    fn test_position_startpos_with_moves() {
        let UciInput::Position {
            board,
            game_history,
        } = Decoder.decode("position startpos moves e2e4 e7e5")
        else {
            panic!("Expected Position")
        };
        assert_ne!(board, Board::default());
        assert_eq!(game_history.len(), 2);
        assert_eq!(game_history.get(&Board::default().hash()), Some(&1));
    }

    #[test]
    fn test_position_counts_repeated_positions() {
        let UciInput::Position { game_history, .. } =
            Decoder.decode("position startpos moves g1f3 g8f6 f3g1 f6g8 g1f3")
        else {
            panic!("Expected Position")
        };
        assert_eq!(game_history.get(&Board::default().hash()), Some(&2));
    }

    #[test]
    fn test_position_fen() {
        let fen = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
        let UciInput::Position {
            board,
            game_history,
        } = Decoder.decode(&format!("position fen {}", fen))
        else {
            panic!("Expected Position")
        };
        assert_eq!(board, Board::from_str(fen).unwrap());
        assert!(game_history.is_empty());
    }

    #[test]
    fn test_bad_position_is_unknown() {
        assert!(matches!(
            Decoder.decode("position fen not/a/fen w - - 0 1"),
            UciInput::Unknown(_)
        ));
        assert!(matches!(
            Decoder.decode("position startpos moves e2e5"),
            UciInput::Unknown(_)
        ));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            Decoder.decode("invalid command"),
            UciInput::Unknown(_)
        ));
    }
}
