use super::commands::UciOutput;

pub struct Encoder {}

impl Encoder {
    pub fn encode(&self, response: &UciOutput) -> String {
        match response {
            UciOutput::IdName(name) => format!("id name {}", name),
            UciOutput::IdAuthor(author) => format!("id author {}", author),

            UciOutput::UciOk => "uciok".to_string(),
            UciOutput::ReadyOk => "readyok".to_string(),

            UciOutput::BestMove(best_move) => format!("bestmove {}", best_move),
            UciOutput::Info(info) => {
                let mut line = format!(
                    "info depth {} nodes {} time {} score cp {}",
                    info.depth, info.nodes, info.time, info.score,
                );
                if !info.pv.is_empty() {
                    line.push_str(" pv ");
                    line.push_str(&info.pv.join(" "));
                }
                line
            }
            UciOutput::Option(option_str) => option_str.clone(),
        }
    }
}
