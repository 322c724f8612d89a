pub mod best_first;
mod config;
mod def;
pub mod greedy;
pub mod negamax;
mod state;

pub use best_first::BestFirstEngine;
pub use config::{ConfigParam, EngineConfig, Strategy};
pub use def::{Engine, SearchResult};
pub use greedy::GreedyEngine;
pub use negamax::NegamaxEngine;

/// Builds the engine selected by `config.strategy`.
pub fn create_engine(config: &EngineConfig) -> Box<dyn Engine + Send> {
    match config.strategy.value {
        Strategy::BestFirst => Box::new(BestFirstEngine::new(config)),
        Strategy::Negamax => Box::new(NegamaxEngine::new(config)),
        Strategy::Greedy => Box::new(GreedyEngine::new(config)),
    }
}
