pub mod exchange;
pub mod piece_values;
pub mod scores;
mod traits;

pub use exchange::{enumerate_threats, max_threat_cost, resolve_exchange, Threat};
pub use piece_values::piece_cost;
pub use traits::HCE;
