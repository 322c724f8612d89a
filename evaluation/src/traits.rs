// The evaluator interface the search crates depend on.
//
// The concrete hand-crafted evaluator lives in the `hce` crate, so `search`
// only needs this trait and the shared scoring helpers.

use rand::RngCore;
use utils::Position;

/// Hand-Crafted Evaluation interface.
pub trait HCE: Send {
    fn name(&self) -> String;

    /// Scores the position for the side to move. Positive = side to move is better.
    ///
    /// May push and pop moves while probing captures but leaves `position` as it found it.
    /// `rng` breaks ties between equally cheap recapturing pieces.
    fn evaluate(
        &mut self,
        position: &mut Position,
        rng: &mut dyn RngCore,
        check_danger: bool,
    ) -> i16;
}
