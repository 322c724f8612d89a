use super::{eval_checks, HCEConfig};
use evaluation::{enumerate_threats, max_threat_cost};
use log::trace;
use rand::{seq::SliceRandom, RngCore};
use utils::Position;

/// Threat and check-danger terms, relative to the side to move.
///
/// The opponent's threats are found by handing them the move: a null move, or when
/// in check (where passing is illegal) a random legal reply as a stand-in.
pub(super) fn evaluate(
    position: &mut Position,
    rng: &mut dyn RngCore,
    check_danger: bool,
    config: &HCEConfig,
) -> i16 {
    let mut score = 0i16;

    let own_threats = enumerate_threats(position, rng);
    if check_danger {
        let danger = eval_checks::evaluate(position, rng, config);
        trace!("my check score = {}", danger);
        score += danger;
    }

    pass_turn(position, rng);
    let opponent_threats = enumerate_threats(position, rng);
    if check_danger {
        let danger = eval_checks::evaluate(position, rng, config);
        trace!("op check score = {}", danger);
        score -= danger;
    }
    position.pop();

    if let Some(cost) = max_threat_cost(&own_threats) {
        let bonus = percent_of(cost, config.own_threat_percent);
        trace!("my threats score = {}", bonus);
        score += bonus;
    }
    if let Some(cost) = max_threat_cost(&opponent_threats) {
        let penalty = percent_of(cost, config.opponent_threat_percent);
        trace!("op threats score = {}", penalty);
        score -= penalty;
    }

    score
}

fn pass_turn(position: &mut Position, rng: &mut dyn RngCore) {
    if position.push_null() {
        return;
    }

    let moves = position.legal_moves();
    let stand_in = *moves
        .choose(rng)
        .expect("live position in check has no legal moves");
    position.push(stand_in);
}

/// Truncates toward zero.
#[inline(always)]
fn percent_of(cost: i16, percent: i16) -> i16 {
    (cost as i32 * percent as i32 / 100) as i16
}
