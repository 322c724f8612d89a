use hce::HCEConfig;
use std::fmt;
use std::str::FromStr;
use uci::{UciOption, UciOptionType, UciOutput};

use crate::best_first::VISIT_PENALTY;
use evaluation::scores::SCORE_WINDOW;

fn uci(include: bool, name: &'static str, option_type: UciOptionType) -> Option<UciOption> {
    if include {
        Some(UciOption { name, option_type })
    } else {
        None
    }
}

/// Which search picks the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BestFirst,
    Negamax,
    Greedy,
}

impl Strategy {
    pub const NAMES: &'static [&'static str] = &["BestFirst", "Negamax", "Greedy"];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::BestFirst => "BestFirst",
            Strategy::Negamax => "Negamax",
            Strategy::Greedy => "Greedy",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bestfirst" | "best-first" => Ok(Strategy::BestFirst),
            "negamax" => Ok(Strategy::Negamax),
            "greedy" => Ok(Strategy::Greedy),
            _ => Err(format!("Unknown strategy: {}", s)),
        }
    }
}

macro_rules! define_config {
    ($(($field:ident: $type:ty, $uci_name:expr, $uci_type:expr, $default:expr, $include:expr)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct EngineConfig {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for EngineConfig {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        value: $default,
                        uci: uci($include, $uci_name, $uci_type),
                    },)*
                }
            }
        }

        impl EngineConfig {
            pub fn update_from_uci(&mut self, uci_name: &str, value: &str) -> Result<(), String> {
                match uci_name {
                    $($uci_name if $include => self.$field.update_from_uci(value),)*
                    _ => Err(format!("Unknown parameter: {}", uci_name)),
                }
            }

            pub fn to_uci(&self, output: &std::sync::mpsc::Sender<UciOutput>) -> Result<(), std::sync::mpsc::SendError<UciOutput>> {
                $(
                    if self.$field.uci.is_some() {
                        output.send(UciOutput::Option(self.$field.to_uci()))?;
                    }
                )*
                Ok(())
            }
        }
    };
}

define_config!(
    // Move selection
    (strategy: Strategy, "Strategy", UciOptionType::Combo { vars: Strategy::NAMES }, Strategy::BestFirst, true),
    (nodes: u64, "Nodes", UciOptionType::Spin { min: 1, max: 10_000_000 }, 3000, true), // Best-first tree size budget
    (depth: u8, "Depth", UciOptionType::Spin { min: 1, max: 32 }, 3, true), // Negamax depth before the quiescence tail
    (seed: u64, "Seed", UciOptionType::Spin { min: 0, max: i32::MAX }, 0, true), // Random tie-breaks and exchange choices
    (check_danger: bool, "Check Danger", UciOptionType::Check, true, true), // Greedy only

    // Search shape
    (visit_penalty: i16, "Visit Penalty", UciOptionType::Spin { min: 0, max: 500 }, VISIT_PENALTY, cfg!(feature = "tuning")), // Best-first cost per ln(subtree size)
    (score_window: i16, "Score Window", UciOptionType::Spin { min: 0, max: 200 }, SCORE_WINDOW, cfg!(feature = "tuning")), // Scores this close count as equal

    // HCE Evaluation Parameters

    // Pawn structure
    (hce_pawn_7th_bonus: i16, "HCE Pawn 7th Rank Bonus", UciOptionType::Spin { min: 0, max: 200 }, 70, cfg!(feature = "tuning")),
    (hce_pawn_6th_bonus: i16, "HCE Pawn 6th Rank Bonus", UciOptionType::Spin { min: 0, max: 200 }, 50, cfg!(feature = "tuning")),
    (hce_pawn_5th_bonus: i16, "HCE Pawn 5th Rank Bonus", UciOptionType::Spin { min: 0, max: 200 }, 30, cfg!(feature = "tuning")),
    (hce_pawn_4th_center_bonus: i16, "HCE Pawn 4th Rank Center Bonus", UciOptionType::Spin { min: 0, max: 100 }, 20, cfg!(feature = "tuning")),
    (hce_pawn_3rd_center_bonus: i16, "HCE Pawn 3rd Rank Center Bonus", UciOptionType::Spin { min: 0, max: 100 }, 10, cfg!(feature = "tuning")),
    (hce_doubled_pawn_penalty: i16, "HCE Doubled Pawn Penalty", UciOptionType::Spin { min: 0, max: 200 }, 50, cfg!(feature = "tuning")),

    // Development
    (hce_undeveloped_minor_penalty: i16, "HCE Undeveloped Minor Penalty", UciOptionType::Spin { min: 0, max: 100 }, 15, cfg!(feature = "tuning")),

    // Threats
    (hce_own_threat_percent: i16, "HCE Own Threat Percent", UciOptionType::Spin { min: 0, max: 100 }, 85, cfg!(feature = "tuning")),
    (hce_opponent_threat_percent: i16, "HCE Opponent Threat Percent", UciOptionType::Spin { min: 0, max: 100 }, 8, cfg!(feature = "tuning")),

    // Check danger
    (hce_queen_check_bonus: i16, "HCE Queen Check Bonus", UciOptionType::Spin { min: 0, max: 100 }, 8, cfg!(feature = "tuning")),
    (hce_piece_check_bonus: i16, "HCE Piece Check Bonus", UciOptionType::Spin { min: 0, max: 100 }, 17, cfg!(feature = "tuning")),
);

impl EngineConfig {
    pub fn get_hce_config(&self) -> HCEConfig {
        HCEConfig {
            // Pawn structure
            pawn_advance_bonus: [
                self.hce_pawn_7th_bonus.value,
                self.hce_pawn_6th_bonus.value,
                self.hce_pawn_5th_bonus.value,
                self.hce_pawn_4th_center_bonus.value,
                self.hce_pawn_3rd_center_bonus.value,
            ],
            doubled_pawn_penalty: self.hce_doubled_pawn_penalty.value,

            // Development
            undeveloped_minor_penalty: self.hce_undeveloped_minor_penalty.value,

            // Threats
            own_threat_percent: self.hce_own_threat_percent.value,
            opponent_threat_percent: self.hce_opponent_threat_percent.value,

            // Check danger
            queen_check_bonus: self.hce_queen_check_bonus.value,
            piece_check_bonus: self.hce_piece_check_bonus.value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigParam<T> {
    pub value: T,
    pub uci: Option<UciOption>,
}

impl<T> ConfigParam<T>
where
    T: FromStr + ToString + Clone,
    T::Err: std::fmt::Display,
{
    pub fn update_from_uci(&mut self, value: &str) -> Result<(), String> {
        if let Some(uci_meta) = &self.uci {
            uci_meta.option_type.validate(value)?;
        }

        let new_value = value
            .parse::<T>()
            .map_err(|e| format!("Parse error: {}", e))?;

        self.value = new_value;
        Ok(())
    }

    pub fn to_uci(&self) -> String {
        let uci_meta = self
            .uci
            .as_ref()
            .expect("UCI metadata required for UCI output");
        uci_meta.option_type.to_uci(uci_meta.name, &self.value)
    }
}
