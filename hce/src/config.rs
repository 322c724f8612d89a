#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HCEConfig {
    // Pawn structure
    /// Per pawn on its own 7th, 6th and 5th rank, then on its 4th and 3rd rank (files c-f only).
    pub pawn_advance_bonus: [i16; 5],
    pub doubled_pawn_penalty: i16, // once per file holding two or more pawns

    // Development
    pub undeveloped_minor_penalty: i16, // knight or bishop still on the back rank

    // Threats, as a percentage of the largest threat cost
    pub own_threat_percent: i16,
    pub opponent_threat_percent: i16,

    // Check danger, per piece able to give a safe check
    pub queen_check_bonus: i16,
    pub piece_check_bonus: i16,
}

impl Default for HCEConfig {
    fn default() -> Self {
        Self {
            pawn_advance_bonus: [70, 50, 30, 20, 10],
            doubled_pawn_penalty: 50,

            undeveloped_minor_penalty: 15,

            own_threat_percent: 85,
            opponent_threat_percent: 8,

            queen_check_bonus: 8,
            piece_check_bonus: 17,
        }
    }
}
