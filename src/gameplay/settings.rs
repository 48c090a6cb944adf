use serde::Serialize;

/// the externally supplied game constants, consumed read-only by board
/// and engine construction. defaults come from the crate-level knobs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Settings {
    pub open_cards: usize,
    pub money_per_insight: f32,
    pub money_to_win: u32,
    pub round_limit: usize,
    pub roster_cap: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            open_cards: crate::MAX_OPEN_CARDS,
            money_per_insight: crate::MONEY_PER_INSIGHT,
            money_to_win: crate::MONEY_TO_WIN,
            round_limit: crate::ROUND_LIMIT,
            roster_cap: crate::ROSTER_CAP,
        }
    }
}

impl Settings {
    pub fn project(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}
