use super::board::GameBoard;
use super::counters::Counters;
use super::seat::Seat;
use crate::Utility;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// an immutable snapshot of everything the acting player can see: the
/// shared board, their own seat and their counter record. built once
/// per decision point and retained indefinitely as a learning-table key.
///
/// the 64-bit signature and the scalar value are computed exactly once,
/// in the constructor, from fully-initialized components; identity,
/// ordering and hashing all delegate to the signature, so the fast path
/// can never disagree with the structural one.
#[derive(Debug, Clone)]
pub struct State {
    board: GameBoard,
    seat: Seat,
    counters: Counters,
    signature: u64,
    value: Utility,
}

impl State {
    pub fn new(board: &GameBoard, seat: &Seat, counters: &Counters) -> Self {
        let signature = {
            let mut hasher = DefaultHasher::new();
            board.hash(&mut hasher);
            seat.hash(&mut hasher);
            counters.hash(&mut hasher);
            hasher.finish()
        };
        let value = Self::score(seat);
        Self {
            board: board.clone(),
            seat: seat.clone(),
            counters: *counters,
            signature,
            value,
        }
    }

    /// weighted scalar worth of a position: money dominates, pipeline
    /// inventory counts a little, headcount breaks ties
    fn score(seat: &Seat) -> Utility {
        let ledger = seat.ledger();
        let inventory = ledger.raw_data + ledger.marts + ledger.dashboards + ledger.insights;
        ledger.money as Utility * crate::WEIGHT_MONEY
            + inventory as Utility * crate::WEIGHT_RESOURCE
            + seat.headcount() as Utility
    }

    pub fn value(&self) -> Utility {
        self.value
    }
    pub fn signature(&self) -> u64 {
        self.signature
    }
    pub fn seat(&self) -> &Seat {
        &self.seat
    }
    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn project(&self) -> serde_json::Value {
        serde_json::json!({
            "board": self.board.project(),
            "seat": self.seat.project(),
            "counters": self.counters.project(),
            "state_value": self.value,
        })
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.signature == other.signature
    }
}
impl Eq for State {}
impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.signature.hash(state);
    }
}
impl Ord for State {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.signature.cmp(&other.signature)
    }
}
impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Role};
    use crate::gameplay::settings::Settings;
    use std::collections::BTreeMap;

    fn snapshot(seed: u64) -> State {
        let settings = Settings::default();
        let mut board = GameBoard::new(&settings, seed).unwrap();
        board.setup().unwrap();
        State::new(&board, &Seat::new(&settings), &Counters::default())
    }

    #[test]
    fn identical_inputs_are_interchangeable_keys() {
        let a = snapshot(5);
        let b = snapshot(5);
        assert_eq!(a, b);
        assert_eq!(a.signature(), b.signature());
        let mut table = BTreeMap::new();
        table.insert(a, 1.0f32);
        assert_eq!(table.get(&b), Some(&1.0));
    }

    #[test]
    fn structural_change_changes_identity() {
        let settings = Settings::default();
        let mut board = GameBoard::new(&settings, 5).unwrap();
        board.setup().unwrap();
        let counters = Counters::default();
        let mut seat = Seat::new(&settings);
        let before = State::new(&board, &seat, &counters);
        seat.hire(Card::new(Role::DataEngineer, 1, 1), Role::DataEngineer);
        let after = State::new(&board, &seat, &counters);
        assert_ne!(before, after);
        assert_ne!(before.signature(), after.signature());
    }

    #[test]
    fn score_weighs_money_first() {
        let state = snapshot(9);
        // 10 money, 10 inventory, 0 staff
        assert_eq!(state.value(), 10.0 * 100.0 + 10.0 * 5.0);
    }
}
