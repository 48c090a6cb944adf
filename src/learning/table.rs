use crate::Utility;
use crate::gameplay::Action;
use crate::gameplay::State;
use std::collections::BTreeMap;

/// learned estimates for one state's actions
pub type Row = BTreeMap<Action, Utility>;
/// an agent's full mapping from state to per-action estimates
pub type Table = BTreeMap<State, Row>;

/// sum `from` into `into`, entry by entry. commutative and associative,
/// so merging any number of agents' tables is order-independent.
pub fn absorb(into: &mut Table, from: &Table) {
    for (state, row) in from {
        let merged = into.entry(state.clone()).or_default();
        for (action, value) in row {
            *merged.entry(action.clone()).or_insert(0.0) += value;
        }
    }
}

/// keep the maximum of `from` and `into`, entry by entry. used for
/// best-observed-terminal-value records.
pub fn prefer(into: &mut Table, from: &Table) {
    for (state, row) in from {
        let merged = into.entry(state.clone()).or_default();
        for (action, value) in row {
            let entry = merged.entry(action.clone()).or_insert(*value);
            *entry = entry.max(*value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::{Counters, GameBoard, Seat, Settings};
    use crate::resources::Resource;

    fn states() -> (State, State) {
        let settings = Settings::default();
        let mut board = GameBoard::new(&settings, 3).unwrap();
        board.setup().unwrap();
        let counters = Counters::default();
        let mut seat = Seat::new(&settings);
        let a = State::new(&board, &seat, &counters);
        seat.generate(Resource::RawData);
        let b = State::new(&board, &seat, &counters);
        (a, b)
    }

    fn tables() -> (Table, Table) {
        let (s1, s2) = states();
        let generate = Action::Generate {
            resource: Resource::RawData,
        };
        let mut a = Table::new();
        a.entry(s1.clone())
            .or_default()
            .insert(Action::Empty, 1.0);
        a.entry(s2.clone()).or_default().insert(generate.clone(), 4.0);
        let mut b = Table::new();
        b.entry(s1).or_default().insert(Action::Empty, 2.0);
        b.entry(s2).or_default().insert(Action::Empty, 8.0);
        (a, b)
    }

    #[test]
    fn absorb_is_commutative() {
        let (a, b) = tables();
        let mut ab = Table::new();
        absorb(&mut ab, &a);
        absorb(&mut ab, &b);
        let mut ba = Table::new();
        absorb(&mut ba, &b);
        absorb(&mut ba, &a);
        assert_eq!(ab, ba);
    }

    #[test]
    fn absorb_sums_shared_entries() {
        let (a, b) = tables();
        let (s1, _) = states();
        let mut merged = Table::new();
        absorb(&mut merged, &a);
        absorb(&mut merged, &b);
        assert_eq!(merged[&s1][&Action::Empty], 3.0);
    }

    #[test]
    fn prefer_keeps_the_maximum() {
        let (a, b) = tables();
        let (s1, _) = states();
        let mut forward = Table::new();
        prefer(&mut forward, &a);
        prefer(&mut forward, &b);
        let mut backward = Table::new();
        prefer(&mut backward, &b);
        prefer(&mut backward, &a);
        assert_eq!(forward, backward);
        assert_eq!(forward[&s1][&Action::Empty], 2.0);
    }
}
