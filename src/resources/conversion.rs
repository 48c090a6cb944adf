use super::ledger::Ledger;
use serde::Serialize;

/// an atomic resource exchange: take one bundle, give another.
/// conversions compose additively so that the base rule and every
/// staff bonus can be summed into one net conversion before applying.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub take: Ledger,
    pub give: Ledger,
}

impl Conversion {
    /// a pure money cost, e.g. a per-turn salary
    pub const fn salary(amount: u32) -> Self {
        Self {
            take: Ledger {
                raw_data: 0,
                marts: 0,
                dashboards: 0,
                insights: 0,
                money: amount,
            },
            give: Ledger {
                raw_data: 0,
                marts: 0,
                dashboards: 0,
                insights: 0,
                money: 0,
            },
        }
    }
    /// the algebraic inverse: applying a conversion and then its
    /// inverse leaves a ledger unchanged
    pub const fn invert(&self) -> Self {
        Self {
            take: self.give,
            give: self.take,
        }
    }
    pub fn project(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

impl std::ops::Add for Conversion {
    type Output = Self;
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}
impl std::ops::AddAssign for Conversion {
    fn add_assign(&mut self, other: Self) {
        self.take += other.take;
        self.give += other.give;
    }
}

/// total order over component tuples. Ledger itself only carries the
/// product partial order, so the key is built here explicitly. needed
/// so Cards (and through them Actions) can live in BTreeMaps.
impl Ord for Conversion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.take.counts(), self.give.counts()).cmp(&(other.take.counts(), other.give.counts()))
    }
}
impl PartialOrd for Conversion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "take({}) give({})", self.take, self.give)
    }
}
