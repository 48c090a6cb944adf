use super::conversion::Conversion;
use super::resource::Resource;
use super::scale::Scale;
use serde::Serialize;

/// a seat's holding of the five resources. plain value semantics:
/// cheap to Copy, hashed over the full tuple, so two ledgers with
/// equal counters are interchangeable as map keys.
///
/// no operation here clamps below zero. overdraft is the caller's
/// responsibility to prevent via can_afford().
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize)]
pub struct Ledger {
    pub raw_data: u32,
    pub marts: u32,
    pub dashboards: u32,
    pub insights: u32,
    pub money: u32,
}

impl Ledger {
    /// the counters as a fixed tuple, in Resource::all() order.
    /// used wherever a total order or a hash over components is needed.
    pub const fn counts(&self) -> [u32; 5] {
        [
            self.raw_data,
            self.marts,
            self.dashboards,
            self.insights,
            self.money,
        ]
    }
    /// subtract the take side, then add the give side.
    /// call can_afford() first; a conversion applied to a ledger that
    /// cannot cover it is an engine bug upstream.
    pub fn apply(&mut self, conversion: &Conversion) {
        *self -= conversion.take;
        *self += conversion.give;
    }
    /// add floor(self[from] * factor) to self[into]
    pub fn scale(&mut self, rule: &Scale) {
        let gained = (self[rule.from] as f32 * rule.factor).floor() as u32;
        self[rule.into] += gained;
    }
    /// component-wise coverage of the conversion's take side
    pub fn can_afford(&self, conversion: &Conversion) -> bool {
        *self >= conversion.take
    }
    pub fn project(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

/// product partial order: comparable only when every component agrees.
/// two ledgers may be incomparable (partial_cmp returns None), which is
/// exactly what affordability checks want.
impl PartialOrd for Ledger {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        use std::cmp::Ordering::*;
        let a = self.counts();
        let b = other.counts();
        let le = a.iter().zip(b.iter()).all(|(x, y)| x <= y);
        let ge = a.iter().zip(b.iter()).all(|(x, y)| x >= y);
        match (le, ge) {
            (true, true) => Some(Equal),
            (true, false) => Some(Less),
            (false, true) => Some(Greater),
            (false, false) => None,
        }
    }
}

impl std::ops::Add for Ledger {
    type Output = Self;
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}
impl std::ops::Sub for Ledger {
    type Output = Self;
    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}
impl std::ops::AddAssign for Ledger {
    fn add_assign(&mut self, other: Self) {
        self.raw_data += other.raw_data;
        self.marts += other.marts;
        self.dashboards += other.dashboards;
        self.insights += other.insights;
        self.money += other.money;
    }
}
impl std::ops::SubAssign for Ledger {
    fn sub_assign(&mut self, other: Self) {
        self.raw_data -= other.raw_data;
        self.marts -= other.marts;
        self.dashboards -= other.dashboards;
        self.insights -= other.insights;
        self.money -= other.money;
    }
}

impl std::ops::Index<Resource> for Ledger {
    type Output = u32;
    fn index(&self, resource: Resource) -> &Self::Output {
        match resource {
            Resource::RawData => &self.raw_data,
            Resource::Mart => &self.marts,
            Resource::Dashboard => &self.dashboards,
            Resource::Insight => &self.insights,
            Resource::Money => &self.money,
        }
    }
}
impl std::ops::IndexMut<Resource> for Ledger {
    fn index_mut(&mut self, resource: Resource) -> &mut Self::Output {
        match resource {
            Resource::RawData => &mut self.raw_data,
            Resource::Mart => &mut self.marts,
            Resource::Dashboard => &mut self.dashboards,
            Resource::Insight => &mut self.insights,
            Resource::Money => &mut self.money,
        }
    }
}

impl std::fmt::Display for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "raw:{} mart:{} dash:{} ins:{} $:{}",
            self.raw_data, self.marts, self.dashboards, self.insights, self.money
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ledger {
        Ledger {
            raw_data: 10,
            marts: 5,
            dashboards: 3,
            insights: 8,
            money: 20,
        }
    }

    #[test]
    fn addition() {
        let smaller = Ledger {
            raw_data: 5,
            marts: 3,
            dashboards: 2,
            insights: 4,
            money: 10,
        };
        let total = sample() + smaller;
        assert_eq!(total.counts(), [15, 8, 5, 12, 30]);
    }

    #[test]
    fn subtraction() {
        let smaller = Ledger {
            raw_data: 5,
            marts: 3,
            dashboards: 2,
            insights: 4,
            money: 10,
        };
        let rest = sample() - smaller;
        assert_eq!(rest.counts(), [5, 2, 1, 4, 10]);
    }

    #[test]
    fn indexing() {
        let mut ledger = Ledger::default();
        for (i, &resource) in Resource::all().iter().enumerate() {
            ledger[resource] = i as u32;
        }
        assert_eq!(ledger.counts(), [0, 1, 2, 3, 4]);
        assert_eq!(ledger[Resource::Money], 4);
    }

    #[test]
    fn partial_order() {
        let smaller = Ledger {
            raw_data: 5,
            marts: 3,
            dashboards: 2,
            insights: 4,
            money: 10,
        };
        let sideways = Ledger {
            raw_data: 999,
            ..Ledger::default()
        };
        assert_eq!(sample(), sample());
        assert!(smaller < sample());
        assert!(smaller <= sample());
        assert!(sample() > smaller);
        assert!(sample() >= smaller);
        assert!(!(smaller > sample()));
        assert!(sample().partial_cmp(&sideways).is_none());
    }

    #[test]
    fn conversion_application() {
        let mut ledger = sample();
        let conversion = Conversion {
            take: Ledger {
                raw_data: 2,
                marts: 1,
                dashboards: 1,
                insights: 2,
                money: 5,
            },
            give: Ledger {
                raw_data: 1,
                marts: 2,
                dashboards: 0,
                insights: 1,
                money: 3,
            },
        };
        ledger.apply(&conversion);
        assert_eq!(ledger.counts(), [9, 6, 2, 7, 18]);
    }

    #[test]
    fn conversion_round_trip() {
        let mut ledger = sample();
        let conversion = Conversion {
            take: Ledger {
                raw_data: 3,
                insights: 2,
                ..Ledger::default()
            },
            give: Ledger {
                money: 7,
                marts: 1,
                ..Ledger::default()
            },
        };
        ledger.apply(&conversion);
        ledger.apply(&conversion.invert());
        assert_eq!(ledger, sample());
    }

    #[test]
    fn afford_check() {
        let take15 = Conversion {
            take: Ledger {
                raw_data: 15,
                ..Ledger::default()
            },
            give: Ledger::default(),
        };
        let take5 = Conversion {
            take: Ledger {
                raw_data: 5,
                ..Ledger::default()
            },
            give: Ledger::default(),
        };
        assert!(!sample().can_afford(&take15));
        assert!(sample().can_afford(&take5));
    }

    #[test]
    fn scale_application() {
        let mut ledger = sample();
        let rule = Scale {
            into: Resource::Money,
            factor: 0.5,
            from: Resource::Insight,
        };
        ledger.scale(&rule);
        assert_eq!(ledger.money, 24); // floor(8 * 0.5) = 4 more
    }
}
