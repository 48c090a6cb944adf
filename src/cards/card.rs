/// a hireable staff member. immutable once built: a card is identified
/// by what it is, not by which allocation it lives in, so two
/// structurally identical cards are the same card for set membership.
/// the catalog deliberately contains such duplicates.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    role: Role,
    salary: Conversion,
    yields: BTreeMap<Role, Conversion>,
}

impl Card {
    pub fn new(role: Role, salary: u32, coefficient: u32) -> Self {
        Self {
            role,
            salary: Conversion::salary(salary),
            yields: Self::yields(coefficient),
        }
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn salary(&self) -> Conversion {
        self.salary
    }
    /// the production bonus this card contributes when it sits in a
    /// roster slot of the given role. absent rows contribute nothing.
    pub fn yield_for(&self, role: Role) -> Conversion {
        self.yields.get(&role).copied().unwrap_or_default()
    }
    /// stable 64-bit digest of the card's full value.
    /// used for order-insensitive pile hashing and projections.
    pub fn signature(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
    /// one conversion per producing role, all scaled by the same
    /// coefficient: better-paid staff move more of everything
    fn yields(coefficient: u32) -> BTreeMap<Role, Conversion> {
        let c = coefficient;
        let raw = |n| Ledger {
            raw_data: n,
            ..Ledger::default()
        };
        let mart = |n| Ledger {
            marts: n,
            ..Ledger::default()
        };
        let dash = |n| Ledger {
            dashboards: n,
            ..Ledger::default()
        };
        let ins = |n| Ledger {
            insights: n,
            ..Ledger::default()
        };
        BTreeMap::from([
            (
                Role::DataEngineer,
                Conversion {
                    take: Ledger::default(),
                    give: raw(c),
                },
            ),
            (
                Role::SolutionArchitect,
                Conversion {
                    take: raw(c),
                    give: mart(c),
                },
            ),
            (
                Role::BiDeveloper,
                Conversion {
                    take: mart(c),
                    give: dash(c),
                },
            ),
            (
                Role::BusinessAnalyst,
                Conversion {
                    take: dash(c),
                    give: ins(c),
                },
            ),
        ])
    }
    pub fn project(&self) -> serde_json::Value {
        serde_json::json!({
            "role": self.role.to_string(),
            "salary": self.salary.project(),
            "yields": self
                .yields
                .iter()
                .map(|(role, conversion)| (role.to_string(), conversion.project()))
                .collect::<serde_json::Map<String, serde_json::Value>>(),
        })
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}(${})", self.role, self.salary.take.money)
    }
}

use crate::cards::role::Role;
use crate::resources::Conversion;
use crate::resources::Ledger;
use std::collections::BTreeMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt::{Display, Formatter, Result};
use std::hash::{Hash, Hasher};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_identity() {
        let a = Card::new(Role::DataEngineer, 2, 2);
        let b = Card::new(Role::DataEngineer, 2, 2);
        let c = Card::new(Role::DataEngineer, 3, 3);
        assert_eq!(a, b);
        assert_eq!(a.signature(), b.signature());
        assert_ne!(a, c);
    }

    #[test]
    fn yield_rows() {
        let card = Card::new(Role::BusinessAnalyst, 1, 2);
        let row = card.yield_for(Role::BusinessAnalyst);
        assert_eq!(row.take.dashboards, 2);
        assert_eq!(row.give.insights, 2);
        // slotting the same card as a data engineer reads the DE row
        let row = card.yield_for(Role::DataEngineer);
        assert_eq!(row.give.raw_data, 2);
        // no production row for management
        assert_eq!(card.yield_for(Role::ProjectManager), Conversion::default());
    }
}
