/// one player's side of the table: their ledger, their staff roster and
/// the game-constant production rules. every seat constructs its own
/// roster and rule tables; nothing is shared across instances.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Seat {
    ledger: Ledger,
    roster: BTreeMap<Role, Vec<Card>>,
    last_generated: Option<Resource>,
    rules: BTreeMap<Resource, Conversion>,
    money_gain: Scale,
    cap: usize,
}

impl Seat {
    pub fn new(settings: &Settings) -> Self {
        Self {
            ledger: Ledger {
                raw_data: 5,
                marts: 0,
                dashboards: 0,
                insights: 5,
                money: 10,
            },
            roster: Role::hireable()
                .iter()
                .map(|&role| (role, Vec::new()))
                .collect(),
            last_generated: None,
            rules: Self::rules(),
            money_gain: Scale::money_per_insight(settings.money_per_insight),
            cap: settings.roster_cap,
        }
    }

    /// the staff-independent conversion for each producible resource:
    /// raw data appears from nothing, everything downstream refines two
    /// units of the previous stage into one of the next
    fn rules() -> BTreeMap<Resource, Conversion> {
        let bundle = |resource: Resource, n: u32| {
            let mut ledger = Ledger::default();
            ledger[resource] = n;
            ledger
        };
        Resource::producible()
            .iter()
            .map(|&resource| {
                let rule = match resource {
                    Resource::RawData => Conversion {
                        take: Ledger::default(),
                        give: bundle(Resource::RawData, 1),
                    },
                    Resource::Mart => Conversion {
                        take: bundle(Resource::RawData, 2),
                        give: bundle(Resource::Mart, 1),
                    },
                    Resource::Dashboard => Conversion {
                        take: bundle(Resource::Mart, 2),
                        give: bundle(Resource::Dashboard, 1),
                    },
                    Resource::Insight => Conversion {
                        take: bundle(Resource::Dashboard, 2),
                        give: bundle(Resource::Insight, 1),
                    },
                    Resource::Money => unreachable!("money is never produced directly"),
                };
                (resource, rule)
            })
            .collect()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    #[cfg(test)]
    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
    pub fn last_generated(&self) -> Option<Resource> {
        self.last_generated
    }
    pub fn headcount(&self) -> usize {
        self.roster.values().map(Vec::len).sum()
    }
    /// every employed card together with the roster slot it occupies
    pub fn staff(&self) -> Vec<(Card, Role)> {
        self.roster
            .iter()
            .flat_map(|(&role, cards)| cards.iter().cloned().map(move |card| (card, role)))
            .collect()
    }
    /// roles with roster capacity remaining
    pub fn vacancies(&self) -> Vec<Role> {
        self.roster
            .iter()
            .filter(|(_, cards)| cards.len() < self.cap)
            .map(|(&role, _)| role)
            .collect()
    }
    pub fn has_vacancy(&self, role: Role) -> bool {
        self.roster
            .get(&role)
            .map(|cards| cards.len() < self.cap)
            .unwrap_or(false)
    }
    pub fn employs(&self, card: &Card, role: Role) -> bool {
        self.roster
            .get(&role)
            .map(|cards| cards.contains(card))
            .unwrap_or(false)
    }
    /// roster slots are kept sorted so that hire order never leaks into
    /// state identity
    pub fn hire(&mut self, card: Card, role: Role) {
        let slot = self.roster.entry(role).or_default();
        slot.push(card);
        slot.sort_unstable();
    }
    /// remove one matching card from the given slot, yielding it back
    pub fn fire(&mut self, card: &Card, role: Role) -> Option<Card> {
        let slot = self.roster.get_mut(&role)?;
        let at = slot.iter().position(|hired| hired == card)?;
        Some(slot.remove(at))
    }

    /// total per-turn cost across every employed card
    pub fn salary(&self) -> Conversion {
        self.roster
            .values()
            .flatten()
            .map(Card::salary)
            .fold(Conversion::default(), |sum, cost| sum + cost)
    }
    pub fn solvent(&self) -> bool {
        self.ledger.can_afford(&self.salary())
    }
    pub fn pay_salary(&mut self) {
        self.ledger.apply(&self.salary());
    }
    pub fn gain_money(&mut self) {
        self.ledger.scale(&self.money_gain);
    }

    /// base rule plus every rostered yield for the resource's producing
    /// role, summed into one net conversion
    pub fn net_conversion(&self, resource: Resource) -> Conversion {
        let role = Role::of(resource);
        let base = self.rules.get(&resource).copied().unwrap_or_default();
        self.roster
            .get(&role)
            .into_iter()
            .flatten()
            .map(|card| card.yield_for(role))
            .fold(base, |sum, bonus| sum + bonus)
    }
    pub fn can_generate(&self, resource: Resource) -> bool {
        self.ledger.can_afford(&self.net_conversion(resource))
    }
    pub fn generate(&mut self, resource: Resource) {
        self.ledger.apply(&self.net_conversion(resource));
        self.last_generated = Some(resource);
    }

    pub fn project(&self) -> serde_json::Value {
        serde_json::json!({
            "ledger": self.ledger.project(),
            "money_gain": self.money_gain.project(),
            "rules": self
                .rules
                .iter()
                .map(|(resource, rule)| (resource.to_string(), rule.project()))
                .collect::<serde_json::Map<String, serde_json::Value>>(),
            "roster": self
                .roster
                .iter()
                .map(|(role, cards)| {
                    (
                        role.to_string(),
                        serde_json::json!(
                            cards.iter().map(Card::project).collect::<Vec<_>>()
                        ),
                    )
                })
                .collect::<serde_json::Map<String, serde_json::Value>>(),
            "last_generated": self.last_generated.map(|r| r.to_string()),
            "roster_cap": self.cap,
        })
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} | salary {} | staff {}",
            self.ledger,
            self.salary().take.money,
            self.headcount()
        )
    }
}

use crate::cards::Card;
use crate::cards::Role;
use crate::gameplay::settings::Settings;
use crate::resources::Conversion;
use crate::resources::Ledger;
use crate::resources::Resource;
use crate::resources::Scale;
use std::collections::BTreeMap;
