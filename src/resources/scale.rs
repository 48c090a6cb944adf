use super::resource::Resource;
use serde::Serialize;

/// a multiplicative derivation of one resource from another,
/// applied as floor(ledger[from] * factor) added to ledger[into]
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scale {
    pub into: Resource,
    pub factor: f32,
    pub from: Resource,
}

impl Scale {
    pub const fn money_per_insight(factor: f32) -> Self {
        Self {
            into: Resource::Money,
            factor,
            from: Resource::Insight,
        }
    }
    pub fn project(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

// the factor participates in hashing and equality through its bit
// pattern. NaN factors are never constructed, so Eq is sound.
impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.into == other.into
            && self.from == other.from
            && self.factor.to_bits() == other.factor.to_bits()
    }
}
impl Eq for Scale {}
impl std::hash::Hash for Scale {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.into.hash(state);
        self.from.hash(state);
        self.factor.to_bits().hash(state);
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} x{} -> {}", self.from, self.factor, self.into)
    }
}
