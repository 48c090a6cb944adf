/// opaque per-player counter record. a reserved extension point for
/// personal decks and tokens; currently constant, but it participates
/// in state identity so that future extensions cannot silently collide
/// with already-learned tables.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Counters {
    tokens: u32,
}

impl Counters {
    pub fn project(&self) -> serde_json::Value {
        serde_json::json!({ "tokens": self.tokens })
    }
}
