use super::action::Action;
use super::state::State;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// the decision callback the engine consumes. given a snapshot and a
/// non-empty ordered set of legal actions, return exactly one of them
/// by value. choices are expected to be fast and synchronous.
pub trait Agent {
    /// called once before every game
    fn begin(&mut self) {}
    /// choose one of the offered legal actions
    fn decide(&mut self, state: &State, actions: &[Action]) -> Action;
    /// called once after the game ends, with the winner flag
    fn finish(&mut self, _winner: bool) {}
}

/// baseline agent: uniform over whatever is legal
#[derive(Debug, Clone)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Agent for Random {
    fn decide(&mut self, _: &State, actions: &[Action]) -> Action {
        actions[self.rng.random_range(0..actions.len())].clone()
    }
}
