use super::table::Row;
use super::table::Table;
use crate::Utility;
use crate::gameplay::Action;
use crate::gameplay::Agent;
use crate::gameplay::State;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeMap;

/// a tabular Q-learning agent. keeps an exact per-(state, action)
/// estimate, updated by the temporal-difference rule
///
///   q[prev][act] <- (1-a)*q[prev][act] + a*(reward + g*max q[cur])
///
/// whenever the observed state changed between consecutive decisions,
/// with reward = value(cur) - value(prev). selection is epsilon-greedy
/// over the offered legal set. all randomness flows through a seeded
/// SmallRng so training runs are reproducible.
#[derive(Debug, Clone)]
pub struct Learner {
    table: Table,
    best: Table,
    history: BTreeMap<State, Action>,
    observations: BTreeMap<State, BTreeMap<Action, State>>,
    last: Option<(State, Action)>,
    peak: Utility,
    wins: usize,
    alpha: Utility,
    gamma: Utility,
    epsilon: Utility,
    rng: SmallRng,
}

impl Learner {
    pub fn new(alpha: Utility, gamma: Utility, epsilon: Utility, seed: u64) -> Self {
        Self {
            table: Table::new(),
            best: Table::new(),
            history: BTreeMap::new(),
            observations: BTreeMap::new(),
            last: None,
            peak: 0.0,
            wins: 0,
            alpha,
            gamma,
            epsilon,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// hyperparameters jittered per agent so a farm explores a small
    /// neighborhood of the learning schedule
    pub fn random(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let alpha = 0.8 + rng.random::<f32>() * 0.1;
        let gamma = 0.8 + rng.random::<f32>() * 0.1;
        let epsilon = rng.random::<f32>() * 0.1;
        let mut learner = Self::new(alpha, gamma, epsilon, seed);
        learner.rng = rng;
        learner
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn best(&self) -> &Table {
        &self.best
    }
    pub fn wins(&self) -> usize {
        self.wins
    }
    /// every (state, action) -> successor-state transition ever observed
    pub fn observations(&self) -> &BTreeMap<State, BTreeMap<Action, State>> {
        &self.observations
    }

    /// make sure this state's row exists and covers the offered actions
    fn witness(&mut self, state: &State, actions: &[Action]) {
        let row = self.table.entry(state.clone()).or_insert_with(Row::new);
        for action in actions {
            row.entry(action.clone()).or_insert(0.0);
        }
    }

    /// the single-step temporal-difference backup
    fn blend(&self, q: Utility, reward: Utility, horizon: Utility) -> Utility {
        (1.0 - self.alpha) * q + self.alpha * (reward + self.gamma * horizon)
    }

    /// fold the newly observed state into the estimate of the previous
    /// (state, action) pair
    fn update(&mut self, state: &State) {
        let Some((prev, act)) = self.last.clone() else {
            return;
        };
        let reward = state.value() - prev.value();
        let horizon = self
            .table
            .get(state)
            .map(|row| row.values().copied().fold(Utility::MIN, Utility::max))
            .unwrap_or(0.0);
        let q = *self
            .table
            .entry(prev.clone())
            .or_insert_with(Row::new)
            .entry(act.clone())
            .or_insert(0.0);
        let blended = self.blend(q, reward, horizon);
        *self
            .table
            .get_mut(&prev)
            .expect("row was just inserted")
            .get_mut(&act)
            .expect("entry was just inserted") = blended;
    }

    /// argmax over the offered actions, ties broken by offer order
    fn greedy(&self, state: &State, actions: &[Action]) -> Action {
        let row = self.table.get(state);
        let mut best = actions[0].clone();
        let mut top = Utility::MIN;
        for action in actions {
            let q = row
                .and_then(|row| row.get(action))
                .copied()
                .unwrap_or(0.0);
            if q > top {
                top = q;
                best = action.clone();
            }
        }
        best
    }
}

impl Agent for Learner {
    fn begin(&mut self) {
        self.history.clear();
        self.last = None;
        self.peak = 0.0;
    }

    fn decide(&mut self, state: &State, actions: &[Action]) -> Action {
        if let Some((prev, act)) = self.last.clone() {
            self.observations
                .entry(prev.clone())
                .or_default()
                .insert(act, state.clone());
            self.witness(state, actions);
            if prev != *state {
                self.update(state);
            }
        } else {
            self.witness(state, actions);
        }
        self.peak = self.peak.max(state.value());
        let choice = if self.rng.random::<f32>() < 1.0 - self.epsilon {
            self.greedy(state, actions)
        } else {
            actions[self.rng.random_range(0..actions.len())].clone()
        };
        self.history.insert(state.clone(), choice.clone());
        self.last = Some((state.clone(), choice.clone()));
        choice
    }

    /// fold the game's decision history into the best-observed record,
    /// keyed by the peak value the game ever reached
    fn finish(&mut self, winner: bool) {
        self.wins += winner as usize;
        for (state, action) in &self.history {
            let entry = self
                .best
                .entry(state.clone())
                .or_default()
                .entry(action.clone())
                .or_insert(self.peak);
            *entry = entry.max(self.peak);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::{Game, Settings};

    #[test]
    fn blend_converges_to_discounted_reward() {
        // a single (state, action) looping onto itself with constant
        // reward r converges monotonically toward r / (1 - gamma)
        let learner = Learner::new(0.5, 0.9, 0.0, 0);
        let reward = 10.0;
        let limit = reward / (1.0 - 0.9);
        let mut q: Utility = 0.0;
        let mut prev = q;
        for _ in 0..10_000 {
            q = learner.blend(q, reward, q);
            assert!(q >= prev - 1e-3);
            assert!(q <= limit + 1e-2);
            prev = q;
        }
        assert!((q - limit).abs() < 1.0);
    }

    #[test]
    fn greedy_breaks_ties_by_offer_order() {
        let learner = Learner::new(0.8, 0.8, 0.0, 1);
        let game = Game::new(1, Settings::default(), 1).unwrap();
        let state = game.state_of(0);
        let actions = vec![
            Action::Empty,
            Action::Generate {
                resource: crate::resources::Resource::RawData,
            },
        ];
        // nothing learned yet: everything ties at zero, first offer wins
        assert_eq!(learner.greedy(&state, &actions), Action::Empty);
    }

    #[test]
    fn update_raises_estimate_after_gain() {
        let mut learner = Learner::new(0.8, 0.8, 0.0, 2);
        let mut game = Game::new(1, Settings::default(), 7).unwrap();
        let before = game.state_of(0);
        let actions = vec![Action::Generate {
            resource: crate::resources::Resource::RawData,
        }];
        let choice = learner.decide(&before, &actions);
        assert_eq!(actions[0], choice);
        game.seat_mut(0).generate(crate::resources::Resource::RawData);
        let after = game.state_of(0);
        learner.decide(&after, &[Action::Empty]);
        let q = learner.table()[&before][&choice];
        assert!(q > 0.0, "gaining a resource should be rewarded, got {}", q);
        assert_eq!(learner.observations()[&before][&choice], after);
    }

    #[test]
    fn learning_through_full_games_is_deterministic() {
        let play = |seed: u64| {
            let mut game = Game::new(2, Settings::default(), seed).unwrap();
            let mut agents = vec![Learner::random(seed), Learner::random(seed + 1)];
            game.play(&mut agents).unwrap();
            (agents[0].table().clone(), agents[1].table().clone())
        };
        assert_eq!(play(42), play(42));
    }
}
