use super::learner::Learner;
use super::table::Table;
use super::table::absorb;
use super::table::prefer;
use crate::gameplay::Game;
use crate::gameplay::Settings;
use anyhow::Result;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;

/// runs many independent games over a shared pool of learners. each
/// training pass shuffles the pool, partitions it into disjoint groups
/// of seats_per_game, and plays one game per group in parallel; games
/// share nothing but the read-only card catalog, so the only
/// synchronization point is the post-barrier merge. any failed game
/// fails the whole pass: tables merged from a corrupted game are
/// untrustworthy.
pub struct Farm {
    learners: Vec<Learner>,
    seats_per_game: usize,
    settings: Settings,
    rng: SmallRng,
    passes: usize,
}

impl Farm {
    pub fn new(seats_per_game: usize, games: usize, settings: Settings, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let learners = (0..seats_per_game * games)
            .map(|_| Learner::random(rng.random()))
            .collect();
        Self {
            learners,
            seats_per_game,
            settings,
            rng,
            passes: 0,
        }
    }

    /// one training pass: every learner plays exactly one game
    pub fn train(&mut self) -> Result<()> {
        self.passes += 1;
        self.learners.shuffle(&mut self.rng);
        let groups = self.learners.len() / self.seats_per_game;
        let seeds = (0..groups)
            .map(|_| self.rng.random())
            .collect::<Vec<u64>>();
        let settings = self.settings;
        let per = self.seats_per_game;
        let winners = self
            .learners
            .par_chunks_mut(per)
            .zip(seeds.par_iter())
            .map(|(group, &seed)| {
                let mut game = Game::new(group.len(), settings, seed)?;
                game.play(group)
            })
            .collect::<Result<Vec<Option<usize>>>>()?;
        log::info!(
            "pass {}: {} games, {} decided by threshold",
            self.passes,
            winners.len(),
            winners.iter().filter(|w| w.is_some()).count()
        );
        Ok(())
    }

    /// merge every learner's q-table: values summed per (state, action)
    pub fn merged_table(&self) -> Table {
        self.learners.iter().fold(Table::new(), |mut merged, l| {
            absorb(&mut merged, l.table());
            merged
        })
    }

    /// merge every learner's best-decision record: values maxed
    pub fn merged_best(&self) -> Table {
        self.learners.iter().fold(Table::new(), |mut merged, l| {
            prefer(&mut merged, l.best());
            merged
        })
    }

    pub fn learners(&self) -> &[Learner] {
        &self.learners
    }
}
