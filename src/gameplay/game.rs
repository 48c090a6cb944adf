use super::action::Action;
use super::agent::Agent;
use super::board::GameBoard;
use super::counters::Counters;
use super::phase::Phase;
use super::seat::Seat;
use super::settings::Settings;
use super::state::State;
use crate::resources::Resource;
use anyhow::Result;

/// the turn engine. drives one game to completion: per round each seat
/// gains money, takes a resource decision, a hire decision, a fire
/// decision (looped mandatorily while its salary is unaffordable), pays
/// salary, and play advances. terminal conditions are checked at loop
/// start and after every advance.
///
/// the engine owns legality: agents are only ever offered actions whose
/// preconditions hold at the moment of the offer, and an action
/// returned from outside the offered set aborts the game.
#[derive(Debug)]
pub struct Game {
    board: GameBoard,
    seats: Vec<Seat>,
    counters: Vec<Counters>,
    settings: Settings,
    round: usize,
    ticker: usize,
}

impl Game {
    pub fn new(n_seats: usize, settings: Settings, seed: u64) -> Result<Self> {
        anyhow::ensure!(n_seats > 0, "a game needs at least one seat");
        let mut board = GameBoard::new(&settings, seed)?;
        board.setup()?;
        Ok(Self {
            board,
            seats: (0..n_seats).map(|_| Seat::new(&settings)).collect(),
            counters: vec![Counters::default(); n_seats],
            settings,
            round: 0,
            ticker: 0,
        })
    }

    /// run to natural termination. one game per instance: the deck and
    /// the seats are consumed by play. returns the winning seat index,
    /// or None when the round limit was reached first.
    pub fn play<A: Agent>(&mut self, agents: &mut [A]) -> Result<Option<usize>> {
        anyhow::ensure!(
            agents.len() == self.seats.len(),
            "expected {} agents, got {}",
            self.seats.len(),
            agents.len()
        );
        for agent in agents.iter_mut() {
            agent.begin();
        }
        while self.winner().is_none() && self.round < self.settings.round_limit {
            self.turn(agents)?;
        }
        let winner = self.winner();
        for (i, agent) in agents.iter_mut().enumerate() {
            agent.finish(winner == Some(i));
        }
        log::debug!(
            "game over at round {}: {}",
            self.round,
            match winner {
                Some(i) => format!("seat {} wins", i),
                None => "no winner".to_string(),
            }
        );
        Ok(winner)
    }

    /// one seat's full turn
    fn turn<A: Agent>(&mut self, agents: &mut [A]) -> Result<()> {
        let t = self.ticker;
        log::debug!("round {} seat {} | {}", self.round, t, self.board);
        self.seats[t].gain_money();
        self.decide(agents, Phase::Generate, false)?;
        self.decide(agents, Phase::Hire, false)?;
        self.decide(agents, Phase::Fire, false)?;
        // staff must be let go until payroll clears; the loop makes
        // progress because every mandatory offer only contains fires
        while !self.seats[t].solvent() {
            self.decide(agents, Phase::Fire, true)?;
        }
        self.seats[t].pay_salary();
        log::debug!("seat {} | {}", t, self.seats[t]);
        self.advance();
        Ok(())
    }

    /// snapshot, offer, choose, apply, log
    fn decide<A: Agent>(&mut self, agents: &mut [A], phase: Phase, mandatory: bool) -> Result<()> {
        let t = self.ticker;
        let state = self.state_of(t);
        let actions = self.legal(phase, mandatory);
        let choice = agents[t].decide(&state, &actions);
        anyhow::ensure!(
            actions.contains(&choice),
            "agent returned an action outside the offered set: {}",
            choice
        );
        log::debug!("seat {} {}: {}", t, phase, choice);
        choice.apply(&mut self.board, &mut self.seats[t])
    }

    /// the legal action set for the acting seat at the given phase.
    /// always non-empty: a pass is offered whenever the decision is
    /// optional or nothing else is possible.
    fn legal(&self, phase: Phase, mandatory: bool) -> Vec<Action> {
        let seat = &self.seats[self.ticker];
        let mut actions = match phase {
            Phase::Generate => Resource::producible()
                .iter()
                .filter(|&&resource| seat.can_generate(resource))
                .map(|&resource| Action::Generate { resource })
                .collect(),
            Phase::Hire => self
                .board
                .staff()
                .open()
                .iter()
                .flat_map(|card| {
                    seat.vacancies().into_iter().map(move |role| Action::Hire {
                        card: card.clone(),
                        role,
                    })
                })
                .collect(),
            Phase::Fire => seat
                .staff()
                .into_iter()
                .map(|(card, role)| Action::Fire { card, role })
                .collect::<Vec<_>>(),
        };
        if actions.is_empty() || !mandatory {
            actions.push(Action::Empty);
        }
        actions
    }

    /// rotate to the next seat, bumping the round when the table wraps
    fn advance(&mut self) {
        self.ticker += 1;
        if self.ticker == self.seats.len() {
            self.ticker = 0;
            self.round += 1;
        }
    }

    /// first seat whose money strictly exceeds the threshold
    pub fn winner(&self) -> Option<usize> {
        self.seats
            .iter()
            .position(|seat| seat.ledger().money > self.settings.money_to_win)
    }

    pub fn round(&self) -> usize {
        self.round
    }
    pub fn state_of(&self, seat: usize) -> State {
        State::new(&self.board, &self.seats[seat], &self.counters[seat])
    }
    pub fn seat(&self, seat: usize) -> &Seat {
        &self.seats[seat]
    }
    #[cfg(test)]
    pub(crate) fn seat_mut(&mut self, seat: usize) -> &mut Seat {
        &mut self.seats[seat]
    }
    pub fn board(&self) -> &GameBoard {
        &self.board
    }
}
