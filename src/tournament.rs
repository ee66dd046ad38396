//! Repeated games between a fixed pair of agents
//!
//! [`compete`] tallies the results of N games. [`train`] plays rounds of N
//! games, calling each agent's learning hook after every game, until the
//! errors or the results settle.

use log::info;

use crate::agent::Agent;
use crate::board::GameState;
use crate::game::play;

/// Rounds stop when some learning agent's error moves less than this
pub const ERROR_DELTA_THRESHOLD: f64 = 1.0;

/// Game results from agent 0's perspective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub won: u32,
    pub lost: u32,
    pub draw: u32,
}

impl Tally {
    /// Count a final result. Non-terminal states are ignored.
    pub fn record(&mut self, result: GameState) {
        match result {
            GameState::Won => self.won += 1,
            GameState::Lost => self.lost += 1,
            GameState::Draw => self.draw += 1,
            GameState::Ready | GameState::Ongoing => {}
        }
    }

    #[inline]
    pub fn games(&self) -> u32 {
        self.won + self.lost + self.draw
    }

    /// Sum of the absolute per-result differences
    pub fn distance(&self, other: &Tally) -> u32 {
        self.won.abs_diff(other.won) + self.lost.abs_diff(other.lost) + self.draw.abs_diff(other.draw)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Won: {} Lost: {} Draw: {}", self.won, self.lost, self.draw)
    }
}

/// Play `n` games and tally the results.
pub fn compete(agent0: &mut dyn Agent, agent1: &mut dyn Agent, size: usize, n: u32) -> Tally {
    let mut tally = Tally::default();
    for _ in 0..n {
        let record = play(size, agent0, agent1);
        tally.record(record.result);
    }
    info!("{} vs {}: {}", agent0.name(), agent1.name(), tally);
    tally
}

/// Why training stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Some learning agent reported zero error
    ZeroError,
    /// Some learning agent's error changed less than [`ERROR_DELTA_THRESHOLD`]
    ErrorConverged,
    /// Results changed by at most one game between rounds
    ResultsStable,
    MaxRounds,
}

/// One round of training games
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub tally: Tally,
    /// Last error per agent, `None` for agents without a learning hook
    pub errors: [Option<f64>; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub rounds: Vec<Round>,
    pub stop: StopReason,
}

/// Play rounds of `n` games with learning after every game.
///
/// Stops when a learning agent reports zero error, when some learning
/// agent's error changes by less than [`ERROR_DELTA_THRESHOLD`] between
/// rounds, when the tallies of two consecutive rounds differ by at most one
/// game, or after `max_rounds` rounds.
pub fn train(
    agent0: &mut dyn Agent,
    agent1: &mut dyn Agent,
    size: usize,
    n: u32,
    max_rounds: u32,
) -> TrainingReport {
    let mut rounds: Vec<Round> = Vec::new();

    loop {
        let mut round = Round {
            tally: Tally::default(),
            errors: [None, None],
        };

        for _ in 0..n {
            let record = play(size, agent0, agent1);
            round.errors = [agent0.learn(&record.trace), agent1.learn(&record.trace)];
            round.tally.record(record.result);
        }

        for (agent, error) in [(&*agent0, round.errors[0]), (&*agent1, round.errors[1])] {
            if let Some(error) = error {
                info!("{} - Error: {:.2}", agent.name(), error);
            }
        }
        info!("Results: {}", round.tally);

        let stop = stop_reason(rounds.last(), &round);
        rounds.push(round);

        if let Some(stop) = stop {
            info!("training stopped after {} rounds: {:?}", rounds.len(), stop);
            return TrainingReport { rounds, stop };
        }
        if rounds.len() >= max_rounds as usize {
            info!("training stopped after {} rounds: {:?}", rounds.len(), StopReason::MaxRounds);
            return TrainingReport {
                rounds,
                stop: StopReason::MaxRounds,
            };
        }
    }
}

fn stop_reason(previous: Option<&Round>, current: &Round) -> Option<StopReason> {
    if current.errors.iter().flatten().any(|&e| e == 0.0) {
        return Some(StopReason::ZeroError);
    }

    let previous = previous?;

    let converged = previous
        .errors
        .iter()
        .zip(&current.errors)
        .any(|(prev, cur)| match (prev, cur) {
            (Some(prev), Some(cur)) => (prev - cur).abs() < ERROR_DELTA_THRESHOLD,
            _ => false,
        });
    if converged {
        return Some(StopReason::ErrorConverged);
    }

    if previous.tally.distance(&current.tally) <= 1 {
        return Some(StopReason::ResultsStable);
    }

    None
}
