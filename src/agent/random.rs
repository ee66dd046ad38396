//! Uniformly random agent

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::Agent;
use crate::board::{AgentId, Board, Move};

/// An agent that plays a uniformly random free cell.
#[derive(Debug)]
pub struct RandomAgent {
    id: AgentId,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(id: AgentId) -> Self {
        Self {
            id,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible agent for tests and seeded matches
    pub fn with_seed(id: AgentId, seed: u64) -> Self {
        Self {
            id,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn id(&self) -> AgentId {
        self.id
    }

    fn name(&self) -> String {
        format!("RandomAgent {}", self.id)
    }

    fn next_move(&mut self, board: &Board) -> Option<Move> {
        let free = board.free_list();
        let &pos = free.choose(&mut self.rng)?;
        Some(Move::new(self.id, pos))
    }
}
