//! Move-selection strategies
//!
//! Every agent answers the same question: given a board, which cell do I
//! take? The board is borrowed immutably, so an agent can only explore
//! hypothetical moves on its own clones.
//!
//! - [`RandomAgent`]: uniform pick from the free cells
//! - [`LinearAgent`]: one-ply lookahead scored by a weight vector over the
//!   line features, with fixed (good, greedy) or trainable weights

pub mod learning;
pub mod linear;
pub mod random;

pub use learning::{Learner, StubLearner};
pub use linear::{LinearAgent, Strategy};
pub use random::RandomAgent;

use crate::board::{AgentId, Board, Move};

/// Universal interface for all agents.
pub trait Agent {
    /// Unique, non-zero ID this agent plays with
    fn id(&self) -> AgentId;

    /// Display name used in logs and reports
    fn name(&self) -> String;

    /// Pick the next move. `None` means the agent has nothing to play.
    fn next_move(&mut self, board: &Board) -> Option<Move>;

    /// Learn from the boards of one finished game and return the training
    /// error. Agents without a learning hook return `None`.
    fn learn(&mut self, _trace: &[Board]) -> Option<f64> {
        None
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn id(&self) -> AgentId {
        (**self).id()
    }

    fn name(&self) -> String {
        (**self).name()
    }

    fn next_move(&mut self, board: &Board) -> Option<Move> {
        (**self).next_move(board)
    }

    fn learn(&mut self, trace: &[Board]) -> Option<f64> {
        (**self).learn(trace)
    }
}
