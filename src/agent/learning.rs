//! Learning hook for trainable linear agents

use crate::board::{AgentId, Board};
use crate::eval::Weights;

/// Weight update rule applied after each game.
pub trait Learner: std::fmt::Debug {
    /// Adjust `weights` from the boards of one game and return a
    /// non-negative training error.
    fn learn(&mut self, agent: AgentId, weights: &mut Weights, eta: f64, trace: &[Board]) -> f64;
}

/// Placeholder update rule: reports zero error and leaves the weights alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubLearner;

impl Learner for StubLearner {
    fn learn(&mut self, _agent: AgentId, _weights: &mut Weights, _eta: f64, _trace: &[Board]) -> f64 {
        0.0
    }
}
