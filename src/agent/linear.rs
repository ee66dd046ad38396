//! Linear evaluation agents
//!
//! One evaluator, parameterised by a weight vector: every free cell is tried
//! on a clone of the board, the resulting feature vector is dotted with the
//! weights, and the first cell with the highest score wins. The weight
//! vector and the [`Strategy`] tag are all that separate the good, greedy and
//! learning agents.

use log::trace;

use super::learning::{Learner, StubLearner};
use super::Agent;
use crate::board::{AgentId, Board, Move, Pos, DEFAULT_SIZE};
use crate::eval::Weights;

/// Whether an agent's weights are fixed or updated after games
#[derive(Debug)]
pub enum Strategy {
    Fixed,
    Trainable {
        /// Learning rate
        eta: f64,
        learner: Box<dyn Learner>,
    },
}

/// One-ply lookahead agent with a linear evaluation function.
#[derive(Debug)]
pub struct LinearAgent {
    id: AgentId,
    label: &'static str,
    weights: Weights,
    strategy: Strategy,
}

impl LinearAgent {
    /// Fixed-weight agent with custom weights
    pub fn with_weights(id: AgentId, weights: Weights) -> Self {
        Self {
            id,
            label: "LinearAgent",
            weights,
            strategy: Strategy::Fixed,
        }
    }

    /// Builds its own lines and blocks the opponent's, blocking first at
    /// near-winning lengths.
    pub fn good(id: AgentId) -> Self {
        Self {
            label: "GoodAgent",
            ..Self::with_weights(id, Weights::good())
        }
    }

    /// Extends its own lines and never blocks.
    pub fn greedy(id: AgentId) -> Self {
        Self {
            label: "GreedyAgent",
            ..Self::with_weights(id, Weights::greedy())
        }
    }

    /// Trainable agent on the default board, starting from zero weights.
    pub fn learning(id: AgentId, eta: f64) -> Self {
        Self::learning_for_size(id, eta, DEFAULT_SIZE)
    }

    pub fn learning_for_size(id: AgentId, eta: f64, size: usize) -> Self {
        Self::with_learner(id, eta, Weights::zeros(size), Box::new(StubLearner))
    }

    pub fn with_learner(id: AgentId, eta: f64, weights: Weights, learner: Box<dyn Learner>) -> Self {
        Self {
            id,
            label: "LearningAgent",
            weights,
            strategy: Strategy::Trainable { eta, learner },
        }
    }

    #[inline]
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Learning rate of a trainable agent
    pub fn eta(&self) -> Option<f64> {
        match self.strategy {
            Strategy::Fixed => None,
            Strategy::Trainable { eta, .. } => Some(eta),
        }
    }

    /// Value of a board from this agent's perspective
    #[inline]
    pub fn evaluate(&self, board: &Board) -> f64 {
        self.weights.dot(&board.lines(self.id))
    }

    /// Best free cell with its score.
    ///
    /// Ties go to the cell that comes first in row-major order.
    pub fn best_move(&self, board: &Board) -> Option<(Pos, f64)> {
        let mut best: Option<(Pos, f64)> = None;

        for pos in board.free_list() {
            let mut sim = board.clone();
            if sim.execute(Move::new(self.id, pos)).is_err() {
                continue;
            }
            let score = self.evaluate(&sim);
            trace!("{} considers {} -> {}", self.name(), pos, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        best
    }
}

impl Agent for LinearAgent {
    fn id(&self) -> AgentId {
        self.id
    }

    fn name(&self) -> String {
        match self.strategy {
            Strategy::Fixed => format!("{} {}", self.label, self.id),
            Strategy::Trainable { eta, .. } => {
                format!("{} {} (eta: {eta}): {}", self.label, self.id, self.weights)
            }
        }
    }

    fn next_move(&mut self, board: &Board) -> Option<Move> {
        let (pos, _) = self.best_move(board)?;
        Some(Move::new(self.id, pos))
    }

    fn learn(&mut self, trace: &[Board]) -> Option<f64> {
        match &mut self.strategy {
            Strategy::Fixed => None,
            Strategy::Trainable { eta, learner } => {
                Some(learner.learn(self.id, &mut self.weights, *eta, trace))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: AgentId = 1;
    const B: AgentId = 2;

    /// B threatens to finish row 0 at (0, 4); A can reach four on row 2.
    ///
    /// ```text
    /// B B B B .
    /// . . . . .
    /// . A A A .
    /// . . . . .
    /// . . . . .
    /// ```
    fn threat_board() -> Board {
        let mut board = Board::new(5, [A, B]);
        for c in 0..4 {
            board.place(Pos::new(0, c), B);
        }
        for c in 1..4 {
            board.place(Pos::new(2, c), A);
        }
        board
    }

    #[test]
    fn test_good_agent_blocks() {
        let mut agent = LinearAgent::good(A);
        let mv = agent.next_move(&threat_board()).unwrap();
        assert_eq!(mv, Move::new(A, Pos::new(0, 4)));
    }

    #[test]
    fn test_greedy_agent_does_not_block() {
        let mut agent = LinearAgent::greedy(A);
        let mv = agent.next_move(&threat_board()).unwrap();
        assert_ne!(mv.pos, Pos::new(0, 4));
        // Extends row 2 on the side that also opens column 4
        assert_eq!(mv.pos, Pos::new(2, 4));
    }

    #[test]
    fn test_good_agent_takes_win() {
        let mut board = threat_board();
        board.place(Pos::new(2, 0), A);
        let mut agent = LinearAgent::good(A);
        assert_eq!(agent.next_move(&board).unwrap().pos, Pos::new(2, 4));
    }

    #[test]
    fn test_ties_resolve_to_first_free_cell() {
        // Zero weights score every cell the same
        let mut agent = LinearAgent::learning(A, 0.1);
        let mut board = Board::new(5, [A, B]);
        board.place(Pos::new(0, 0), B);
        assert_eq!(agent.next_move(&board).unwrap().pos, Pos::new(0, 1));
    }

    #[test]
    fn test_best_move_leaves_board_untouched() {
        let board = threat_board();
        let before = board.clone();
        let agent = LinearAgent::good(A);
        let _ = agent.best_move(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_evaluate() {
        let agent = LinearAgent::good(A);
        // Own row of three (4), anti-diagonal single (1); opponent four (-16),
        // opponent column-0 single (-2)
        assert_eq!(agent.evaluate(&threat_board()), 4.0 + 1.0 - 16.0 - 2.0);
    }

    #[test]
    fn test_no_move_on_full_board() {
        let mut board = Board::new(1, [A, B]);
        board.place(Pos::new(0, 0), B);
        let mut agent = LinearAgent::with_weights(A, Weights::new(vec![1.0, -1.0]));
        assert_eq!(agent.next_move(&board), None);
    }

    #[test]
    fn test_learning_hook() {
        let mut fixed = LinearAgent::good(A);
        assert_eq!(fixed.learn(&[]), None);

        let mut learning = LinearAgent::learning(B, 0.5);
        let trace = vec![Board::new(5, [A, B])];
        assert_eq!(learning.learn(&trace), Some(0.0));
        assert_eq!(learning.weights(), &Weights::zeros(5));
        assert_eq!(learning.eta(), Some(0.5));
        assert_eq!(fixed.eta(), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(LinearAgent::good(3).name(), "GoodAgent 3");
        assert_eq!(LinearAgent::greedy(4).name(), "GreedyAgent 4");
        assert_eq!(
            LinearAgent::learning_for_size(1, 0.1, 2).name(),
            "LearningAgent 1 (eta: 0.1): 0.00, 0.00, 0.00, 0.00"
        );
    }
}
