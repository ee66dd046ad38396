//! Turn-taking game loop
//!
//! The loop owns the authoritative board. Agents only ever see it through a
//! shared borrow, so their lookahead runs on their own clones. After every
//! accepted move a copy of the board is appended to the trace.
//!
//! ```
//! use fiverow::{Game, LinearAgent};
//!
//! let mut good = LinearAgent::good(3);
//! let mut greedy = LinearAgent::greedy(4);
//!
//! let record = Game::new(5, &mut good, &mut greedy).run();
//! assert!(record.result.is_terminal());
//! assert!(!record.trace.is_empty());
//! ```

use log::{debug, warn};

use crate::agent::Agent;
use crate::board::{AgentId, Board, GameState};
use crate::error::InvalidMove;

/// Why a game ended early
#[derive(Debug, Clone)]
pub enum Forfeit {
    /// The board rejected the agent's move
    IllegalMove(InvalidMove),
    /// The agent returned no move
    NoMove { culprit: AgentId },
}

impl Forfeit {
    /// The agent that lost by forfeit
    pub fn culprit(&self) -> AgentId {
        match self {
            Forfeit::IllegalMove(err) => err.culprit,
            Forfeit::NoMove { culprit } => *culprit,
        }
    }
}

/// Outcome of one game
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Result from agent 0's perspective
    pub result: GameState,
    /// Board after each accepted move
    pub trace: Vec<Board>,
    pub forfeit: Option<Forfeit>,
}

/// A single game between two agents. Agent 0 moves first.
pub struct Game<'a> {
    board: Board,
    agents: [&'a mut dyn Agent; 2],
}

impl<'a> Game<'a> {
    /// # Panics
    ///
    /// Panics if the two agents share an ID or use ID 0.
    pub fn new(size: usize, agent0: &'a mut dyn Agent, agent1: &'a mut dyn Agent) -> Self {
        let board = Board::new(size, [agent0.id(), agent1.id()]);
        Self {
            board,
            agents: [agent0, agent1],
        }
    }

    /// Play until the board is finished or an agent forfeits.
    pub fn run(mut self) -> GameRecord {
        let mut trace = Vec::new();

        'game: while !self.board.is_finished() {
            for turn in 0..2 {
                let agent = &mut *self.agents[turn];

                let Some(mv) = agent.next_move(&self.board) else {
                    warn!("{} has no move to play", agent.name());
                    let forfeit = Forfeit::NoMove { culprit: agent.id() };
                    return Self::forfeited(turn, forfeit, trace);
                };

                // A move in the opponent's name is as illegal as an occupied cell
                let executed = if mv.agent == agent.id() {
                    self.board.execute(mv).map(|_| ())
                } else {
                    Err(InvalidMove {
                        culprit: agent.id(),
                        board: Box::new(self.board.clone()),
                        mv,
                    })
                };

                if let Err(err) = executed {
                    warn!("Invalid move: {} wants to {}", agent.name(), mv.pos);
                    return Self::forfeited(turn, Forfeit::IllegalMove(err), trace);
                }

                debug!("{} plays {}", agent.name(), mv.pos);
                trace.push(self.board.clone());

                if self.board.is_finished() {
                    break 'game;
                }
            }
        }

        let result = self.board.game_state(self.agents[0].id());
        debug!("game over after {} moves: {:?}", trace.len(), result);

        GameRecord {
            result,
            trace,
            forfeit: None,
        }
    }

    /// The opponent of the agent at `turn` wins
    fn forfeited(turn: usize, forfeit: Forfeit, trace: Vec<Board>) -> GameRecord {
        let result = if turn == 1 {
            GameState::Won
        } else {
            GameState::Lost
        };

        GameRecord {
            result,
            trace,
            forfeit: Some(forfeit),
        }
    }
}

/// Play one game on a fresh board
pub fn play(size: usize, agent0: &mut dyn Agent, agent1: &mut dyn Agent) -> GameRecord {
    Game::new(size, agent0, agent1).run()
}
