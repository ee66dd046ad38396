//! Five-in-a-row line game with heuristic agents
//!
//! Two agents take turns placing tokens on a square board. A game is won by
//! owning a whole row, column or main diagonal, and drawn when the board
//! fills up first.
//!
//! # Architecture
//!
//! - [`board`]: Board representation, line catalogue, move execution
//! - [`eval`]: Line-count features and linear weight vectors
//! - [`rules`]: Terminal-state detection
//! - [`agent`]: Random and linear-evaluation agents
//! - [`game`]: Turn-taking game loop with forfeits
//! - [`tournament`]: Repeated games and training rounds
//! - [`config`]: TOML match configuration
//! - [`ui`]: Replay viewer
//!
//! # Quick Start
//!
//! ```
//! use fiverow::{Agent, Board, LinearAgent, Pos};
//!
//! let mut board = Board::new(5, [1, 2]);
//! for col in 0..4 {
//!     board.place(Pos::new(0, col), 2);
//! }
//!
//! // The good agent blocks the open end of the row
//! let mut agent = LinearAgent::good(1);
//! let mv = agent.next_move(&board).unwrap();
//! assert_eq!(mv.pos, Pos::new(0, 4));
//! ```
//!
//! # Features
//!
//! Every agent decides from the same feature vector: for each run length,
//! how many lines hold that many of the agent's tokens and none of the
//! opponent's, followed by the same counts for the opponent, negated. See
//! [`eval::features`].

pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod tournament;
pub mod ui;

// Re-export commonly used types for convenience
pub use agent::{Agent, LinearAgent, RandomAgent};
pub use board::{AgentId, Board, GameState, Move, Pos, DEFAULT_SIZE};
pub use error::{ConfigError, InvalidMove};
pub use game::{play, Forfeit, Game, GameRecord};
pub use tournament::{compete, train, Tally, TrainingReport};
