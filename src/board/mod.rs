//! Board representation for the line game

pub mod board;
pub mod lines;


// Re-exports
pub use board::Board;
pub use lines::{Line, LineCatalogue};

/// Default board size (5x5)
pub const DEFAULT_SIZE: usize = 5;

/// Cell value of an unoccupied cell
pub const EMPTY: AgentId = 0;

/// Identifier of an agent. Zero is reserved for empty cells.
pub type AgentId = u32;

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        (self.row as usize) < size && (self.col as usize) < size
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move: the acting agent and the cell it wants to occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub agent: AgentId,
    pub pos: Pos,
}

impl Move {
    #[inline]
    pub fn new(agent: AgentId, pos: Pos) -> Self {
        Self { agent, pos }
    }
}

/// Game state as seen from one agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Nothing has been played yet
    Ready,
    Ongoing,
    Won,
    Lost,
    Draw,
}

impl GameState {
    /// Whether the game is over
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost | GameState::Draw)
    }
}
