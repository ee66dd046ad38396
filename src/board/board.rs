//! Board structure with move execution

use super::lines::LineCatalogue;
use super::{AgentId, GameState, Move, Pos, EMPTY};
use crate::error::InvalidMove;
use crate::eval::{self, Features};
use crate::rules;

/// Game board owned by the game loop.
///
/// Cloning copies the grid; the line catalogue is shared.
#[derive(Debug, Clone)]
pub struct Board {
    /// Row-major cell owners, `EMPTY` for free cells
    grid: Vec<AgentId>,
    size: usize,
    /// The two agents allowed on this board, agent 0 first
    agent_ids: [AgentId; 2],
    lines: LineCatalogue,
    last_move: Option<Pos>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or does not fit a `u8` coordinate, or if the
    /// agent IDs are equal or zero.
    pub fn new(size: usize, agent_ids: [AgentId; 2]) -> Self {
        assert!(size > 0 && size <= u8::MAX as usize, "invalid board size {size}");
        assert!(
            agent_ids[0] != EMPTY && agent_ids[1] != EMPTY && agent_ids[0] != agent_ids[1],
            "agent ids must be distinct and non-zero, got {agent_ids:?}"
        );

        Self {
            grid: vec![EMPTY; size * size],
            size,
            agent_ids,
            lines: LineCatalogue::new(size),
            last_move: None,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn agent_ids(&self) -> [AgentId; 2] {
        self.agent_ids
    }

    #[inline]
    pub fn line_catalogue(&self) -> &LineCatalogue {
        &self.lines
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// The other agent on this board, `None` if `agent` does not play here
    #[inline]
    pub fn opponent(&self, agent: AgentId) -> Option<AgentId> {
        match self.agent_ids {
            [a, b] if a == agent => Some(b),
            [a, b] if b == agent => Some(a),
            _ => None,
        }
    }

    /// Owner of the cell at `pos`
    #[inline]
    pub fn get(&self, pos: Pos) -> AgentId {
        self.grid[pos.to_index(self.size)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == EMPTY
    }

    /// Write `agent` into a cell, occupied or not. Used to set up positions;
    /// game moves go through `execute`.
    ///
    /// # Panics
    ///
    /// Panics if `agent` is neither empty nor one of this board's agents, or
    /// if `pos` is off the board.
    #[inline]
    pub fn place(&mut self, pos: Pos, agent: AgentId) {
        assert!(
            agent == EMPTY || self.agent_ids.contains(&agent),
            "agent {agent} does not play on this board"
        );
        let idx = pos.to_index(self.size);
        self.grid[idx] = agent;
    }

    /// Execute a move on the board.
    ///
    /// Fails if the target cell is occupied, outside the board, or the mover
    /// is not one of this board's agents. On failure the board is unchanged
    /// and the error carries a copy of it.
    pub fn execute(&mut self, mv: Move) -> Result<&mut Self, InvalidMove> {
        let legal = mv.pos.in_bounds(self.size)
            && self.agent_ids.contains(&mv.agent)
            && self.is_empty(mv.pos);

        if !legal {
            return Err(InvalidMove {
                culprit: mv.agent,
                board: Box::new(self.clone()),
                mv,
            });
        }

        self.place(mv.pos, mv.agent);
        self.last_move = Some(mv.pos);
        Ok(self)
    }

    /// Every empty cell in row-major order
    pub fn free_list(&self) -> Vec<Pos> {
        self.grid
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == EMPTY)
            .map(|(idx, _)| Pos::from_index(idx, self.size))
            .collect()
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.grid.iter().filter(|&&cell| cell == EMPTY).count()
    }

    /// Cells owned by `agent` in row-major order
    pub fn cells_of(&self, agent: AgentId) -> Vec<Pos> {
        self.grid
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell != EMPTY && cell == agent)
            .map(|(idx, _)| Pos::from_index(idx, self.size))
            .collect()
    }

    /// Total tokens on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.grid.len() - self.free_count()
    }

    /// Check if nothing has been placed yet
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.grid.iter().all(|&cell| cell == EMPTY)
    }

    /// Feature vector from `agent`'s perspective, see [`eval::extract`]
    pub fn lines(&self, agent: AgentId) -> Features {
        eval::extract(self, agent)
    }

    pub fn is_finished(&self) -> bool {
        rules::is_finished(self)
    }

    pub fn game_state(&self, agent: AgentId) -> GameState {
        rules::game_state(self, agent)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        // The line catalogue is a function of size
        self.size == other.size
            && self.agent_ids == other.agent_ids
            && self.grid == other.grid
            && self.last_move == other.last_move
    }
}

impl Eq for Board {}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.get(Pos::new(row as u8, col as u8)) {
                    EMPTY => '.',
                    id if id == self.agent_ids[0] => 'X',
                    _ => 'O',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
