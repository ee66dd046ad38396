//! Terminal-state detection
//!
//! A game ends when the board is full or when one agent owns a whole
//! catalogued line (score equal to the board size).

use crate::board::{AgentId, Board, GameState, Line};
use crate::eval::line_score;

/// Check if `agent` owns a full-length line
pub fn has_full_line(board: &Board, agent: AgentId) -> bool {
    find_full_line(board, agent).is_some()
}

/// Find the first full-length line owned by `agent`
pub fn find_full_line(board: &Board, agent: AgentId) -> Option<&Line> {
    let size = board.size();
    board
        .line_catalogue()
        .iter()
        .find(|line| line_score(board, line, agent) == size)
}

/// The agent owning a full line, agent 0 checked first
pub fn check_winner(board: &Board) -> Option<AgentId> {
    board
        .agent_ids()
        .into_iter()
        .find(|&agent| has_full_line(board, agent))
}

/// Whether no free cells remain or either agent owns a full line
pub fn is_finished(board: &Board) -> bool {
    board.free_count() == 0 || check_winner(board).is_some()
}

/// Classify the board from `agent`'s point of view
pub fn game_state(board: &Board, agent: AgentId) -> GameState {
    if is_finished(board) {
        if has_full_line(board, agent) {
            return GameState::Won;
        }
        if board.free_count() == 0 {
            return GameState::Draw;
        }
        return GameState::Lost;
    }
    if board.is_board_empty() {
        return GameState::Ready;
    }
    GameState::Ongoing
}
