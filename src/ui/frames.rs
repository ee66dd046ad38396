//! Replay frames extracted from a game trace

use crate::board::{Board, Pos};
use crate::rules::find_full_line;

/// What the viewer draws for one trace entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub size: usize,
    /// Cells owned by agent 0 and agent 1
    pub cells: [Vec<Pos>; 2],
    pub last_move: Option<Pos>,
    /// Full line completed in this frame, if any
    pub winning_line: Option<Vec<Pos>>,
}

impl Frame {
    pub fn from_board(board: &Board) -> Self {
        let [first, second] = board.agent_ids();
        let winning_line = board
            .agent_ids()
            .into_iter()
            .find_map(|agent| find_full_line(board, agent))
            .map(|line| line.to_vec());

        Self {
            size: board.size(),
            cells: [board.cells_of(first), board.cells_of(second)],
            last_move: board.last_move(),
            winning_line,
        }
    }
}

/// One frame per trace entry, in trace order
pub fn frames(trace: &[Board]) -> Vec<Frame> {
    trace.iter().map(Frame::from_board).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::LinearAgent;
    use crate::game::play;

    #[test]
    fn test_frames_follow_trace() {
        let mut good = LinearAgent::good(3);
        let mut greedy = LinearAgent::greedy(4);
        let record = play(5, &mut good, &mut greedy);

        let frames = frames(&record.trace);
        assert_eq!(frames.len(), record.trace.len());
        for (frame, board) in frames.iter().zip(&record.trace) {
            assert_eq!(frame.cells[0].len(), board.cells_of(3).len());
            assert_eq!(frame.cells[1].len(), board.cells_of(4).len());
            assert_eq!(frame.last_move, board.last_move());
        }
    }

    #[test]
    fn test_winning_line_marked() {
        let mut board = Board::new(3, [1, 2]);
        for c in 0..3 {
            board.place(Pos::new(1, c), 2);
        }
        board.place(Pos::new(0, 0), 1);

        let frame = Frame::from_board(&board);
        assert_eq!(frame.cells[0], vec![Pos::new(0, 0)]);
        assert_eq!(frame.cells[1].len(), 3);
        assert_eq!(
            frame.winning_line,
            Some(vec![Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)])
        );
    }

    #[test]
    fn test_no_winning_line_midgame() {
        let mut board = Board::new(5, [1, 2]);
        board.place(Pos::new(2, 2), 1);
        assert_eq!(Frame::from_board(&board).winning_line, None);
    }
}
