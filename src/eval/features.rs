//! Line-count feature extraction
//!
//! Every catalogued line gets a score per perspective agent: the number of
//! that agent's tokens met while scanning the line, or 0 as soon as an
//! opposing token shows up anywhere in it. Empty cells are skipped. Counting
//! how many lines reach each score gives the run-count vector that all
//! linear agents evaluate.

use crate::board::{AgentId, Board, Pos, EMPTY};

/// Feature vector: own run counts by descending length, then the opponent's
/// run counts negated. Length is `2 * size`.
pub type Features = Vec<i32>;

/// Score a single line for `agent`.
///
/// A blocked line is worth nothing, so any opposing token resets the whole
/// line to 0 rather than only the part after it.
#[inline]
pub fn line_score(board: &Board, line: &[Pos], agent: AgentId) -> usize {
    let mut length = 0;
    for &pos in line {
        match board.get(pos) {
            cell if cell == agent => length += 1,
            EMPTY => {}
            _ => return 0,
        }
    }
    length
}

/// Number of lines per score, indexed by score (`0..=size`).
///
/// Bucket 0 holds blocked and empty lines.
pub fn line_histogram(board: &Board, agent: AgentId) -> Vec<u32> {
    let mut histogram = vec![0u32; board.size() + 1];
    for line in board.line_catalogue() {
        histogram[line_score(board, line, agent)] += 1;
    }
    histogram
}

/// Run counts for `agent` from length `size` down to length 1.
///
/// The length-0 bucket is dropped as is; the others are not renormalised.
pub fn run_counts(board: &Board, agent: AgentId) -> Vec<i32> {
    let histogram = line_histogram(board, agent);
    histogram[1..].iter().rev().map(|&n| n as i32).collect()
}

/// Extract the feature vector seen from `agent`.
pub fn extract(board: &Board, agent: AgentId) -> Features {
    let other = board.opponent(agent).unwrap_or(board.agent_ids()[0]);

    let mut features = run_counts(board, agent);
    features.extend(run_counts(board, other).into_iter().map(|n| -n));
    features
}
