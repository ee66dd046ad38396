//! Board evaluation: line features and linear weights

pub mod features;
pub mod weights;

pub use features::{extract, line_histogram, line_score, run_counts, Features};
pub use weights::{Weights, GOOD_WEIGHTS, GREEDY_WEIGHTS};
