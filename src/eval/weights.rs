//! Weight vectors for linear evaluation
//!
//! The layout matches the feature vector: own run counts from the longest
//! length down, then opponent run counts from the longest length down.

use super::features::Features;

/// Weights of the blocking heuristic on a 5x5 board.
///
/// Blocking an opponent four (32) outranks building an own four (8).
pub const GOOD_WEIGHTS: [f64; 10] = [100.0, 8.0, 4.0, 2.0, 1.0, 32.0, 16.0, 8.0, 4.0, 2.0];

/// Weights of the greedy heuristic on a 5x5 board. Opponent lines are ignored.
pub const GREEDY_WEIGHTS: [f64; 10] = [10000.0, 1000.0, 100.0, 10.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0];

/// Linear weight vector over line features
#[derive(Debug, Clone, PartialEq)]
pub struct Weights(Vec<f64>);

impl Weights {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// All-zero weights for a board of `size`
    pub fn zeros(size: usize) -> Self {
        Self(vec![0.0; 2 * size])
    }

    pub fn good() -> Self {
        Self(GOOD_WEIGHTS.to_vec())
    }

    pub fn greedy() -> Self {
        Self(GREEDY_WEIGHTS.to_vec())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Dot product with a feature vector over their common prefix
    #[inline]
    pub fn dot(&self, features: &Features) -> f64 {
        self.0
            .iter()
            .zip(features)
            .map(|(&w, &f)| w * f as f64)
            .sum()
    }
}

impl From<Vec<f64>> for Weights {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl std::fmt::Display for Weights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, w) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{w:.2}")?;
        }
        Ok(())
    }
}
