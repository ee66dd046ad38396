//! Game rules
//!
//! Legality lives in [`Board::execute`](crate::Board::execute); this module
//! decides when a game is over and who won.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_full_line, game_state, has_full_line, is_finished};
