use std::path::PathBuf;

use crate::board::{AgentId, Board, Move};

/// A move the board refused to execute.
///
/// Carries the offending agent, the board as it was before the attempted
/// write, and the rejected move.
#[derive(Debug, Clone, thiserror::Error)]
#[error("illegal move: agent {culprit} wants to play {}", .mv.pos)]
pub struct InvalidMove {
    pub culprit: AgentId,
    pub board: Box<Board>,
    pub mv: Move,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_invalid_move_display() {
        let err = InvalidMove {
            culprit: 4,
            board: Box::new(Board::new(5, [3, 4])),
            mv: Move::new(4, Pos::new(1, 2)),
        };
        assert_eq!(err.to_string(), "illegal move: agent 4 wants to play (1, 2)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("games must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: games must be > 0");
    }
}
