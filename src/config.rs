//! Match configuration
//!
//! A TOML file selects the board size, the two agents and the number of
//! games per competition or training round. Missing keys take defaults.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, LinearAgent, RandomAgent};
use crate::board::{AgentId, DEFAULT_SIZE, EMPTY};
use crate::error::ConfigError;

/// Strategy of a configured agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Good,
    Greedy,
    Learning,
}

/// One side of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub kind: AgentKind,
    pub id: AgentId,
    /// Learning rate, learning agents only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<f64>,
    /// RNG seed, random agents only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl AgentSpec {
    const DEFAULT_ETA: f64 = 0.1;

    pub fn new(kind: AgentKind, id: AgentId) -> Self {
        AgentSpec {
            kind,
            id,
            eta: None,
            seed: None,
        }
    }

    /// Instantiate the agent for a board of `size`
    pub fn build(&self, size: usize) -> Box<dyn Agent> {
        match self.kind {
            AgentKind::Random => match self.seed {
                Some(seed) => Box::new(RandomAgent::with_seed(self.id, seed)),
                None => Box::new(RandomAgent::new(self.id)),
            },
            AgentKind::Good => Box::new(LinearAgent::good(self.id)),
            AgentKind::Greedy => Box::new(LinearAgent::greedy(self.id)),
            AgentKind::Learning => Box::new(LinearAgent::learning_for_size(
                self.id,
                self.eta.unwrap_or(Self::DEFAULT_ETA),
                size,
            )),
        }
    }
}

/// Replay viewer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Time each frame stays on screen
    pub frame_interval_ms: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        ReplayConfig {
            frame_interval_ms: 1000,
        }
    }
}

/// Match configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub size: usize,
    /// Games per `compete` run or training round
    pub games: u32,
    pub max_rounds: u32,
    /// Exactly two agents; the first is agent 0
    pub agents: Vec<AgentSpec>,
    pub replay: ReplayConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            size: DEFAULT_SIZE,
            games: 100,
            max_rounds: 50,
            agents: vec![
                AgentSpec::new(AgentKind::Good, 3),
                AgentSpec::new(AgentKind::Greedy, 4),
            ],
            replay: ReplayConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate a TOML document.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > u8::MAX as usize {
            return Err(ConfigError::Validation(format!(
                "size must be in 1..=255, got {}",
                self.size
            )));
        }
        if self.games == 0 {
            return Err(ConfigError::Validation("games must be > 0".into()));
        }
        if self.agents.len() != 2 {
            return Err(ConfigError::Validation(format!(
                "exactly two agents required, got {}",
                self.agents.len()
            )));
        }

        let mut seen = HashSet::new();
        for spec in &self.agents {
            if spec.id == EMPTY {
                return Err(ConfigError::Validation("agent id 0 is reserved".into()));
            }
            if !seen.insert(spec.id) {
                return Err(ConfigError::Validation(format!(
                    "duplicate agent id {}",
                    spec.id
                )));
            }
            match spec.kind {
                AgentKind::Good | AgentKind::Greedy if self.size != DEFAULT_SIZE => {
                    return Err(ConfigError::Validation(format!(
                        "{:?} weights are defined for size {}, got {}",
                        spec.kind, DEFAULT_SIZE, self.size
                    )));
                }
                AgentKind::Learning if spec.eta.is_some_and(|eta| eta <= 0.0) => {
                    return Err(ConfigError::Validation(format!(
                        "eta of agent {} must be > 0",
                        spec.id
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Instantiate both agents.
    pub fn build_agents(&self) -> Result<(Box<dyn Agent>, Box<dyn Agent>), ConfigError> {
        self.validate()?;
        Ok((self.agents[0].build(self.size), self.agents[1].build(self.size)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
size = 5
games = 20
max_rounds = 5

[[agents]]
kind = "learning"
id = 1
eta = 0.25

[[agents]]
kind = "random"
id = 2
seed = 42

[replay]
frame_interval_ms = 250
"#;

    #[test]
    fn test_parse_sample() {
        let config = MatchConfig::parse(SAMPLE).unwrap();
        assert_eq!(config.games, 20);
        assert_eq!(config.max_rounds, 5);
        assert_eq!(config.agents[0].kind, AgentKind::Learning);
        assert_eq!(config.agents[0].eta, Some(0.25));
        assert_eq!(config.agents[1].seed, Some(42));
        assert_eq!(config.replay.frame_interval_ms, 250);

        let (a, b) = config.build_agents().unwrap();
        assert_eq!(a.name(), "LearningAgent 1 (eta: 0.25): 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00");
        assert_eq!(b.id(), 2);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = MatchConfig::parse("").unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = MatchConfig::parse(SAMPLE).unwrap();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(MatchConfig::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut config = MatchConfig::default();
        config.agents[1].id = 3;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_zero_id() {
        let mut config = MatchConfig::default();
        config.agents[0].id = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_fixed_weights_on_other_sizes() {
        let mut config = MatchConfig::default();
        config.size = 7;
        assert!(config.validate().is_err());

        config.agents = vec![
            AgentSpec::new(AgentKind::Random, 1),
            AgentSpec::new(AgentKind::Learning, 2),
        ];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = MatchConfig::default();
        config.games = 0;
        assert!(config.validate().is_err());

        let mut config = MatchConfig::default();
        config.agents.pop();
        assert!(config.validate().is_err());

        let mut config = MatchConfig::default();
        config.agents[0] = AgentSpec {
            eta: Some(-1.0),
            ..AgentSpec::new(AgentKind::Learning, 3)
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = MatchConfig::parse("size = \"five\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = MatchConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
