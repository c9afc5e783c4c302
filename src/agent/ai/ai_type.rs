//! AI Type Registry - Centralized registry for Pacman agent implementations
//!
//! This module provides a way to enumerate and instantiate the available
//! agents. An [`AIConfig`] captures everything needed to build one: the
//! agent kind, the evaluation function and the search depth. It is resolved
//! once, when the player is created.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::evaluation::Evaluation;
use super::reflex::ReflexAgent;
use super::search::{SearchAlgorithm, MAX_SEARCH_DEPTH};
use super::search_player::SearchPlayer;
use crate::agent::player::Player;
use crate::error::ConfigError;
use crate::game_repr::GameState;

/// Search depth used when none is configured
pub const DEFAULT_DEPTH: u32 = 2;

/// Enumeration of available Pacman agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AIType {
    /// One-ply greedy agent
    Reflex,
    /// Exhaustive minimax against optimal ghosts
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    #[serde(alias = "alpha-beta")]
    AlphaBeta,
    /// Expectation over uniformly random ghosts
    Expectimax,
}

impl AIType {
    /// Get all available AI types
    pub fn all() -> &'static [AIType] {
        &[
            AIType::Reflex,
            AIType::Minimax,
            AIType::AlphaBeta,
            AIType::Expectimax,
        ]
    }

    /// Get the display name for this AI type
    pub fn display_name(&self) -> &'static str {
        match self {
            AIType::Reflex => "Reflex",
            AIType::Minimax => "Minimax",
            AIType::AlphaBeta => "AlphaBeta",
            AIType::Expectimax => "Expectimax",
        }
    }

    /// Get a short description of this AI type
    pub fn description(&self) -> &'static str {
        match self {
            AIType::Reflex => "Greedy one-step lookahead with random tie-breaking",
            AIType::Minimax => "Depth-limited minimax, ghosts play optimally",
            AIType::AlphaBeta => "Minimax with alpha-beta pruning",
            AIType::Expectimax => "Depth-limited expectimax, ghosts move at random",
        }
    }

    /// Whether the depth setting has any effect
    pub fn uses_depth(&self) -> bool {
        self.search_algorithm().is_some()
    }

    /// Evaluation used when none is configured.
    ///
    /// Search agents default to the raw score; the reflex agent needs the
    /// heuristic to see anything beyond its next pellet.
    pub fn default_evaluation(&self) -> Evaluation {
        match self {
            AIType::Reflex => Evaluation::Better,
            _ => Evaluation::Score,
        }
    }

    pub fn search_algorithm(&self) -> Option<SearchAlgorithm> {
        match self {
            AIType::Reflex => None,
            AIType::Minimax => Some(SearchAlgorithm::Minimax),
            AIType::AlphaBeta => Some(SearchAlgorithm::AlphaBeta),
            AIType::Expectimax => Some(SearchAlgorithm::Expectimax),
        }
    }
}

impl fmt::Display for AIType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AIType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace(['-', '_'], "");
        let name = normalized.strip_suffix("agent").unwrap_or(&normalized);
        match name {
            "reflex" => Ok(AIType::Reflex),
            "minimax" => Ok(AIType::Minimax),
            "alphabeta" => Ok(AIType::AlphaBeta),
            "expectimax" => Ok(AIType::Expectimax),
            _ => Err(ConfigError::UnknownAgent(s.to_string())),
        }
    }
}

/// Configuration for a single Pacman agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AIConfig {
    /// The agent to build
    pub ai_type: AIType,
    /// Leaf (or successor, for the reflex agent) evaluation
    pub evaluation: Evaluation,
    /// Plies searched per decision; ignored by the reflex agent
    pub depth: u32,
    /// Seed for agents that break ties randomly
    pub seed: Option<u64>,
}

impl AIConfig {
    /// Configuration with the type's default evaluation and depth
    pub fn new(ai_type: AIType) -> Self {
        Self {
            ai_type,
            evaluation: ai_type.default_evaluation(),
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }

    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "depth must be <= {MAX_SEARCH_DEPTH}, got {}",
                self.depth
            )));
        }
        Ok(())
    }

    /// Create a Player instance from this configuration
    pub fn create_player<S: GameState + 'static>(&self) -> Box<dyn Player<S>> {
        match self.ai_type.search_algorithm() {
            Some(algorithm) => Box::new(SearchPlayer::new(algorithm, self.evaluation, self.depth)),
            None => match self.seed {
                Some(seed) => Box::new(ReflexAgent::with_seed(self.evaluation, seed)),
                None => Box::new(ReflexAgent::new(self.evaluation)),
            },
        }
    }

    /// Get a display string for this configuration
    pub fn display_string(&self) -> String {
        if self.ai_type.uses_depth() {
            format!(
                "{} (depth {}, {})",
                self.ai_type.display_name(),
                self.depth,
                self.evaluation
            )
        } else {
            format!("{} ({})", self.ai_type.display_name(), self.evaluation)
        }
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig::new(AIType::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Layout, PacmanState};

    #[test]
    fn test_ai_type_all() {
        let all = AIType::all();
        assert_eq!(all.len(), 4);
        assert!(all.contains(&AIType::Expectimax));
    }

    #[test]
    fn test_ai_type_parse() {
        assert_eq!("AlphaBetaAgent".parse::<AIType>().unwrap(), AIType::AlphaBeta);
        assert_eq!("alpha-beta".parse::<AIType>().unwrap(), AIType::AlphaBeta);
        assert_eq!("ReflexAgent".parse::<AIType>().unwrap(), AIType::Reflex);
        assert_eq!("expectimax".parse::<AIType>().unwrap(), AIType::Expectimax);
        assert!(matches!(
            "greedy".parse::<AIType>(),
            Err(ConfigError::UnknownAgent(_))
        ));
    }

    #[test]
    fn test_default_evaluations() {
        assert_eq!(AIType::Reflex.default_evaluation(), Evaluation::Better);
        assert_eq!(AIType::Minimax.default_evaluation(), Evaluation::Score);
        assert!(!AIType::Reflex.uses_depth());
        assert!(AIType::Expectimax.uses_depth());
    }

    #[test]
    fn test_ai_config_default() {
        let config = AIConfig::default();
        assert_eq!(config.ai_type, AIType::AlphaBeta);
        assert_eq!(config.evaluation, Evaluation::Score);
        assert_eq!(config.depth, DEFAULT_DEPTH);
    }

    #[test]
    fn test_ai_config_display_string() {
        let config = AIConfig::new(AIType::Minimax).with_depth(3);
        assert_eq!(config.display_string(), "Minimax (depth 3, score)");
        let reflex = AIConfig::new(AIType::Reflex);
        assert_eq!(reflex.display_string(), "Reflex (better)");
    }

    #[test]
    fn test_validate_rejects_deep_search() {
        assert!(AIConfig::default().with_depth(MAX_SEARCH_DEPTH).validate().is_ok());
        assert!(matches!(
            AIConfig::default().with_depth(MAX_SEARCH_DEPTH + 1).validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_create_player_for_every_type() {
        let layout = Layout::builtin("testClassic").unwrap();
        let state = PacmanState::new(&layout);
        let legal = state.legal_actions(0);
        for ai_type in AIType::all() {
            let mut player = AIConfig::new(*ai_type).with_depth(1).with_seed(3).create_player::<PacmanState>();
            assert!(legal.contains(&player.get_action(&state)), "{ai_type}");
        }
    }
}
