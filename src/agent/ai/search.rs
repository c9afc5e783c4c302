// Search entry points and shared result types
//
// Every search is a depth-first recursion over fresh successor states. The
// root is always a maximizer node that expands Pacman's legal actions, even
// at depth 0, so a search never returns without considering every action.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use super::alpha_beta::alpha_beta_search;
use super::evaluation::Evaluation;
use super::expectimax::expectimax_search;
use super::minimax::minimax_search;
use crate::error::ConfigError;
use crate::game_repr::{ActionList, Direction, GameState, PACMAN_INDEX};

/// Deepest search accepted by configuration.
///
/// Recursion depth is `depth * num_agents` frames.
pub const MAX_SEARCH_DEPTH: u32 = 12;

/// A value paired with the action that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredAction {
    pub value: f64,
    pub action: Direction,
}

impl ScoredAction {
    pub fn new(value: f64, action: Direction) -> Self {
        Self { value, action }
    }

    /// Value of a node that was not expanded
    pub fn leaf(value: f64) -> Self {
        Self::new(value, Direction::Stop)
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior nodes whose children were generated
    pub nodes: u64,
    /// Calls into the evaluation function
    pub leaf_evaluations: u64,
    /// Nodes that stopped early because of an alpha or beta bound
    pub cutoffs: u64,
    pub time_ms: u64,
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub action: Direction,
    pub value: f64,
    pub depth: u32,
    pub stats: SearchStats,
}

impl SearchResult {
    pub(crate) fn new(best: ScoredAction, depth: u32, mut stats: SearchStats, start: Instant) -> Self {
        stats.time_ms = start.elapsed().as_millis() as u64;
        Self {
            action: best.action,
            value: best.value,
            depth,
            stats,
        }
    }
}

/// Depth-limited search algorithms for Pacman
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    /// Ghosts minimize Pacman's value
    Minimax,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
    /// Ghosts move uniformly at random
    Expectimax,
}

impl SearchAlgorithm {
    pub fn all() -> &'static [SearchAlgorithm] {
        &[
            SearchAlgorithm::Minimax,
            SearchAlgorithm::AlphaBeta,
            SearchAlgorithm::Expectimax,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Minimax => "Minimax",
            SearchAlgorithm::AlphaBeta => "AlphaBeta",
            SearchAlgorithm::Expectimax => "Expectimax",
        }
    }

    /// Search `depth` plies from `state` and return Pacman's best action
    pub fn search<S: GameState>(
        &self,
        state: &S,
        evaluation: Evaluation,
        depth: u32,
    ) -> SearchResult {
        match self {
            SearchAlgorithm::Minimax => minimax_search(state, evaluation, depth),
            SearchAlgorithm::AlphaBeta => alpha_beta_search(state, evaluation, depth),
            SearchAlgorithm::Expectimax => expectimax_search(state, evaluation, depth),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "minimax" => Ok(SearchAlgorithm::Minimax),
            "alphabeta" => Ok(SearchAlgorithm::AlphaBeta),
            "expectimax" => Ok(SearchAlgorithm::Expectimax),
            _ => Err(ConfigError::UnknownAgent(s.to_string())),
        }
    }
}

/// Legal actions of an interior node.
///
/// Panics when a state that is neither won nor lost offers no action: the
/// game implementation broke its contract and any value computed here would
/// be meaningless.
pub(crate) fn expand<S: GameState>(state: &S, agent_index: usize) -> ActionList {
    let actions = state.legal_actions(agent_index);
    assert!(
        !actions.is_empty(),
        "agent {agent_index} has no legal actions in a non-terminal state"
    );
    actions
}

/// Root actions, or the `Stop` result when Pacman has nothing to play
pub(crate) fn root_actions<S: GameState>(
    state: &S,
    evaluation: Evaluation,
    stats: &mut SearchStats,
) -> Result<ActionList, ScoredAction> {
    let actions = state.legal_actions(PACMAN_INDEX);
    if actions.is_empty() {
        log::warn!("search called on a state without legal Pacman actions, returning Stop");
        stats.leaf_evaluations += 1;
        return Err(ScoredAction::leaf(evaluation.evaluate(state)));
    }
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names_parse() {
        for algorithm in SearchAlgorithm::all() {
            assert_eq!(algorithm.name().parse::<SearchAlgorithm>().unwrap(), *algorithm);
        }
        assert_eq!(
            "alpha-beta".parse::<SearchAlgorithm>().unwrap(),
            SearchAlgorithm::AlphaBeta
        );
        assert!("negamax".parse::<SearchAlgorithm>().is_err());
    }

    #[test]
    fn test_leaf_defaults_to_stop() {
        let leaf = ScoredAction::leaf(3.5);
        assert_eq!(leaf.action, Direction::Stop);
        assert_eq!(leaf.value, 3.5);
    }
}
