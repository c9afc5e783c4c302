//! SearchPlayer - Pacman driven by a depth-limited game-tree search
//!
//! This module wraps the three adversarial searches behind the [`Player`]
//! trait:
//! - **Minimax**: ghosts assumed to play optimally against Pacman
//! - **AlphaBeta**: the same decision as minimax, exploring fewer nodes
//! - **Expectimax**: ghosts assumed to move uniformly at random
//!
//! # Architecture
//!
//! The player only stores its configuration. Every call to `get_action`
//! runs a fresh search from the given state; nothing is carried between
//! turns.
//!
//! # Examples
//!
//! ```
//! use pacman_agents::agent::ai::{Evaluation, SearchAlgorithm, SearchPlayer};
//! use pacman_agents::agent::Player;
//! use pacman_agents::game_repr::{GameState, Layout, PacmanState};
//!
//! let layout = Layout::builtin("minimaxClassic").unwrap();
//! let state = PacmanState::new(&layout);
//!
//! let mut pacman = SearchPlayer::new(SearchAlgorithm::AlphaBeta, Evaluation::Score, 2);
//! let action = pacman.get_action(&state);
//! assert!(state.legal_actions(0).contains(&action));
//! ```

use super::evaluation::Evaluation;
use super::search::{SearchAlgorithm, SearchResult};
use crate::agent::player::{GameOutcome, Player};
use crate::game_repr::{Direction, GameState};

/// Pacman player backed by minimax, alpha-beta or expectimax.
pub struct SearchPlayer {
    algorithm: SearchAlgorithm,

    /// Evaluation applied at the leaves of the search tree
    evaluation: Evaluation,

    /// Plies searched per decision
    depth: u32,

    /// Display name used in logs
    name: String,

    /// Statistics of the most recent decision
    last_result: Option<SearchResult>,
}

impl SearchPlayer {
    /// Create a player named after its algorithm and depth
    pub fn new(algorithm: SearchAlgorithm, evaluation: Evaluation, depth: u32) -> Self {
        let name = format!("{} (depth {})", algorithm.name(), depth);
        Self::with_name(algorithm, evaluation, depth, name)
    }

    pub fn with_name(
        algorithm: SearchAlgorithm,
        evaluation: Evaluation,
        depth: u32,
        name: String,
    ) -> Self {
        Self {
            algorithm,
            evaluation,
            depth,
            name,
            last_result: None,
        }
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// Run the configured search without recording the result
    pub fn search<S: GameState>(&self, state: &S) -> SearchResult {
        self.algorithm.search(state, self.evaluation, self.depth)
    }
}

impl<S: GameState> Player<S> for SearchPlayer {
    fn get_action(&mut self, state: &S) -> Direction {
        let result = self.search(state);

        log::debug!(
            "[{}] {} value {:.2}, {} nodes, {} leaves, {} cutoffs, {} ms",
            self.name,
            result.action,
            result.value,
            result.stats.nodes,
            result.stats.leaf_evaluations,
            result.stats.cutoffs,
            result.stats.time_ms
        );

        let action = result.action;
        self.last_result = Some(result);
        action
    }

    fn game_ended(&mut self, outcome: &GameOutcome) {
        log::debug!(
            "[{}] game over: score {} ({})",
            self.name,
            outcome.score,
            if outcome.win { "win" } else { "loss" }
        );
        self.last_result = None;
    }

    fn name(&self) -> &str {
        &self.name
    }
}
