// AI Agents - Depth-limited adversarial search for Pacman
//
// This module implements the Pacman decision makers:
// - Minimax: ghosts modeled as optimal adversaries
// - Alpha-beta: minimax with pruning, same decisions with fewer nodes
// - Expectimax: ghosts modeled as uniformly random movers
// - Reflex: one-ply greedy agent
//
// Every search is synchronous, single-threaded and stateless between turns.
// A fresh successor state is generated for every branch, so no search ever
// mutates a state it was handed.

mod ai_type;
mod alpha_beta;
mod evaluation;
mod expectimax;
mod minimax;
mod reflex;
mod scheduler;
mod search;
mod search_player;

#[cfg(test)]
mod tests;

pub use ai_type::{AIConfig, AIType, DEFAULT_DEPTH};
pub use alpha_beta::alpha_beta_search;
pub use evaluation::{
    better_evaluation, food_proximity, scared_ghost_bonus, score_evaluation, Evaluation,
    SCARED_GHOST_BONUS,
};
pub use expectimax::expectimax_search;
pub use minimax::minimax_search;
pub use reflex::ReflexAgent;
pub use scheduler::{Turn, TurnScheduler};
pub use search::{ScoredAction, SearchAlgorithm, SearchResult, SearchStats, MAX_SEARCH_DEPTH};
pub use search_player::SearchPlayer;
