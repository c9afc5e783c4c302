//! ReflexAgent - one-ply greedy Pacman
//!
//! Scores the successor of every legal action with an evaluation function and
//! plays one of the best. There is no lookahead past Pacman's own move, so the
//! agent reacts only to what is adjacent; ties are broken uniformly at random
//! so it does not oscillate between equally good cells forever.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use smallvec::SmallVec;

use super::evaluation::Evaluation;
use super::search::expand;
use crate::agent::player::Player;
use crate::game_repr::{Direction, GameState, PACMAN_INDEX};

pub struct ReflexAgent {
    evaluation: Evaluation,
    rng: StdRng,
}

impl ReflexAgent {
    /// Reflex agent with an OS-seeded tie-breaker
    pub fn new(evaluation: Evaluation) -> Self {
        Self {
            evaluation,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reflex agent with a reproducible tie-breaker
    pub fn with_seed(evaluation: Evaluation, seed: u64) -> Self {
        Self {
            evaluation,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    /// Legal actions whose successors share the highest evaluation
    pub fn best_actions<S: GameState>(&self, state: &S) -> SmallVec<[Direction; 5]> {
        let actions = expand(state, PACMAN_INDEX);
        let scores: SmallVec<[f64; 5]> = actions
            .iter()
            .map(|&action| {
                self.evaluation
                    .evaluate(&state.generate_successor(PACMAN_INDEX, action))
            })
            .collect();

        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        actions
            .iter()
            .zip(&scores)
            .filter(|(_, &score)| score == best)
            .map(|(&action, _)| action)
            .collect()
    }

    /// Pick uniformly among [`best_actions`](Self::best_actions)
    pub fn choose_action<S: GameState>(&mut self, state: &S) -> Direction {
        let best = self.best_actions(state);
        best.choose(&mut self.rng)
            .copied()
            .expect("expand guarantees at least one action")
    }
}

impl<S: GameState> Player<S> for ReflexAgent {
    fn get_action(&mut self, state: &S) -> Direction {
        let action = self.choose_action(state);
        log::trace!("[ReflexAgent] chose {action}");
        action
    }

    fn name(&self) -> &str {
        "ReflexAgent"
    }
}
