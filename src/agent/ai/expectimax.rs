// Expectimax search
//
// Pacman maximizes as in minimax; each ghost is modeled as choosing
// uniformly among its legal actions, so a ghost node is worth the mean of
// its children.
//
// Depth bookkeeping differs from minimax only in where the ply boundary is
// counted: here a ghost node carries the depth of the ply it belongs to and
// the last ghost hands `depth - 1` to Pacman. Both nodes are leaves at
// `depth <= 0`. The resulting tree has the same shape as minimax's.

use std::time::Instant;

use super::evaluation::Evaluation;
use super::scheduler::{Turn, TurnScheduler};
use super::search::{expand, root_actions, ScoredAction, SearchResult, SearchStats};
use crate::game_repr::{ActionList, Direction, GameState, PACMAN_INDEX};

/// Pacman's action maximizing expected value against random ghosts
pub fn expectimax_search<S: GameState>(
    state: &S,
    evaluation: Evaluation,
    depth: u32,
) -> SearchResult {
    let start = Instant::now();
    let mut search = Expectimax {
        evaluation,
        scheduler: TurnScheduler::for_state(state),
        stats: SearchStats::default(),
    };

    let best = match root_actions(state, evaluation, &mut search.stats) {
        Ok(actions) => search.expand_max(state, actions, depth as i32),
        Err(stop) => stop,
    };

    SearchResult::new(best, depth, search.stats, start)
}

struct Expectimax {
    evaluation: Evaluation,
    scheduler: TurnScheduler,
    stats: SearchStats,
}

impl Expectimax {
    fn leaf<S: GameState>(&mut self, state: &S) -> f64 {
        self.stats.leaf_evaluations += 1;
        self.evaluation.evaluate(state)
    }

    fn max_value<S: GameState>(&mut self, state: &S, depth: i32) -> f64 {
        if depth <= 0 || state.is_terminal() {
            return self.leaf(state);
        }
        let actions = expand(state, PACMAN_INDEX);
        self.expand_max(state, actions, depth).value
    }

    fn expand_max<S: GameState>(&mut self, state: &S, actions: ActionList, depth: i32) -> ScoredAction {
        self.stats.nodes += 1;

        let mut best = ScoredAction::new(f64::NEG_INFINITY, Direction::Stop);
        for action in actions {
            let successor = state.generate_successor(PACMAN_INDEX, action);
            let value = self.after(PACMAN_INDEX, &successor, depth);
            if value > best.value {
                best = ScoredAction::new(value, action);
            }
        }
        best
    }

    fn expected_value<S: GameState>(&mut self, state: &S, depth: i32, agent_index: usize) -> f64 {
        if depth <= 0 || state.is_terminal() {
            return self.leaf(state);
        }
        self.stats.nodes += 1;

        let actions = expand(state, agent_index);
        let total: f64 = actions
            .iter()
            .map(|&action| {
                let successor = state.generate_successor(agent_index, action);
                self.after(agent_index, &successor, depth)
            })
            .sum();
        total / actions.len() as f64
    }

    fn after<S: GameState>(&mut self, agent_index: usize, state: &S, depth: i32) -> f64 {
        match self.scheduler.next(agent_index) {
            Turn::Adversary(next) => self.expected_value(state, depth, next),
            Turn::Maximizer => self.max_value(state, depth - 1),
        }
    }
}
