// Minimax search
//
// Pacman (agent 0) maximizes, every ghost minimizes, ghosts move in index
// order and one ply ends after the last ghost. Depth counts the plies still
// to be searched and is decremented once per ply, when Pacman expands.
//
// Terminal tests differ by role: a Pacman node is a leaf at `depth <= 0`, a
// ghost node only at `depth < 0`. Because Pacman decrements before handing
// the state to the ghosts, the ghost test only fires below a depth-0 root,
// which is what makes a depth-0 search evaluate the root's successors.

use std::time::Instant;

use super::evaluation::Evaluation;
use super::scheduler::{Turn, TurnScheduler};
use super::search::{expand, root_actions, ScoredAction, SearchResult, SearchStats};
use crate::game_repr::{ActionList, Direction, GameState, PACMAN_INDEX};

/// Pacman's minimax action for `depth` plies, ties going to the first
/// action in legal-action order.
pub fn minimax_search<S: GameState>(state: &S, evaluation: Evaluation, depth: u32) -> SearchResult {
    let start = Instant::now();
    let mut search = Minimax {
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

struct Minimax {
    evaluation: Evaluation,
    scheduler: TurnScheduler,
    stats: SearchStats,
}

impl Minimax {
    fn leaf<S: GameState>(&mut self, state: &S) -> ScoredAction {
        self.stats.leaf_evaluations += 1;
        ScoredAction::leaf(self.evaluation.evaluate(state))
    }

    fn max_value<S: GameState>(&mut self, state: &S, depth: i32) -> ScoredAction {
        if depth <= 0 || state.is_terminal() {
            return self.leaf(state);
        }
        let actions = expand(state, PACMAN_INDEX);
        self.expand_max(state, actions, depth)
    }

    fn expand_max<S: GameState>(&mut self, state: &S, actions: ActionList, depth: i32) -> ScoredAction {
        self.stats.nodes += 1;
        let depth = depth - 1;

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

    fn min_value<S: GameState>(&mut self, state: &S, depth: i32, agent_index: usize) -> ScoredAction {
        if depth < 0 || state.is_terminal() {
            return self.leaf(state);
        }
        self.stats.nodes += 1;

        let mut worst = ScoredAction::new(f64::INFINITY, Direction::Stop);
        for action in expand(state, agent_index) {
            let successor = state.generate_successor(agent_index, action);
            let value = self.after(agent_index, &successor, depth);
            if value < worst.value {
                worst = ScoredAction::new(value, action);
            }
        }
        worst
    }

    /// Value of `state` once `agent_index` has moved into it
    fn after<S: GameState>(&mut self, agent_index: usize, state: &S, depth: i32) -> f64 {
        match self.scheduler.next(agent_index) {
            Turn::Adversary(next) => self.min_value(state, depth, next).value,
            Turn::Maximizer => self.max_value(state, depth).value,
        }
    }
}
