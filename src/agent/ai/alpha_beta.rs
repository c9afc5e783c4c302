// Minimax with alpha-beta pruning
//
// Same roles, turn order and terminal tests as plain minimax. Two bounds are
// threaded down the recursion by value:
// - alpha: the best value Pacman can already guarantee on the current path
// - beta: the best value the ghosts can already guarantee on the current path
//
// A ghost node returns as soon as its running minimum falls below alpha, a
// Pacman node as soon as its running maximum exceeds beta. Both comparisons
// are strict, so the root value (and the root action) always match minimax.

use std::time::Instant;

use super::evaluation::Evaluation;
use super::scheduler::{Turn, TurnScheduler};
use super::search::{expand, root_actions, ScoredAction, SearchResult, SearchStats};
use crate::game_repr::{ActionList, Direction, GameState, PACMAN_INDEX};

/// Pacman's minimax action for `depth` plies, computed with pruning
pub fn alpha_beta_search<S: GameState>(
    state: &S,
    evaluation: Evaluation,
    depth: u32,
) -> SearchResult {
    let start = Instant::now();
    let mut search = AlphaBeta {
        evaluation,
        scheduler: TurnScheduler::for_state(state),
        stats: SearchStats::default(),
    };

    let best = match root_actions(state, evaluation, &mut search.stats) {
        Ok(actions) => search.expand_max(
            state,
            actions,
            depth as i32,
            f64::NEG_INFINITY,
            f64::INFINITY,
        ),
        Err(stop) => stop,
    };

    SearchResult::new(best, depth, search.stats, start)
}

struct AlphaBeta {
    evaluation: Evaluation,
    scheduler: TurnScheduler,
    stats: SearchStats,
}

impl AlphaBeta {
    fn leaf<S: GameState>(&mut self, state: &S) -> ScoredAction {
        self.stats.leaf_evaluations += 1;
        ScoredAction::leaf(self.evaluation.evaluate(state))
    }

    fn max_value<S: GameState>(&mut self, state: &S, depth: i32, alpha: f64, beta: f64) -> ScoredAction {
        if depth <= 0 || state.is_terminal() {
            return self.leaf(state);
        }
        let actions = expand(state, PACMAN_INDEX);
        self.expand_max(state, actions, depth, alpha, beta)
    }

    fn expand_max<S: GameState>(
        &mut self,
        state: &S,
        actions: ActionList,
        depth: i32,
        mut alpha: f64,
        beta: f64,
    ) -> ScoredAction {
        self.stats.nodes += 1;
        let depth = depth - 1;

        let mut best = ScoredAction::new(f64::NEG_INFINITY, Direction::Stop);
        for action in actions {
            let successor = state.generate_successor(PACMAN_INDEX, action);
            let value = self.after(PACMAN_INDEX, &successor, depth, alpha, beta);
            if value > best.value {
                best = ScoredAction::new(value, action);
            }
            if best.value > beta {
                self.stats.cutoffs += 1;
                return best;
            }
            alpha = alpha.max(best.value);
        }
        best
    }

    fn min_value<S: GameState>(
        &mut self,
        state: &S,
        depth: i32,
        agent_index: usize,
        alpha: f64,
        mut beta: f64,
    ) -> ScoredAction {
        if depth < 0 || state.is_terminal() {
            return self.leaf(state);
        }
        self.stats.nodes += 1;

        let mut worst = ScoredAction::new(f64::INFINITY, Direction::Stop);
        for action in expand(state, agent_index) {
            let successor = state.generate_successor(agent_index, action);
            let value = self.after(agent_index, &successor, depth, alpha, beta);
            if value < worst.value {
                worst = ScoredAction::new(value, action);
            }
            if worst.value < alpha {
                self.stats.cutoffs += 1;
                return worst;
            }
            beta = beta.min(worst.value);
        }
        worst
    }

    fn after<S: GameState>(
        &mut self,
        agent_index: usize,
        state: &S,
        depth: i32,
        alpha: f64,
        beta: f64,
    ) -> f64 {
        match self.scheduler.next(agent_index) {
            Turn::Adversary(next) => self.min_value(state, depth, next, alpha, beta).value,
            Turn::Maximizer => self.max_value(state, depth, alpha, beta).value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::minimax::minimax_search;
    use crate::game_repr::{Layout, PacmanState};

    #[test]
    fn test_alpha_beta_matches_minimax_on_minimax_classic() {
        let layout = Layout::builtin("minimaxClassic").unwrap();
        let state = PacmanState::new(&layout);
        for depth in 1..=3 {
            let plain = minimax_search(&state, Evaluation::Score, depth);
            let pruned = alpha_beta_search(&state, Evaluation::Score, depth);
            assert_eq!(plain.value, pruned.value, "depth {depth}");
            assert_eq!(plain.action, pruned.action, "depth {depth}");
            assert!(pruned.stats.leaf_evaluations <= plain.stats.leaf_evaluations);
        }
    }

    #[test]
    fn test_root_never_prunes() {
        let layout = Layout::builtin("testClassic").unwrap();
        let state = PacmanState::new(&layout);
        let result = alpha_beta_search(&state, Evaluation::Better, 2);
        assert!(state.legal_actions(PACMAN_INDEX).contains(&result.action));
    }
}
