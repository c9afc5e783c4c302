//! Ghost that picks uniformly among its legal actions.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::agent::player::Player;
use crate::game_repr::{Direction, GameState};

/// An adversary that selects uniformly at random from legal actions.
///
/// This is the policy the expectimax agent assumes for every ghost.
pub struct RandomGhost {
    index: usize,
    rng: StdRng,
    name: String,
}

impl RandomGhost {
    /// Ghost for agent `index` (must be >= 1), seeded from the OS
    pub fn new(index: usize) -> Self {
        Self::with_rng(index, StdRng::from_entropy())
    }

    /// Reproducible ghost for agent `index`
    pub fn with_seed(index: usize, seed: u64) -> Self {
        Self::with_rng(index, StdRng::seed_from_u64(seed))
    }

    fn with_rng(index: usize, rng: StdRng) -> Self {
        assert!(index >= 1, "agent 0 is Pacman, ghosts start at index 1");
        Self {
            index,
            rng,
            name: format!("RandomGhost {index}"),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl<S: GameState> Player<S> for RandomGhost {
    fn get_action(&mut self, state: &S) -> Direction {
        let actions = state.legal_actions(self.index);
        *actions
            .choose(&mut self.rng)
            .expect("ghost asked to move with no legal actions")
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Layout, PacmanState};

    #[test]
    fn test_random_ghost_picks_legal_actions() {
        let layout = Layout::builtin("minimaxClassic").unwrap();
        let state = PacmanState::new(&layout);
        let mut ghost = RandomGhost::with_seed(2, 7);
        let legal = state.legal_actions(2);
        for _ in 0..50 {
            let action = Player::<PacmanState>::get_action(&mut ghost, &state);
            assert!(legal.contains(&action));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let layout = Layout::builtin("smallClassic").unwrap();
        let state = PacmanState::new(&layout);
        let mut a = RandomGhost::with_seed(1, 99);
        let mut b = RandomGhost::with_seed(1, 99);
        for _ in 0..20 {
            assert_eq!(
                Player::<PacmanState>::get_action(&mut a, &state),
                Player::<PacmanState>::get_action(&mut b, &state)
            );
        }
    }

    #[test]
    #[should_panic(expected = "no legal actions")]
    fn test_ghost_on_finished_game_panics() {
        let layout: Layout = "%%%%%\n%PG.%\n%%%%%".parse().unwrap();
        let lost = PacmanState::new(&layout).generate_successor(0, Direction::East);
        assert!(lost.is_lose());
        let mut ghost = RandomGhost::with_seed(1, 0);
        Player::<PacmanState>::get_action(&mut ghost, &lost);
    }

    #[test]
    #[should_panic(expected = "ghosts start at index 1")]
    fn test_pacman_index_rejected() {
        let _ = RandomGhost::with_seed(0, 0);
    }
}
