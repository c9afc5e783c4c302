// Turn order shared by every search.
//
// Agents move in ascending index order: Pacman (0), then ghost 1, 2, ...
// After the last ghost the turn wraps to Pacman and one ply is complete.

use crate::game_repr::GameState;

/// Who moves after a given agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Next adversary index within the current ply
    Adversary(usize),
    /// The ply is complete; the maximizer moves next
    Maximizer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnScheduler {
    num_agents: usize,
}

impl TurnScheduler {
    pub fn new(num_agents: usize) -> Self {
        assert!(num_agents >= 1, "a game needs at least one agent");
        Self { num_agents }
    }

    pub fn for_state<S: GameState>(state: &S) -> Self {
        Self::new(state.num_agents())
    }

    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Turn following `agent_index`
    pub fn next(&self, agent_index: usize) -> Turn {
        let next = agent_index + 1;
        if next < self.num_agents {
            Turn::Adversary(next)
        } else {
            Turn::Maximizer
        }
    }
}
