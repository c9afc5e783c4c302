//! The game-state interface consumed by the agents.
//!
//! Search code only ever sees a state through [`GameState`]. States are
//! immutable values: every transition returns a fresh successor and leaves
//! the receiver untouched, so each branch of a search owns its own state.

use smallvec::SmallVec;

use super::{Coord, Direction};

/// Legal actions for one agent. Five directions fit inline.
pub type ActionList = SmallVec<[Direction; 5]>;

/// Agent index of the maximizing agent (Pacman)
pub const PACMAN_INDEX: usize = 0;

/// Snapshot of one adversary as seen by evaluation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostState {
    pub position: Coord,
    /// Direction of the last move, used to forbid reversing
    pub direction: Direction,
    /// Remaining moves during which the ghost can be eaten
    pub scared_timer: u32,
    pub start: Coord,
}

impl GhostState {
    pub fn new(start: Coord) -> Self {
        Self {
            position: start,
            direction: Direction::Stop,
            scared_timer: 0,
            start,
        }
    }

    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

/// Read-only view of a game position plus successor generation.
///
/// Implementations must be deterministic: the same state, agent and action
/// always produce an equal successor.
pub trait GameState: Clone {
    /// Legal actions for `agent_index`, empty when the state is terminal.
    /// The order returned is the tie-break order used by the searches.
    fn legal_actions(&self, agent_index: usize) -> ActionList;

    /// State after `agent_index` plays `action`
    fn generate_successor(&self, agent_index: usize, action: Direction) -> Self;

    /// Total number of agents including Pacman; at least 1
    fn num_agents(&self) -> usize;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    fn score(&self) -> f64;

    fn pacman_position(&self) -> Coord;

    /// Coordinates of every remaining food pellet
    fn food_positions(&self) -> Vec<Coord>;

    fn ghost_states(&self) -> &[GhostState];

    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}
