//! Player trait for game agents.
//!
//! A player is anything that can be asked for an action on its own turn:
//! the search agents and the reflex agent for Pacman, the random ghost for
//! the adversaries. The orchestrator owns one boxed player per agent index
//! and calls [`Player::get_action`] whenever that index is to move.
//!
//! The trait focuses on behavior rather than construction. Search players are
//! built from an [`AIConfig`](crate::agent::ai::AIConfig), ghosts from their
//! agent index and an optional seed.
//!
//! # Synchronous Design
//!
//! `get_action()` blocks until the action is chosen. Search is bounded by the
//! configured depth, so there is no need for cancellation.

use crate::game_repr::{Direction, GameState};

/// Final result of a finished game, passed to [`Player::game_ended`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOutcome {
    /// Final score
    pub score: f64,
    /// Pacman cleared the board
    pub win: bool,
    /// Number of agent moves played
    pub moves: usize,
    /// The game hit the move limit before reaching a win or loss
    pub truncated: bool,
}

/// Trait for entities that can choose actions in a game.
///
/// # Required Methods
///
/// Only `get_action()` must be implemented.
///
/// ## `get_action()`
/// - Called only when it is this player's turn and the state is not terminal
/// - Must return one of `state.legal_actions(index)` for the player's index;
///   the orchestrator rejects anything else
///
/// ## `game_ended()`
/// - Default: does nothing
///
/// ## `name()`
/// - Default: returns "Player"
pub trait Player<S: GameState> {
    /// Choose the next action for this player's agent index.
    fn get_action(&mut self, state: &S) -> Direction;

    /// Notification that the game has ended.
    fn game_ended(&mut self, _outcome: &GameOutcome) {}

    /// Display name used in logs.
    fn name(&self) -> &str {
        "Player"
    }
}
