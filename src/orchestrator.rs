//! Game loop and match coordination.
//!
//! This module contains the [`Orchestrator`], which runs a single game between
//! one [`Player`] per agent index, and [`run_games`], which plays a series of
//! games on one layout and summarises them in a [`MatchSummary`].
//!
//! # Architecture
//!
//! - The orchestrator owns the current state and the boxed players
//! - Players see the state by shared reference only; the orchestrator is the
//!   only place where the game advances
//! - Every action is checked against the legal set before it is applied
//!
//! # Example Flow
//!
//! ```text
//! [Create Players] -> [Request Action (agent i)] -> [Validate]
//!   -> [Generate Successor] -> [Check End] -> [Next Agent] -> ...
//!   -> [Notify Players] -> [GameOutcome]
//! ```

use std::time::Instant;

use crate::agent::ai::AIConfig;
use crate::agent::player::{GameOutcome, Player};
use crate::agent::random_ghost::RandomGhost;
use crate::error::GameError;
use crate::game_repr::{GameState, Layout, PacmanState};

/// Runs one game to completion.
///
/// Agents move in index order, Pacman first. The game ends when the state is
/// won or lost, or when `max_moves` agent moves have been played, in which
/// case the outcome is marked `truncated`.
pub struct Orchestrator<S: GameState> {
    state: S,

    /// One player per agent index; index 0 is Pacman
    players: Vec<Box<dyn Player<S>>>,

    /// Agent whose turn it is
    current_agent: usize,

    /// Agent moves played so far
    moves: usize,

    max_moves: usize,
}

impl<S: GameState> Orchestrator<S> {
    /// Create an orchestrator for `state`.
    ///
    /// Fails with [`GameError::AgentCountMismatch`] unless exactly one player
    /// is supplied per agent.
    pub fn new(
        state: S,
        players: Vec<Box<dyn Player<S>>>,
        max_moves: usize,
    ) -> Result<Self, GameError> {
        if players.len() != state.num_agents() {
            return Err(GameError::AgentCountMismatch {
                expected: state.num_agents(),
                found: players.len(),
            });
        }
        Ok(Self {
            state,
            players,
            current_agent: 0,
            moves: 0,
            max_moves,
        })
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn current_agent(&self) -> usize {
        self.current_agent
    }

    /// Whether the game can no longer continue
    pub fn is_over(&self) -> bool {
        self.state.is_terminal() || self.moves >= self.max_moves
    }

    /// Ask the current agent for an action and apply it.
    ///
    /// Does nothing once the game is over. An action outside the legal set
    /// is rejected and leaves the state untouched.
    pub fn step(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Ok(());
        }

        let agent = self.current_agent;
        let action = self.players[agent].get_action(&self.state);
        let legal = self.state.legal_actions(agent);
        if !legal.contains(&action) {
            return Err(GameError::IllegalAction {
                agent,
                action,
                legal: legal.to_vec(),
            });
        }

        log::trace!("[{}] agent {agent} plays {action}", self.players[agent].name());
        self.state = self.state.generate_successor(agent, action);
        self.moves += 1;
        self.current_agent = (agent + 1) % self.players.len();
        Ok(())
    }

    /// Play until the game is over and notify every player of the outcome.
    pub fn run(mut self) -> Result<GameOutcome, GameError> {
        while !self.is_over() {
            self.step()?;
        }

        let outcome = GameOutcome {
            score: self.state.score(),
            win: self.state.is_win(),
            moves: self.moves,
            truncated: !self.state.is_terminal(),
        };
        if outcome.truncated {
            log::warn!("game stopped after {} moves without a result", self.moves);
        }

        for player in &mut self.players {
            player.game_ended(&outcome);
        }
        Ok(outcome)
    }
}

/// Aggregate over a series of games
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchSummary {
    pub outcomes: Vec<GameOutcome>,
    pub elapsed_ms: u64,
}

impl MatchSummary {
    pub fn games(&self) -> usize {
        self.outcomes.len()
    }

    pub fn wins(&self) -> usize {
        self.outcomes.iter().filter(|o| o.win).count()
    }

    pub fn win_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.wins() as f64 / self.games() as f64
    }

    pub fn average_score(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.outcomes.iter().map(|o| o.score).sum::<f64>() / self.games() as f64
    }
}

/// Play `num_games` games of the configured Pacman against random ghosts.
///
/// With a `ghost_seed`, game `g` seeds ghost `i` from the seed, `g` and `i`,
/// so a series is reproducible as long as Pacman is deterministic.
pub fn run_games(
    layout: &Layout,
    config: &AIConfig,
    num_games: usize,
    max_moves: usize,
    ghost_seed: Option<u64>,
) -> Result<MatchSummary, GameError> {
    let start = Instant::now();
    let mut summary = MatchSummary::default();

    for game in 0..num_games {
        let state = PacmanState::new(layout);
        let mut players: Vec<Box<dyn Player<PacmanState>>> = vec![config.create_player()];
        for index in 1..state.num_agents() {
            let ghost = match ghost_seed {
                Some(seed) => RandomGhost::with_seed(index, derive_seed(seed, game, index)),
                None => RandomGhost::new(index),
            };
            players.push(Box::new(ghost));
        }

        let outcome = Orchestrator::new(state, players, max_moves)?.run()?;
        log::info!(
            "game {}/{}: {} with score {} after {} moves",
            game + 1,
            num_games,
            if outcome.win { "win" } else if outcome.truncated { "unfinished" } else { "loss" },
            outcome.score,
            outcome.moves
        );
        summary.outcomes.push(outcome);
    }

    summary.elapsed_ms = start.elapsed().as_millis() as u64;
    Ok(summary)
}

fn derive_seed(seed: u64, game: usize, index: usize) -> u64 {
    seed.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add((game as u64) << 8)
        .wrapping_add(index as u64)
}
