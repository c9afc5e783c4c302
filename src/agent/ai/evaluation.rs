// Position evaluation functions
// Return a score from Pacman's perspective (higher = better for Pacman)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game_repr::{manhattan_distance, GameState};

/// Bonus for every ghost that is scared long enough to be reached
pub const SCARED_GHOST_BONUS: f64 = 200.0;

/// Proximity value used when no food is left
const NO_FOOD_PROXIMITY: f64 = 1.0;

/// Evaluation function plugged into the agents at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluation {
    /// The state's own score
    #[default]
    #[serde(alias = "scoreEvaluationFunction")]
    Score,
    /// Score plus food proximity plus capturable-ghost bonus
    #[serde(alias = "betterEvaluationFunction")]
    Better,
}

impl Evaluation {
    pub fn all() -> &'static [Evaluation] {
        &[Evaluation::Score, Evaluation::Better]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Evaluation::Score => "score",
            Evaluation::Better => "better",
        }
    }

    pub fn evaluate<S: GameState>(&self, state: &S) -> f64 {
        match self {
            Evaluation::Score => score_evaluation(state),
            Evaluation::Better => better_evaluation(state),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Evaluation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "score" | "scoreevaluationfunction" => Ok(Evaluation::Score),
            "better" | "betterevaluationfunction" => Ok(Evaluation::Better),
            _ => Err(ConfigError::UnknownEvaluation(s.to_string())),
        }
    }
}

/// The state's built-in score
pub fn score_evaluation<S: GameState>(state: &S) -> f64 {
    state.score()
}

/// Score, plus closeness to the nearest food, plus a flat bonus for each
/// ghost Pacman can reach before its scared timer runs out.
pub fn better_evaluation<S: GameState>(state: &S) -> f64 {
    state.score() + food_proximity(state) + scared_ghost_bonus(state)
}

/// `1 / d` where `d` is the Manhattan distance to the nearest food.
///
/// Exactly 1 when no food remains. A pellet under Pacman counts as distance 1.
pub fn food_proximity<S: GameState>(state: &S) -> f64 {
    let pacman = state.pacman_position();
    state
        .food_positions()
        .into_iter()
        .map(|food| manhattan_distance(pacman, food))
        .min()
        .map_or(NO_FOOD_PROXIMITY, |nearest| 1.0 / f64::from(nearest.max(1)))
}

/// [`SCARED_GHOST_BONUS`] for every ghost whose scared timer is at least its
/// Manhattan distance from Pacman.
pub fn scared_ghost_bonus<S: GameState>(state: &S) -> f64 {
    let pacman = state.pacman_position();
    let capturable = state
        .ghost_states()
        .iter()
        .filter(|ghost| ghost.scared_timer >= manhattan_distance(pacman, ghost.position))
        .count();
    capturable as f64 * SCARED_GHOST_BONUS
}
