//! Grid Pacman rules.
//!
//! [`PacmanState`] is the concrete [`GameState`] used by the binary, the
//! integration tests and the benches. Walls never change during a game, so
//! they are shared between all successors; everything else is copied.

use std::fmt;
use std::sync::Arc;

use super::{
    manhattan_distance, ActionList, Coord, Direction, GameState, GhostState, Grid, Layout,
    PACMAN_INDEX,
};

/// Moves a ghost stays edible after Pacman eats a capsule
pub const SCARED_TIME: u32 = 40;
/// Score lost on every Pacman move
pub const TIME_PENALTY: f64 = 1.0;
pub const FOOD_REWARD: f64 = 10.0;
pub const WIN_BONUS: f64 = 500.0;
pub const LOSE_PENALTY: f64 = 500.0;
pub const GHOST_EATEN_REWARD: f64 = 200.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PacmanState {
    walls: Arc<Grid<bool>>,
    food: Grid<bool>,
    capsules: Vec<Coord>,
    pacman: Coord,
    ghosts: Vec<GhostState>,
    score: f64,
    win: bool,
    lose: bool,
}

impl PacmanState {
    /// Starting state for `layout`: zero score, all ghosts at their starts
    pub fn new(layout: &Layout) -> Self {
        Self {
            walls: Arc::new(layout.walls.clone()),
            food: layout.food.clone(),
            capsules: layout.capsules.clone(),
            pacman: layout.pacman_start,
            ghosts: layout.ghost_starts.iter().copied().map(GhostState::new).collect(),
            score: 0.0,
            win: false,
            lose: false,
        }
    }

    /// Cells outside the board count as walls
    pub fn has_wall(&self, at: Coord) -> bool {
        self.walls.get(at).copied().unwrap_or(true)
    }

    pub fn has_food(&self, at: Coord) -> bool {
        self.food.is_set(at)
    }

    pub fn food(&self) -> &Grid<bool> {
        &self.food
    }

    pub fn food_count(&self) -> usize {
        self.food.count()
    }

    pub fn capsules(&self) -> &[Coord] {
        &self.capsules
    }

    pub fn num_ghosts(&self) -> usize {
        self.ghosts.len()
    }

    fn pacman_actions(&self) -> ActionList {
        Direction::ALL
            .into_iter()
            .filter(|&dir| !self.has_wall(self.pacman.step(dir)))
            .collect()
    }

    fn ghost_actions(&self, ghost: &GhostState) -> ActionList {
        let mut actions: ActionList = Direction::ALL
            .into_iter()
            .filter(|&dir| dir != Direction::Stop && !self.has_wall(ghost.position.step(dir)))
            .collect();

        let reverse = ghost.direction.reverse();
        if actions.len() > 1 {
            actions.retain(|dir| *dir != reverse);
        }
        if actions.is_empty() {
            // Boxed in on all four sides
            actions.push(Direction::Stop);
        }
        actions
    }

    fn apply_pacman_action(&mut self, action: Direction) {
        debug_assert!(
            self.pacman_actions().contains(&action),
            "illegal Pacman action {action}"
        );
        self.pacman = self.pacman.step(action);
        self.score -= TIME_PENALTY;

        if self.food.is_set(self.pacman) {
            self.food.set(self.pacman, false);
            self.score += FOOD_REWARD;
            if self.food.count() == 0 && !self.lose {
                self.score += WIN_BONUS;
                self.win = true;
            }
        }

        if let Some(i) = self.capsules.iter().position(|&c| c == self.pacman) {
            self.capsules.swap_remove(i);
            for ghost in &mut self.ghosts {
                ghost.scared_timer = SCARED_TIME;
            }
        }

        for ghost_index in 0..self.ghosts.len() {
            self.check_collision(ghost_index);
        }
    }

    fn apply_ghost_action(&mut self, ghost_index: usize, action: Direction) {
        let ghost = &mut self.ghosts[ghost_index];
        ghost.position = ghost.position.step(action);
        ghost.direction = action;
        ghost.scared_timer = ghost.scared_timer.saturating_sub(1);
        self.check_collision(ghost_index);
    }

    fn check_collision(&mut self, ghost_index: usize) {
        let ghost = &mut self.ghosts[ghost_index];
        if manhattan_distance(ghost.position, self.pacman) != 0 {
            return;
        }

        if ghost.is_scared() {
            self.score += GHOST_EATEN_REWARD;
            *ghost = GhostState::new(ghost.start);
        } else if !self.win {
            self.score -= LOSE_PENALTY;
            self.lose = true;
        }
    }
}

impl GameState for PacmanState {
    fn legal_actions(&self, agent_index: usize) -> ActionList {
        assert!(
            agent_index < self.num_agents(),
            "agent index {agent_index} out of range for {} agents",
            self.num_agents()
        );
        if self.is_terminal() {
            return ActionList::new();
        }
        if agent_index == PACMAN_INDEX {
            self.pacman_actions()
        } else {
            self.ghost_actions(&self.ghosts[agent_index - 1])
        }
    }

    fn generate_successor(&self, agent_index: usize, action: Direction) -> Self {
        assert!(
            !self.is_terminal(),
            "cannot generate a successor of a terminal state"
        );
        let mut next = self.clone();
        if agent_index == PACMAN_INDEX {
            next.apply_pacman_action(action);
        } else {
            next.apply_ghost_action(agent_index - 1, action);
        }
        next
    }

    fn num_agents(&self) -> usize {
        self.ghosts.len() + 1
    }

    fn is_win(&self) -> bool {
        self.win
    }

    fn is_lose(&self) -> bool {
        self.lose
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn pacman_position(&self) -> Coord {
        self.pacman
    }

    fn food_positions(&self) -> Vec<Coord> {
        self.food.as_list()
    }

    fn ghost_states(&self) -> &[GhostState] {
        &self.ghosts
    }
}

impl fmt::Display for PacmanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.walls.height() as i32).rev() {
            for col in 0..self.walls.width() as i32 {
                let at = Coord::new(col, row);
                let ch = if let Some(ghost) = self.ghosts.iter().find(|g| g.position == at) {
                    if ghost.is_scared() { 'g' } else { 'G' }
                } else if at == self.pacman {
                    'P'
                } else if self.has_wall(at) {
                    '%'
                } else if self.has_food(at) {
                    '.'
                } else if self.capsules.contains(&at) {
                    'o'
                } else {
                    ' '
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "Score: {}", self.score)
    }
}
