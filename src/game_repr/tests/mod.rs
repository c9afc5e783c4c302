use super::*;

mod layout_parsing;

// ==================== HELPER FUNCTIONS ====================

/// Build a starting state from layout text
pub fn state_from(text: &str) -> PacmanState {
    let layout: Layout = text.parse().expect("test layout should parse");
    PacmanState::new(&layout)
}

/// Collect legal actions into a Vec for easy comparison
pub fn actions(state: &PacmanState, agent: usize) -> Vec<Direction> {
    state.legal_actions(agent).into_vec()
}
