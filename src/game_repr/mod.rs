mod direction;
mod grid;
mod layout;
mod pacman_state;
mod state;

#[cfg(test)]
mod tests;

pub use direction::*;
pub use grid::*;
pub use layout::*;
pub use pacman_state::*;
pub use state::*;
