pub mod player;
pub use player::*;

pub mod random_ghost;
pub use random_ghost::*;

pub mod ai;
pub use ai::{AIConfig, AIType, Evaluation, ReflexAgent, SearchAlgorithm, SearchPlayer};
