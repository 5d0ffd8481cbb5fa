//! Game logic: opponent choice, outcome resolution, turn sequencing.

mod deferred;
mod generator;
mod resolver;
mod turn;

pub use deferred::{Game, DEFAULT_THINK_DELAY};
pub use generator::{ChoiceGenerator, RandomGenerator, ScriptedGenerator};
pub use resolver::resolve;
pub use turn::TurnController;
