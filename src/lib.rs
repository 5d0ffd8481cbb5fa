//! Rock paper scissors web app: library with models and game logic.

pub mod logic;
pub mod models;

pub use logic::{
    resolve, ChoiceGenerator, Game, RandomGenerator, ScriptedGenerator, TurnController,
    DEFAULT_THINK_DELAY,
};
pub use models::{
    MatchState, MatchView, Outcome, Sign, SignInfo, TurnError, TurnPhase, TurnTicket,
    OPPONENT_THINKING_GLYPH, PLAYER_THINKING_GLYPH, UNKNOWN_GLYPH,
};
