//! Data structures for the game: signs, outcomes, match state.

mod match_state;
mod sign;

pub use match_state::{
    MatchState, MatchView, TurnError, TurnPhase, TurnTicket, OPPONENT_THINKING_GLYPH,
    PLAYER_THINKING_GLYPH, UNKNOWN_GLYPH,
};
pub use sign::{Outcome, Sign, SignInfo};
