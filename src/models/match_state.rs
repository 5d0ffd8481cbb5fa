//! MatchState, TurnPhase and the read-only MatchView handed to the page.

use crate::logic::resolve;
use crate::models::sign::{Outcome, Sign};
use serde::Serialize;

/// Errors returned when a turn event arrives at the wrong time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnError {
    /// A turn is already resolving; selections are closed until it finishes.
    Busy,
    /// The ticket does not belong to the pending turn (already resolved, or cancelled by a reset).
    StaleTurn,
}

impl std::fmt::Display for TurnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnError::Busy => write!(f, "A turn is already in progress"),
            TurnError::StaleTurn => write!(f, "No pending turn for this ticket"),
        }
    }
}

impl std::error::Error for TurnError {}

/// Token identifying one accepted selection. Only the pending turn's ticket can resolve it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct TurnTicket(pub(crate) u64);

/// Where the match is in the turn cycle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TurnPhase {
    /// Accepting a selection.
    #[default]
    Idle,
    /// Player has picked; opponent sign and outcome not yet committed.
    Resolving { ticket: TurnTicket },
}

/// Transient state of one match. Mutated only through the turn controller.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MatchState {
    /// Last sign the player picked (None before the first turn).
    pub player: Option<Sign>,
    /// Opponent sign of the last resolved turn (cleared when a new turn starts).
    pub opponent: Option<Sign>,
    pub player_score: u32,
    pub opponent_score: u32,
    pub phase: TurnPhase,
}

impl MatchState {
    /// Fresh match: no signs, zero scores, idle.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, TurnPhase::Resolving { .. })
    }

    /// Ticket of the turn currently resolving, if any.
    pub fn pending_ticket(&self) -> Option<TurnTicket> {
        match self.phase {
            TurnPhase::Resolving { ticket } => Some(ticket),
            TurnPhase::Idle => None,
        }
    }

    /// Outcome of the last resolved turn, derived from the two recorded signs.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_busy() {
            return None;
        }
        match (self.player, self.opponent) {
            (Some(player), Some(opponent)) => Some(resolve(player, opponent)),
            _ => None,
        }
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> MatchView {
        MatchView::from_state(self)
    }
}

/// What the page shows while the player is waiting on the computer.
pub const PLAYER_THINKING_GLYPH: &str = "🤔";
pub const OPPONENT_THINKING_GLYPH: &str = "🤖";
/// Shown for a side that has no sign yet.
pub const UNKNOWN_GLYPH: &str = "❓";

/// Read-only view of a match for the presentation layer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchView {
    pub player: Option<Sign>,
    pub opponent: Option<Sign>,
    pub player_score: u32,
    pub opponent_score: u32,
    pub outcome: Option<Outcome>,
    /// Banner text for the outcome, None until a turn has resolved.
    pub result: Option<&'static str>,
    pub busy: bool,
    pub player_glyph: &'static str,
    pub opponent_glyph: &'static str,
}

impl MatchView {
    pub fn from_state(state: &MatchState) -> Self {
        let busy = state.is_busy();
        let outcome = state.outcome();
        let glyph = |sign: Option<Sign>, thinking: &'static str| {
            if busy {
                thinking
            } else {
                sign.map(Sign::glyph).unwrap_or(UNKNOWN_GLYPH)
            }
        };
        Self {
            player: state.player,
            opponent: state.opponent,
            player_score: state.player_score,
            opponent_score: state.opponent_score,
            outcome,
            result: outcome.map(Outcome::message),
            busy,
            player_glyph: glyph(state.player, PLAYER_THINKING_GLYPH),
            opponent_glyph: glyph(state.opponent, OPPONENT_THINKING_GLYPH),
        }
    }
}
