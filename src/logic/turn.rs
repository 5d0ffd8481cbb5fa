//! Turn controller: Idle -> Resolving -> Idle, plus reset.
//!
//! 1. `select_sign` records the player's sign and issues a ticket (rejected while busy).
//! 2. `complete_turn` with that ticket draws the opponent sign, resolves, and scores.
//! 3. `reset` clears everything and cancels a pending turn: its ticket goes stale.

use crate::logic::generator::ChoiceGenerator;
use crate::logic::resolve;
use crate::models::{MatchState, MatchView, Outcome, Sign, TurnError, TurnPhase, TurnTicket};

/// Owns one match and the generator that plays the opponent.
#[derive(Debug)]
pub struct TurnController<G> {
    state: MatchState,
    generator: G,
    next_ticket: u64,
}

impl<G: ChoiceGenerator> TurnController<G> {
    pub fn new(generator: G) -> Self {
        Self {
            state: MatchState::new(),
            generator,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn view(&self) -> MatchView {
        self.state.view()
    }

    /// Start a turn with the player's sign. While a turn is resolving the call is rejected
    /// with `TurnError::Busy` and nothing changes.
    pub fn select_sign(&mut self, sign: Sign) -> Result<TurnTicket, TurnError> {
        if self.state.is_busy() {
            log::debug!("select {} ignored: turn in progress", sign);
            return Err(TurnError::Busy);
        }
        self.next_ticket += 1;
        let ticket = TurnTicket(self.next_ticket);
        self.state.player = Some(sign);
        self.state.opponent = None;
        self.state.phase = TurnPhase::Resolving { ticket };
        Ok(ticket)
    }

    /// Finish the pending turn identified by `ticket`.
    pub fn complete_turn(&mut self, ticket: TurnTicket) -> Result<Outcome, TurnError> {
        if self.state.pending_ticket() != Some(ticket) {
            log::debug!("turn {:?} is no longer pending", ticket);
            return Err(TurnError::StaleTurn);
        }
        // Resolving is only entered after the player sign is recorded.
        let Some(player) = self.state.player else {
            return Err(TurnError::StaleTurn);
        };
        let opponent = self.generator.draw();
        let outcome = resolve(player, opponent);
        match outcome {
            Outcome::Win => self.state.player_score += 1,
            Outcome::Lose => self.state.opponent_score += 1,
            Outcome::Tie => {}
        }
        self.state.opponent = Some(opponent);
        self.state.phase = TurnPhase::Idle;
        log::debug!(
            "turn {:?}: {} vs {} -> {:?} ({}-{})",
            ticket,
            player,
            opponent,
            outcome,
            self.state.player_score,
            self.state.opponent_score
        );
        Ok(outcome)
    }

    /// Select and resolve in one step (no thinking delay).
    pub fn play(&mut self, sign: Sign) -> Result<Outcome, TurnError> {
        let ticket = self.select_sign(sign)?;
        self.complete_turn(ticket)
    }

    /// Back to a fresh match. Returns the ticket of the turn that was cancelled, if one was pending.
    pub fn reset(&mut self) -> Option<TurnTicket> {
        let cancelled = self.state.pending_ticket();
        self.state = MatchState::new();
        if let Some(ticket) = cancelled {
            log::debug!("reset cancelled pending turn {:?}", ticket);
        }
        cancelled
    }
}
