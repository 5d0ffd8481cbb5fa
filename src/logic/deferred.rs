//! Game: a turn controller driven by a real thinking delay.
//!
//! Selecting a sign spawns a one-shot tokio task that sleeps for the delay and then completes the
//! turn. The task only holds a weak reference to the controller and its handle is aborted on reset
//! and on drop, so a torn-down game is never mutated after the fact.

use crate::logic::generator::ChoiceGenerator;
use crate::logic::turn::TurnController;
use crate::models::{MatchState, MatchView, Sign, TurnError, TurnTicket};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Thinking delay used when none is configured.
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(1000);

/// One match with its pending resolution task.
pub struct Game<G> {
    controller: Arc<Mutex<TurnController<G>>>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

// Poisoning is ignored: match state is plain data.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<G: ChoiceGenerator + Send + 'static> Game<G> {
    pub fn new(generator: G, delay: Duration) -> Self {
        Self {
            controller: Arc::new(Mutex::new(TurnController::new(generator))),
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start a turn. The outcome lands after the delay; with a zero delay it is resolved before
    /// returning. Must be called inside a tokio runtime when the delay is non-zero.
    pub fn select_sign(&self, sign: Sign) -> Result<TurnTicket, TurnError> {
        let ticket = {
            let mut controller = lock(&self.controller);
            let ticket = controller.select_sign(sign)?;
            if self.delay.is_zero() {
                controller.complete_turn(ticket)?;
                return Ok(ticket);
            }
            ticket
        };

        let weak = Arc::downgrade(&self.controller);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(controller) = weak.upgrade() else {
                return;
            };
            let mut controller = lock(&controller);
            if let Err(e) = controller.complete_turn(ticket) {
                log::debug!("deferred resolution of {:?} skipped: {}", ticket, e);
            }
        });
        if let Some(previous) = lock(&self.pending).replace(handle) {
            previous.abort();
        }
        Ok(ticket)
    }

    /// Reset the match, cancelling a turn that is still resolving.
    pub fn reset(&self) {
        lock(&self.controller).reset();
        if let Some(handle) = lock(&self.pending).take() {
            handle.abort();
        }
    }

    pub fn view(&self) -> MatchView {
        lock(&self.controller).view()
    }

    pub fn state(&self) -> MatchState {
        lock(&self.controller).state().clone()
    }
}

impl<G> Drop for Game<G> {
    fn drop(&mut self) {
        let pending = self
            .pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}
