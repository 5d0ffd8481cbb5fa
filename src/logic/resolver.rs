//! Outcome resolution: the fixed beats relation rock > scissors > paper > rock.

use crate::models::{Outcome, Sign};

/// Resolve a turn from the player's side.
pub fn resolve(player: Sign, opponent: Sign) -> Outcome {
    if player == opponent {
        Outcome::Tie
    } else if player.beats() == opponent {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
