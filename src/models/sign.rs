//! Sign and Outcome: the closed set of hand signs and the result of comparing two.

use serde::{Deserialize, Serialize};

/// One of the three playable hand signs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Rock,
    Paper,
    Scissors,
}

impl Sign {
    /// Every sign, in button order.
    pub const ALL: [Sign; 3] = [Sign::Rock, Sign::Paper, Sign::Scissors];

    /// The sign this one defeats.
    pub fn beats(self) -> Sign {
        match self {
            Sign::Rock => Sign::Scissors,
            Sign::Scissors => Sign::Paper,
            Sign::Paper => Sign::Rock,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sign::Rock => "Rock",
            Sign::Paper => "Paper",
            Sign::Scissors => "Scissors",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Sign::Rock => "🪨",
            Sign::Paper => "📄",
            Sign::Scissors => "✂️",
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a turn from the player's side.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// The same turn seen from the other side.
    pub fn inverse(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }

    /// Banner text shown after a turn resolves.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => "You Win! 🎉",
            Outcome::Lose => "Computer Wins! 🤖",
            Outcome::Tie => "It's a Tie! 🤝",
        }
    }
}

/// Serializable description of a sign for rendering the selection buttons.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SignInfo {
    pub name: Sign,
    pub label: &'static str,
    pub glyph: &'static str,
}

impl From<Sign> for SignInfo {
    fn from(sign: Sign) -> Self {
        Self {
            name: sign,
            label: sign.label(),
            glyph: sign.glyph(),
        }
    }
}
