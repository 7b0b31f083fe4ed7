use super::seat::State;
use crate::cards::strength::Strength;
use crate::Chips;
use crate::Position;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;

/// One seat's final accounting for the hand. Strength is present only for
/// seats that reached showdown without folding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    pub position: Position,
    pub staked: Chips,
    pub reward: Chips,
    pub status: State,
    pub strength: Option<Strength>,
}

impl Payout {
    /// net result of the hand
    pub fn pnl(&self) -> Chips {
        self.reward - self.staked
    }
}

impl Display for Payout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let reveal = match self.strength {
            Some(strength) => format!("{}", strength),
            None => String::new(),
        };
        if self.reward > 0 {
            write!(
                f,
                "{:<3}{:<6}{}",
                self.position,
                format!("+{}", self.reward).green(),
                reveal
            )
        } else {
            write!(f, "{:<3}      {}", self.position, reveal)
        }
    }
}
