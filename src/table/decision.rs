use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

/// A participant's answer when put on action.
///
/// `BetTo` is an absolute target: the total the participant wants to have
/// contributed this street, not an increment. The engine clamps illegal
/// targets into range (or downgrades them to a call) rather than asking
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Fold,
    CheckOrCall,
    BetTo(Chips),
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::CheckOrCall => write!(f, "check/call"),
            Self::BetTo(amount) => write!(f, "bet to {}", amount),
        }
    }
}
