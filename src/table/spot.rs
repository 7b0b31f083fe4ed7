use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::Chips;
use crate::Position;
use serde::Deserialize;
use serde::Serialize;

/// A snapshot of the decision point handed to the participant on action:
/// everything they are entitled to see, and nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spot {
    pub position: Position,
    pub street: Street,
    pub hole: Hole,
    pub board: Board,
    pub pot: Chips,
    /// chips left behind the line
    pub stack: Chips,
    /// chips already in front this street
    pub stake: Chips,
    /// owed to continue, already capped at the stack
    pub to_call: Chips,
    /// smallest legal bet-to target, already capped at all-in
    pub min_raise: Chips,
    /// bets and raises this street so far
    pub raises: usize,
    pub bblind: Chips,
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} on {} holding {} | pot {} stack {} to call {}",
            self.position, self.street, self.hole, self.pot, self.stack, self.to_call
        )
    }
}
