use crate::Chips;
use crate::Position;

/// Per-street betting state, reset whenever a round closes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Betting {
    /// street-total bet that must be matched to stay in
    pub bet: Chips,
    /// size of the last raise, 0 until someone raises over a bet
    pub raise: Chips,
    /// bets and raises this street, forced big blind included
    pub raises: usize,
    /// who set the current bet; the betting round closes on them
    pub aggressor: Option<Position>,
}

impl Betting {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
