use super::decision::Decision;
use super::spot::Spot;
use std::fmt::Debug;

/// A decision collaborator seated at the table.
///
/// The engine calls `act` synchronously whenever the seat is on action and
/// blocks until a decision comes back; no other hand state changes while a
/// decision is outstanding. Strategies (bots, consoles, sockets) implement
/// this outside the core.
pub trait Player: Debug {
    fn act(&self, spot: &Spot) -> Decision;
}
