use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use thiserror::Error;

/// The one construction input that cannot be repaired by clamping: the
/// engine can neither invent nor discard participants. Everything else
/// (blind sizes, stacks, card values) is clamped into range instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("a hand takes at least {} participants, got {}", MIN_PLAYERS, .0)]
    TooFewPlayers(usize),
    #[error("one deck serves at most {} participants, got {}", MAX_PLAYERS, .0)]
    TooManyPlayers(usize),
}
