use serde::Deserialize;
use serde::Serialize;

/// The five phases of a hand. Streets advance strictly forward and are
/// never revisited.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Street {
    Pref,
    Flop,
    Turn,
    Rive,
    Show,
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
            Self::Show => write!(f, "showdown"),
        }
    }
}
