use super::card::Card;
use super::hand::Hand;
use serde::Deserialize;
use serde::Serialize;

/// A participant's two private cards, owned for the duration of one hand.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hole(Hand);

impl Hole {
    pub fn cards(&self) -> Vec<Card> {
        Vec::<Card>::from(self.0)
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b, "duplicate hole card");
        Self(Hand::from(u64::from(a) | u64::from(b)))
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
