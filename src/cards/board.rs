use super::card::Card;
use super::hand::Hand;
use serde::Deserialize;
use serde::Serialize;

/// The shared community cards, revealed progressively (3, then 1, then 1).
/// Once a card lands on the board it never moves.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cards: Vec::with_capacity(5),
        }
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub(crate) fn push(&mut self, card: Card) {
        assert!(self.cards.len() < 5, "board is full");
        self.cards.push(card);
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.cards.clone())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
