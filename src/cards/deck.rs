use super::card::Card;
use super::hole::Hole;
use rand::seq::SliceRandom;

/// A deck of 52 distinct cards, shuffled exactly once at creation and
/// consumed strictly front to back. Never reshuffled mid-hand, so a dealt
/// card cannot reappear.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    drawn: usize,
}

impl Deck {
    pub fn shuffled() -> Self {
        let mut cards = (0u8..52).map(Card::from).collect::<Vec<Card>>();
        cards.shuffle(&mut rand::rng());
        Self { cards, drawn: 0 }
    }

    /// take the next card off the top
    pub fn draw(&mut self) -> Card {
        assert!(self.drawn < self.cards.len(), "deck exhausted");
        let card = self.cards[self.drawn];
        self.drawn += 1;
        card
    }

    /// take the next two cards off the top
    pub fn hole(&mut self) -> Hole {
        Hole::from((self.draw(), self.draw()))
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deals_every_card_once() {
        let mut deck = Deck::shuffled();
        let cards = (0..52).map(|_| deck.draw()).collect::<HashSet<Card>>();
        assert!(cards.len() == 52);
        assert!(deck.remaining() == 0);
    }

    #[test]
    fn hole_consumes_two() {
        let mut deck = Deck::shuffled();
        let hole = deck.hole();
        assert!(deck.remaining() == 50);
        assert!(hole.cards().len() == 2);
    }

    #[test]
    #[should_panic]
    fn exhaustion_panics() {
        let mut deck = Deck::shuffled();
        for _ in 0..53 {
            deck.draw();
        }
    }
}
