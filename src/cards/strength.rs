use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kickers::Kickers;
use super::ranking::Ranking;
use serde::Deserialize;
use serde::Serialize;

/// A hand's complete, totally-ordered value: category and deciding ranks
/// first, kickers after. Equal strengths are exact ties and split pots.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> Kickers {
        self.kickers
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let ranking = evaluator.find_ranking();
        let kickers = evaluator.find_kickers(ranking);
        Self::from((ranking, kickers))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kickers): (Ranking, Kickers)) -> Self {
        Self { ranking, kickers }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.ranking, self.kickers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn category_first_kickers_second() {
        let weak = Strength::from((
            Ranking::OnePair(Rank::Ace),
            Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]),
        ));
        let strong = Strength::from((Ranking::TwoPair(Rank::Three, Rank::Two), Kickers::default()));
        assert!(strong > weak);
    }

    #[test]
    fn kickers_break_exact_category_ties() {
        let king = Strength::from((
            Ranking::OnePair(Rank::Ace),
            Kickers::from(vec![Rank::King, Rank::Five, Rank::Four]),
        ));
        let queen = Strength::from((
            Ranking::OnePair(Rank::Ace),
            Kickers::from(vec![Rank::Queen, Rank::Jack, Rank::Ten]),
        ));
        assert!(king > queen);
        assert!(king == king.clone());
    }
}
