use super::rank::Rank;
use serde::Deserialize;
use serde::Serialize;

/// A hand's category plus the ranks of its deciding cards.
///
/// The derived ordering is the whole comparison rule: variants are declared
/// weakest to strongest, and within a category the payload ranks break ties
/// in priority order. Kickers, where a category has them, are carried
/// separately by [`Strength`](super::strength::Strength).
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kicker
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, suited
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kicker
    StraightFlush(Rank),   // 0 kickers
    RoyalFlush,            // 0 kickers
}

impl Ranking {
    /// category index, 0 = high card .. 9 = royal flush
    pub fn category(&self) -> u8 {
        match self {
            Ranking::HighCard(_) => 0,
            Ranking::OnePair(_) => 1,
            Ranking::TwoPair(..) => 2,
            Ranking::ThreeOAK(_) => 3,
            Ranking::Straight(_) => 4,
            Ranking::Flush(_) => 5,
            Ranking::FullHouse(..) => 6,
            Ranking::FourOAK(_) => 7,
            Ranking::StraightFlush(_) => 8,
            Ranking::RoyalFlush => 9,
        }
    }

    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) => 4,
            Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::TwoPair(..) | Ranking::FourOAK(_) => 1,
            _ => 0,
        }
    }

    /// rank bits still available as kickers, i.e. not spent on the category.
    /// flush kickers are suit-bound and resolved by the evaluator instead.
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::FourOAK(hi) => !u16::from(hi),
            Ranking::Flush(..)
            | Ranking::Straight(..)
            | Ranking::FullHouse(..)
            | Ranking::StraightFlush(..)
            | Ranking::RoyalFlush => unreachable!("category has no free kickers"),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
            Ranking::RoyalFlush => write!(f, "RoyalFlush      "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order() {
        assert!(Ranking::HighCard(Rank::Ace) < Ranking::OnePair(Rank::Two));
        assert!(Ranking::OnePair(Rank::Ace) < Ranking::TwoPair(Rank::Three, Rank::Two));
        assert!(Ranking::TwoPair(Rank::Ace, Rank::King) < Ranking::ThreeOAK(Rank::Two));
        assert!(Ranking::ThreeOAK(Rank::Ace) < Ranking::Straight(Rank::Six));
        assert!(Ranking::Straight(Rank::Ace) < Ranking::Flush(Rank::Seven));
        assert!(Ranking::Flush(Rank::Ace) < Ranking::FullHouse(Rank::Two, Rank::Three));
        assert!(Ranking::FullHouse(Rank::Ace, Rank::King) < Ranking::FourOAK(Rank::Two));
        assert!(Ranking::FourOAK(Rank::Ace) < Ranking::StraightFlush(Rank::Six));
        assert!(Ranking::StraightFlush(Rank::King) < Ranking::RoyalFlush);
    }

    #[test]
    fn payload_breaks_ties() {
        assert!(Ranking::TwoPair(Rank::Ace, Rank::Three) > Ranking::TwoPair(Rank::King, Rank::Queen));
        assert!(Ranking::TwoPair(Rank::Ace, Rank::Three) > Ranking::TwoPair(Rank::Ace, Rank::Two));
        assert!(Ranking::FullHouse(Rank::Three, Rank::Two) > Ranking::FullHouse(Rank::Two, Rank::Ace));
    }

    #[test]
    fn categories_span_zero_to_nine() {
        assert!(Ranking::HighCard(Rank::Two).category() == 0);
        assert!(Ranking::RoyalFlush.category() == 9);
    }
}
