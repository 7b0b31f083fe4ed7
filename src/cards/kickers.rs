use super::rank::Rank;
use serde::Deserialize;
use serde::Serialize;

/// The ranks breaking a tie after a category's deciding cards are equal.
///
/// Stored as rank presence bits. Two kicker sets of the same category hold
/// the same number of ranks, so comparing the raw bits is exactly the
/// highest-rank-first elementwise comparison.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism, best rank first
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        (0u8..13)
            .rev()
            .filter(|i| k.0 & (1u16 << i) != 0)
            .map(Rank::from)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_count_compares_by_highest() {
        let a = Kickers::from(vec![Rank::Ace, Rank::Three]);
        let b = Kickers::from(vec![Rank::King, Rank::Queen]);
        assert!(a > b);
    }

    #[test]
    fn best_rank_first() {
        let kickers = Kickers::from(vec![Rank::Three, Rank::King, Rank::Nine]);
        let ranks = Vec::<Rank>::from(kickers);
        assert!(ranks == vec![Rank::King, Rank::Nine, Rank::Three]);
    }
}
