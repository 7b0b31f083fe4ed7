use super::card::Card;
use super::suit::Suit;
use serde::Deserialize;
use serde::Serialize;

/// An unordered set of cards, one bit per card in a single u64 word.
/// Set algebra (union, suit projection, rank projection) is a handful of
/// bitwise ops, which is what makes the evaluator cheap.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// union of two disjoint sets
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0, "overlapping card sets");
        Self(lhs.0 | rhs.0)
    }
    /// the subset belonging to one suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// u64 isomorphism
/// the OR over each card's single set bit
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// Vec<Card> isomorphism (up to permutation; always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        (0u8..52)
            .filter(|i| h.0 & (1u64 << i) != 0)
            .map(Card::from)
            .collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// one-way projection onto u16 rank presence bits.
/// collapse each rank's 4 suit bits into 1, then pack the 13 nibbles.
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        (0..13).fold(0u16, |ranks, i| {
            ranks | ((((x >> (i * 4)) & 1) as u16) << i)
        })
    }
}

/// str isomorphism, whitespace separated: "As Kh Qd"
impl TryFrom<&str> for Hand {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()
            .map(Self::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self) {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn bijective_u64() {
        let hand = Hand::try_from("2c Ts Jc Js").unwrap();
        assert!(hand == Hand::from(u64::from(hand)));
    }

    #[test]
    fn sized() {
        assert!(Hand::empty().size() == 0);
        assert!(Hand::try_from("2c Ts Jc Js").unwrap().size() == 4);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert!(u16::from(hand.of(&Suit::Club)) == 0b_1000100010001);
        assert!(u16::from(hand.of(&Suit::Diamond)) == 0b_0001000100010);
        assert!(u16::from(hand.of(&Suit::Heart)) == 0b_0010001000100);
        assert!(u16::from(hand.of(&Suit::Spade)) == 0b_0100010001000);
    }

    #[test]
    fn rank_projection() {
        let hand = Hand::try_from("Ac Ad Ah As Kc").unwrap();
        assert!(u16::from(hand) == u16::from(Rank::Ace) | u16::from(Rank::King));
    }

    #[test]
    #[should_panic]
    fn overlapping_union() {
        let a = Hand::try_from("As Kh").unwrap();
        let b = Hand::try_from("Kh Qd").unwrap();
        Hand::add(a, b);
    }
}
