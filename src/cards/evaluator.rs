use super::hand::Hand;
use super::kickers::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// Finds the best 5-card hand inside a set of 5 to 7 cards.
///
/// Categories are probed strongest first over the bitset representation, so
/// the first hit is the answer and nothing weaker is ever materialized. A
/// straight flush topped by the Ace is promoted to a royal flush rather
/// than searched for separately. The Ace never plays low.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        debug_assert!(hand.size() >= 5, "evaluation takes 5 to 7 cards");
        Self(hand)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_flush_run())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("at least five cards in Hand")
    }

    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::default(),
            n => match ranking {
                Ranking::Flush(hi) => self.keep_highest(n, self.suited_ranks() & !u16::from(hi)),
                ranking => self.keep_highest(n, u16::from(self.0) & ranking.mask()),
            },
        }
    }

    //

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1, None).map(Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(Ranking::OnePair) // unreachable
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .or(Some(Ranking::OnePair(hi))) // this makes OnePair unreachable
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|trips| {
            self.find_rank_of_n_oak(2, Some(trips))
                .map(|pair| Ranking::FullHouse(trips, pair))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| Ranking::Flush(Rank::from(u16::from(self.0.of(&suit)))))
    }
    fn find_flush_run(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|suit| self.find_rank_of_straight(self.0.of(&suit)))
            .map(|rank| match rank {
                Rank::Ace => Ranking::RoyalFlush,
                rank => Ranking::StraightFlush(rank),
            })
    }

    //

    /// the rank topping five consecutive ranks, if any.
    /// four ANDs of successive shifts leave a bit only where a run starts.
    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        let mut bits = u16::from(hand);
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        match bits {
            0 => None,
            bits => Some(Rank::from(bits)),
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all().into_iter().find(|s| self.0.of(s).size() >= 5)
    }
    /// the highest rank held at least n times, skipping one claimed rank
    fn find_rank_of_n_oak(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let skip = skip.map(u64::from).unwrap_or(0);
        let mut nibble = u64::from(Rank::Ace) << 4;
        while nibble > 0 {
            nibble >>= 4;
            if nibble & skip != 0 {
                continue;
            }
            if (u64::from(self.0) & nibble).count_ones() as usize >= n {
                return Some(Rank::from((nibble.trailing_zeros() / 4) as u8));
            }
        }
        None
    }
    fn suited_ranks(&self) -> u16 {
        self.find_suit_of_flush()
            .map(|suit| u16::from(self.0.of(&suit)))
            .expect("flush kickers imply a flush suit")
    }
    /// drop low bits until n candidates remain
    fn keep_highest(&self, n: usize, mut ranks: u16) -> Kickers {
        while n < ranks.count_ones() as usize {
            ranks &= ranks - 1;
        }
        Kickers::from(ranks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::strength::Strength;

    fn judge(s: &str) -> (Ranking, Kickers) {
        let eval = Evaluator::from(Hand::try_from(s).unwrap());
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        (ranking, kickers)
    }

    #[rustfmt::skip]
    #[test]
    fn high_card() {
        let (ranking, kickers) = judge("As Kh Qd Jc 9s");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[rustfmt::skip]
    #[test]
    fn one_pair() {
        let (ranking, kickers) = judge("As Ah Kd Qc Js");
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = judge("As Ah Kd Kc Qs");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let (ranking, kickers) = judge("As Ah Ad Kc Qs");
        assert_eq!(ranking, Ranking::ThreeOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        let (ranking, kickers) = judge("Ts Jh Qd Kc As");
        assert_eq!(ranking, Ranking::Straight(Rank::Ace));
        assert_eq!(kickers, Kickers::default());
    }

    #[rustfmt::skip]
    #[test]
    fn flush() {
        let (ranking, kickers) = judge("As Ks Qs Js 9s");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[rustfmt::skip]
    #[test]
    fn flush_kickers_stay_suited() {
        let (ranking, kickers) = judge("2s 5s 7s 9s Js Ah Kd");
        assert_eq!(ranking, Ranking::Flush(Rank::Jack));
        assert_eq!(kickers, Kickers::from(vec![Rank::Nine, Rank::Seven, Rank::Five, Rank::Two]));
    }

    #[test]
    fn full_house() {
        let (ranking, kickers) = judge("2s 2h 2d 3c 3s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
        assert_eq!(kickers, Kickers::default());
    }

    #[test]
    fn four_oak() {
        let (ranking, kickers) = judge("As Ah Ad Ac Ks");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let (ranking, kickers) = judge("9s Ts Js Qs Ks");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::King));
        assert_eq!(kickers, Kickers::default());
    }

    #[test]
    fn royal_flush() {
        let (ranking, kickers) = judge("Ts Js Qs Ks As");
        assert_eq!(ranking, Ranking::RoyalFlush);
        assert_eq!(kickers, Kickers::default());
    }

    #[test]
    fn royal_flush_on_a_paired_board() {
        let (ranking, _) = judge("Ah Kh Qh Jh Th 2c 2d");
        assert_eq!(ranking, Ranking::RoyalFlush);
    }

    #[test]
    fn ace_never_plays_low() {
        let (ranking, _) = judge("As 2h 3d 4c 5s");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        let (ranking, _) = judge("As 2s 3s 4s 5s");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
    }

    #[test]
    fn seven_card_hand() {
        let (ranking, kickers) = judge("As Ah Kd Kc Qs Jh 9d");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn flush_over_straight() {
        let (ranking, _) = judge("4h 6h 7h 8h 9h Ts");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn full_house_over_flush() {
        let (ranking, _) = judge("Kh Ah Ad As Ks Qs Js 9s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_oak_over_full_house() {
        let (ranking, kickers) = judge("As Ah Ad Ac Ks Kh Qd");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn three_pair_keeps_best_two() {
        let (ranking, kickers) = judge("As Ah Kd Kc Qs Qh Jd");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn two_trips_make_a_full_house() {
        let (ranking, _) = judge("As Ah Ad Kc Ks Kh Qd");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn quads_beat_a_simultaneous_full_house() {
        let board = "2c 2h 5s 5d Kc";
        let quads = Strength::from(Hand::try_from(&*format!("2s 2d {}", board)).unwrap());
        let house = Strength::from(Hand::try_from(&*format!("Ks Kd {}", board)).unwrap());
        assert_eq!(quads.ranking(), Ranking::FourOAK(Rank::Two));
        assert_eq!(house.ranking(), Ranking::FullHouse(Rank::King, Rank::Five));
        assert!(quads > house);
    }

    #[test]
    fn deterministic() {
        let hand = Hand::try_from("As Ah Kd Kc Qs Jh 9d").unwrap();
        assert_eq!(Strength::from(hand), Strength::from(hand));
    }

    #[test]
    fn category_dominance_ignores_kickers() {
        let pair = Strength::from(Hand::try_from("As Ah Kd Qc Js").unwrap());
        let two_pair = Strength::from(Hand::try_from("3s 3h 2d 2c 4s").unwrap());
        assert!(two_pair > pair);
    }
}
