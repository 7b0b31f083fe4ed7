use super::payout::Payout;
use super::seat::State;
use crate::cards::strength::Strength;
use crate::Chips;
use rand::seq::SliceRandom;

/// Distributes a finished hand's pot from total contributions and revealed
/// strengths.
///
/// Tie groups are walked strongest first. Inside a group, chips move by
/// contribution layer, smallest contribution first: a layer is every
/// participant's chips up to that level, minus layers already consumed, and
/// it splits evenly among the group members whose own contribution reaches
/// past the consumed level. A short all-in therefore collects exactly the
/// slice it is eligible for, a deeper layer a strong group cannot reach
/// falls through to the next group (which is how an uncalled bet finds its
/// way home), and no one ever recovers more from an opponent than that
/// opponent put in. Indivisible remainders go one chip at a time to members
/// drawn at random without replacement.
pub struct Showdown {
    payouts: Vec<Payout>,
    best: Option<Strength>,
    floor: Chips,
    level: Chips,
}

impl From<Vec<Payout>> for Showdown {
    fn from(payouts: Vec<Payout>) -> Self {
        Self {
            payouts,
            best: None,
            floor: 0,
            level: 0,
        }
    }
}

impl Showdown {
    /// Distributes every distributable chip and returns final payouts.
    pub fn settle(mut self) -> Vec<Payout> {
        'groups: while let Some(best) = self.strongest() {
            self.best = Some(best);
            'layers: while let Some(level) = self.ceiling() {
                self.level = level;
                self.distribute();
                if self.is_settled() {
                    break 'groups;
                } else {
                    continue 'layers;
                }
            }
        }
        self.payouts
    }

    /// the strongest revealed hand not yet processed
    fn strongest(&self) -> Option<Strength> {
        self.payouts
            .iter()
            .filter(|p| p.status != State::Folded)
            .filter_map(|p| p.strength)
            .filter(|s| match self.best {
                None => true,
                Some(best) => *s < best,
            })
            .max()
    }

    /// the next contribution level the current group can collect up to
    fn ceiling(&mut self) -> Option<Chips> {
        self.floor = self.level;
        self.payouts
            .iter()
            .filter(|p| p.status != State::Folded)
            .filter(|p| p.strength == self.best)
            .filter(|p| p.staked > self.floor)
            .map(|p| p.staked)
            .min()
    }

    /// every participant's chips between the consumed level and the ceiling
    fn winnings(&self) -> Chips {
        self.payouts
            .iter()
            .map(|p| p.staked.min(self.level))
            .map(|s| (s - self.floor).max(0))
            .sum()
    }

    fn distribute(&mut self) {
        let chips = self.winnings();
        let best = self.best;
        let floor = self.floor;
        let mut winners = self
            .payouts
            .iter_mut()
            .filter(|p| p.status != State::Folded)
            .filter(|p| p.strength == best)
            .filter(|p| p.staked > floor)
            .collect::<Vec<&mut Payout>>();
        let share = chips / winners.len() as Chips;
        let bonus = chips % winners.len() as Chips;
        for winner in winners.iter_mut() {
            winner.reward += share;
        }
        let mut lottery = (0..winners.len()).collect::<Vec<usize>>();
        lottery.shuffle(&mut rand::rng());
        for i in lottery.into_iter().take(bonus as usize) {
            winners[i].reward += 1;
        }
    }

    fn is_settled(&self) -> bool {
        let staked = self.payouts.iter().map(|p| p.staked).sum::<Chips>();
        let reward = self.payouts.iter().map(|p| p.reward).sum::<Chips>();
        staked == reward
    }
}
