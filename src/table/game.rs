use super::betting::Betting;
use super::decision::Decision;
use super::error::TableError;
use super::event::Event;
use super::event::Reveal;
use super::observer::Observer;
use super::payout::Payout;
use super::player::Player;
use super::position::SeatName;
use super::seat::Seat;
use super::seat::State;
use super::showdown::Showdown;
use super::spot::Spot;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use crate::cards::strength::Strength;
use crate::Chips;
use crate::Position;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use colored::Colorize;
use std::rc::Rc;

/// One hand of no-limit hold'em, from shuffle to settlement.
///
/// Construction deals two cards to every seat from a fresh shuffled deck;
/// [`Game::play`] then walks the streets, putting one seat on action at a
/// time, and returns a [`Payout`] per seat once the pot is empty. The
/// instance is single-use and consumed by `play`.
///
/// Turn order lives in `live`, the not-yet-folded seats in action order,
/// with `cursor` marking the next actor; folding removes the seat at the
/// cursor without disturbing the order of everyone else. Chip movement is
/// append-only: every chip a seat puts in grows both its own hand total and
/// the shared pot, and nothing comes back out until settlement.
pub struct Game {
    sblind: Chips,
    bblind: Chips,
    deck: Deck,
    street: Street,
    board: Board,
    seats: Vec<Seat>,
    live: Vec<Position>,
    cursor: usize,
    pot: Chips,
    betting: Betting,
    shoved: bool,
    sealed: bool,
    finished: bool,
    observers: Vec<Box<dyn Observer>>,
}

impl Game {
    /// Seats the given participants in order and deals them in. Blind sizes
    /// clamp into range (big blind at least 1, small blind between 1 and
    /// the big blind); the participant count is the one input that can only
    /// be rejected.
    pub fn new(
        entries: Vec<(Chips, Rc<dyn Player>)>,
        sblind: Chips,
        bblind: Chips,
    ) -> Result<Self, TableError> {
        let n = entries.len();
        if n < MIN_PLAYERS {
            return Err(TableError::TooFewPlayers(n));
        }
        if n > MAX_PLAYERS {
            return Err(TableError::TooManyPlayers(n));
        }
        let bblind = bblind.max(1);
        let sblind = sblind.max(1).min(bblind);
        let mut deck = Deck::shuffled();
        let seats = entries
            .into_iter()
            .enumerate()
            .map(|(position, (stack, actor))| {
                let hole = deck.hole();
                Seat::new(position, stack, hole, actor)
            })
            .collect::<Vec<Seat>>();
        Ok(Self {
            sblind,
            bblind,
            deck,
            street: Street::Pref,
            board: Board::empty(),
            live: (0..n).collect(),
            seats,
            cursor: 0,
            pot: 0,
            betting: Betting::default(),
            shoved: false,
            sealed: false,
            finished: false,
            observers: Vec::new(),
        })
    }

    /// Registers an observer; notification order is registration order.
    pub fn attach(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Plays the hand to completion and returns one payout per seat.
    pub fn play(mut self) -> Vec<Payout> {
        self.notify(Event::HandStarted);
        while !self.finished {
            match self.street {
                Street::Pref => self.preflop(),
                Street::Flop => self.flop(),
                Street::Turn => self.turn(),
                Street::Rive => self.river(),
                Street::Show => self.showdown(),
            }
        }
        self.notify(Event::HandEnded);
        self.results()
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    //

    fn preflop(&mut self) {
        self.notify(Event::NewStreet(Street::Pref));
        self.post_blinds();
        if self.seats.len() == 2 {
            // the button acts first preflop, last everywhere else
            self.live.swap(0, 1);
        }
        self.round();
        for seat in self.seats.iter_mut() {
            seat.clear_blind();
        }
        self.street = Street::Flop;
    }
    fn flop(&mut self) {
        self.reveal(3);
        self.notify(Event::NewStreet(Street::Flop));
        self.round();
        self.street = Street::Turn;
    }
    fn turn(&mut self) {
        self.reveal(1);
        self.notify(Event::NewStreet(Street::Turn));
        self.round();
        self.street = Street::Rive;
    }
    fn river(&mut self) {
        self.reveal(1);
        self.notify(Event::NewStreet(Street::Rive));
        self.round();
        self.street = Street::Show;
    }
    fn showdown(&mut self) {
        self.notify(Event::NewStreet(Street::Show));
        self.notify(Event::Revealed(self.reveals()));
        let mut payouts = Showdown::from(self.ledger()).settle();
        payouts.sort_by_key(|p| std::cmp::Reverse(p.strength));
        log::debug!("settling\n{}", self);
        for payout in payouts.iter().filter(|p| p.reward > 0) {
            self.award(payout.position, payout.reward);
        }
        self.finished = true;
    }

    //

    /// One round of betting, resumed from wherever the blinds (preflop) or
    /// the round reset (later streets) left the cursor.
    fn round(&mut self) {
        self.sealed = false;
        // no bet yet: one pass, over the moment anyone opens
        while self.betting.bet == 0 && !self.shoved && !self.sealed {
            match self.live.get(self.cursor).copied() {
                Some(position) => {
                    self.cursor += 1;
                    self.act(position);
                }
                None => self.seal(),
            }
            self.survey();
        }
        // bet outstanding: cycle until action returns to the aggressor,
        // give or take the big blind's option
        while !self.shoved && !self.sealed {
            if self.cursor >= self.live.len() {
                self.cursor = 0;
            }
            let position = self.live[self.cursor];
            self.cursor += 1;
            if Some(position) == self.betting.aggressor {
                if !self.seats[position].blind() {
                    self.seal();
                    continue;
                }
                // the big blind gets one more look; whoever sits next
                // becomes the seat the round closes on
                let here = self.cursor - 1;
                let next = self.live[(here + 1) % self.live.len()];
                self.betting.aggressor = Some(next);
                self.act(position);
            } else {
                self.act(position);
            }
            self.survey();
        }
    }

    /// Puts a seat on action, unless it has no chips left to act with.
    fn act(&mut self, position: Position) {
        if self.seats[position].stack() == 0 {
            return;
        }
        let spot = self.spot(position);
        let actor = self.seats[position].actor();
        let decision = actor.act(&spot);
        log::trace!("{} decides {}", position, decision);
        match decision {
            Decision::Fold => self.fold(position),
            Decision::CheckOrCall => self.check_or_call(position),
            Decision::BetTo(target) => self.bet_to(position, target),
        }
    }

    fn fold(&mut self, position: Position) {
        let here = self
            .live
            .iter()
            .position(|&p| p == position)
            .expect("folding seat is live");
        self.live.remove(here);
        if here < self.cursor {
            self.cursor -= 1;
        }
        self.seats[position].fold();
        self.notify(Event::Folded(position));
    }

    fn check_or_call(&mut self, position: Position) {
        let stake = self.seats[position].stake();
        let stack = self.seats[position].stack();
        let amount = match stack + stake < self.betting.bet {
            true => stack,
            false => (self.betting.bet - stake).max(0),
        };
        self.contribute(position, amount);
        match stake >= self.betting.bet {
            true => self.notify(Event::Checked(position)),
            false => self.notify(Event::Called(position, self.betting.bet)),
        }
        self.seats[position].set_stake(stake + amount);
    }

    fn bet_to(&mut self, position: Position, target: Chips) {
        let target = self.clamp(position, target);
        if target > self.betting.bet {
            let stake = self.seats[position].stake();
            self.seats[position].clear_blind();
            self.contribute(position, target - stake);
            if self.betting.bet != 0 {
                self.betting.raise = target - self.betting.bet;
            }
            let opening = self.betting.raise == 0;
            self.betting.bet = target;
            self.betting.raises += 1;
            self.betting.aggressor = Some(position);
            self.seats[position].set_stake(target);
            match opening {
                true => self.notify(Event::Bet(position, target)),
                false => self.notify(Event::Raised(position, target)),
            }
        }
    }

    /// Forces a requested bet-to target into legal range: targets that
    /// cannot get past the current bet become calls, under-raises grow to
    /// the minimum, and nothing exceeds the seat's all-in.
    fn clamp(&mut self, position: Position, mut target: Chips) -> Chips {
        let all_in = self.seats[position].stack() + self.seats[position].stake();
        if self.betting.bet > 0 {
            if target <= self.betting.bet || all_in <= self.betting.bet {
                self.check_or_call(position);
                return all_in.min(self.betting.bet);
            }
            let least = match self.betting.raise {
                0 => 2 * self.betting.bet,
                raise => self.betting.bet + raise,
            };
            if target < least {
                target = least.min(all_in);
            }
        } else if all_in >= self.bblind && target < self.bblind {
            target = self.bblind;
        }
        target.min(all_in)
    }

    /// Moves chips from a seat into the pot; the seat's hand total and the
    /// pot grow in lockstep, so no chip is created or destroyed.
    fn contribute(&mut self, position: Position, amount: Chips) {
        self.seats[position].spend(amount);
        self.pot += amount;
    }

    /// Pays out of the pot; the hand is over the instant the pot is empty.
    fn award(&mut self, position: Position, amount: Chips) {
        if amount > 0 {
            self.notify(Event::Won(position, amount));
        }
        self.pot -= amount;
        self.seats[position].collect(amount);
        if self.pot == 0 {
            self.seal();
            self.finished = true;
        }
    }

    /// Checks the two short-circuits after every action: a lone survivor
    /// takes the pot at once, and a table with no possible further action
    /// stops betting for the rest of the hand.
    fn survey(&mut self) {
        if self.live.len() == 1 {
            let winner = self.live[0];
            let pot = self.pot;
            self.award(winner, pot);
        }
        self.shoved = self.no_more_action();
    }

    /// No further legal action: at most one live seat still holds chips,
    /// and nobody with chips is short of the current bet.
    fn no_more_action(&self) -> bool {
        let holding = self
            .live
            .iter()
            .map(|&p| &self.seats[p])
            .filter(|s| s.stack() > 0)
            .count();
        let pending = self
            .live
            .iter()
            .map(|&p| &self.seats[p])
            .any(|s| s.stack() > 0 && s.stake() < self.betting.bet);
        holding <= 1 && !pending
    }

    /// Closes the betting round and resets per-street state.
    fn seal(&mut self) {
        self.betting.reset();
        for seat in self.seats.iter_mut() {
            seat.clear_stake();
        }
        self.cursor = 0;
        self.sealed = true;
    }

    /// The small blind posts silently; the big blind travels the normal
    /// bet path and opens the preflop betting. Action then starts past the
    /// blinds.
    fn post_blinds(&mut self) {
        let sb = self.live[0];
        let bb = self.live[1];
        let amount = self.sblind.min(self.seats[sb].stack());
        self.contribute(sb, amount);
        self.seats[sb].set_stake(amount);
        self.bet_to(bb, self.bblind);
        self.seats[bb].post_blind();
        self.cursor = match self.live.len() > 2 {
            true => 2,
            false => 1,
        };
    }

    fn reveal(&mut self, count: usize) {
        for _ in 0..count {
            let card = self.deck.draw();
            self.board.push(card);
        }
    }

    //

    fn spot(&self, position: Position) -> Spot {
        let seat = &self.seats[position];
        Spot {
            position,
            street: self.street,
            hole: seat.hole(),
            board: self.board.clone(),
            pot: self.pot,
            stack: seat.stack(),
            stake: seat.stake(),
            to_call: (self.betting.bet - seat.stake()).max(0).min(seat.stack()),
            min_raise: self.min_raise(position),
            raises: self.betting.raises,
            bblind: self.bblind,
        }
    }

    /// smallest meaningful bet-to target for a seat, all-in capped
    fn min_raise(&self, position: Position) -> Chips {
        let seat = &self.seats[position];
        let all_in = seat.stack() + seat.stake();
        let least = match self.betting.bet {
            0 => self.bblind,
            bet => match self.betting.raise {
                0 => 2 * bet,
                raise => bet + raise,
            },
        };
        least.min(all_in)
    }

    fn evaluate(&self, position: Position) -> Strength {
        Strength::from(Hand::add(
            Hand::from(self.seats[position].hole()),
            Hand::from(&self.board),
        ))
    }

    fn reveals(&self) -> Vec<Reveal> {
        self.live
            .iter()
            .map(|&position| Reveal {
                position,
                hole: self.seats[position].hole(),
                strength: self.evaluate(position),
            })
            .collect()
    }

    /// Settlement input: one entry per seat, strengths for everyone still
    /// in at showdown.
    fn ledger(&self) -> Vec<Payout> {
        self.seats
            .iter()
            .map(|seat| Payout {
                position: seat.position(),
                staked: seat.spent(),
                reward: 0,
                status: seat.status(),
                strength: match seat.status() {
                    State::Folded => None,
                    _ => Some(self.evaluate(seat.position())),
                },
            })
            .collect()
    }

    /// Final accounting, valid once the hand has finished. Strengths are
    /// reported only when hands actually went to showdown; a hand that
    /// ended on folds reveals nothing.
    fn results(&self) -> Vec<Payout> {
        let contested = self.street == Street::Show && self.live.len() > 1;
        self.seats
            .iter()
            .map(|seat| Payout {
                position: seat.position(),
                staked: seat.spent(),
                reward: seat.won(),
                status: seat.status(),
                strength: match (contested, seat.status()) {
                    (true, State::Folded) => None,
                    (true, _) => Some(self.evaluate(seat.position())),
                    (false, _) => None,
                },
            })
            .collect()
    }

    fn notify(&mut self, event: Event) {
        log::trace!("{}", event);
        for observer in self.observers.iter_mut() {
            observer.notify(&event);
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let n = self.seats.len();
        for seat in self.seats.iter() {
            write!(f, "{:<4}{} ", SeatName::new(seat.position(), n), seat)?;
        }
        write!(
            f,
            "{}",
            format!(" @ {:>6} {} {}", self.pot, self.board, self.street).bright_green()
        )
    }
}
