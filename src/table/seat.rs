use super::player::Player;
use crate::cards::hole::Hole;
use crate::Chips;
use crate::Position;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::rc::Rc;

/// Where a seat stands in the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Playing,
    Shoved,
    Folded,
}

/// One participant's chips and cards for the duration of a hand, plus the
/// collaborator who makes their decisions.
#[derive(Debug, Clone)]
pub struct Seat {
    position: Position,
    stack: Chips,
    stake: Chips,
    spent: Chips,
    won: Chips,
    hole: Hole,
    status: State,
    blind: bool,
    actor: Rc<dyn Player>,
}

impl Seat {
    pub fn new(position: Position, stack: Chips, hole: Hole, actor: Rc<dyn Player>) -> Self {
        Self {
            position,
            stack: stack.max(0),
            stake: 0,
            spent: 0,
            won: 0,
            hole,
            status: State::Playing,
            blind: false,
            actor,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    /// chips in front of the seat this street
    pub fn stake(&self) -> Chips {
        self.stake
    }
    /// chips contributed over the whole hand
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn won(&self) -> Chips {
        self.won
    }
    pub fn hole(&self) -> Hole {
        self.hole
    }
    pub fn status(&self) -> State {
        self.status
    }
    /// posted the big blind and has not yet voluntarily acted
    pub fn blind(&self) -> bool {
        self.blind
    }
    pub fn actor(&self) -> Rc<dyn Player> {
        Rc::clone(&self.actor)
    }

    //

    pub(crate) fn spend(&mut self, amount: Chips) {
        assert!(amount >= 0 && amount <= self.stack, "overdrawn seat");
        self.stack -= amount;
        self.spent += amount;
        if self.stack == 0 {
            self.status = State::Shoved;
        }
    }
    pub(crate) fn collect(&mut self, amount: Chips) {
        self.stack += amount;
        self.won += amount;
    }
    pub(crate) fn set_stake(&mut self, stake: Chips) {
        self.stake = stake;
    }
    pub(crate) fn clear_stake(&mut self) {
        self.stake = 0;
    }
    pub(crate) fn fold(&mut self) {
        self.status = State::Folded;
    }
    pub(crate) fn post_blind(&mut self) {
        self.blind = true;
    }
    pub(crate) fn clear_blind(&mut self) {
        self.blind = false;
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Playing => write!(f, "P"),
            State::Shoved => write!(f, "S"),
            State::Folded => write!(f, "{}", "F".red()),
        }
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<3}{} {} {:>7}",
            self.position, self.status, self.hole, self.stack
        )
    }
}
