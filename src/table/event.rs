use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::cards::strength::Strength;
use crate::Chips;
use crate::Position;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

/// Everything observers get told, in strict causal order.
///
/// Bet vs Raised and Checked vs Called are presentational distinctions:
/// a wager is a `Bet` only when no bet existed on the street yet, and a
/// zero-owed call is a `Checked`. Amounts on `Called`/`Raised` are the
/// street total being matched or set, not increments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    HandStarted,
    HandEnded,
    NewStreet(Street),
    Folded(Position),
    Checked(Position),
    Called(Position, Chips),
    Bet(Position, Chips),
    Raised(Position, Chips),
    Won(Position, Chips),
    Revealed(Vec<Reveal>),
}

/// One showdown participant's cards and final hand value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reveal {
    pub position: Position,
    pub hole: Hole,
    pub strength: Strength,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::HandStarted => write!(f, "{}", "HAND BEGINS".white()),
            Event::HandEnded => write!(f, "{}", "HAND ENDS".white()),
            Event::NewStreet(street) => write!(f, "{}", format!("== {} ==", street).white()),
            Event::Folded(pos) => write!(f, "{} {}", pos, "FOLD".red()),
            Event::Checked(pos) => write!(f, "{} {}", pos, "CHECK".cyan()),
            Event::Called(pos, to) => write!(f, "{} {}", pos, format!("CALL  {}", to).yellow()),
            Event::Bet(pos, amount) => write!(f, "{} {}", pos, format!("BET   {}", amount).green()),
            Event::Raised(pos, to) => write!(f, "{} {}", pos, format!("RAISE {}", to).green()),
            Event::Won(pos, amount) => write!(f, "{} {}", pos, format!("WIN   {}", amount).magenta()),
            Event::Revealed(reveals) => {
                for reveal in reveals {
                    writeln!(f, "{} {} {}", reveal.position, reveal.hole, reveal.strength)?;
                }
                Ok(())
            }
        }
    }
}
