use crate::Position;
use serde::Deserialize;
use serde::Serialize;

const NAMES: [&str; 7] = ["SB", "BB", "UTG", "LJ", "HJ", "CO", "BTN"];

/// The conventional name of a seat relative to the blinds: "SB", "BB",
/// "UTG", "UTG+n", "LJ", "HJ", "CO", "BTN". Seat 1 is always "BB"; seat 0
/// is "BTN" two-handed and "SB" otherwise; later seats count back from the
/// button. Display only — nothing in the rules reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatName(String);

impl SeatName {
    /// Inputs clamp: table size to [2, 23], seat index to [0, size).
    pub fn new(seat: Position, seats: usize) -> Self {
        let seats = seats.clamp(2, 23);
        let seat = seat.min(seats - 1);
        Self(Self::name(seat, seats).to_string())
    }

    fn name(seat: Position, seats: usize) -> String {
        if seat == 1 {
            "BB".to_string()
        } else if seat == 0 {
            match seats {
                2 => "BTN".to_string(),
                _ => "SB".to_string(),
            }
        } else if seats < 8 {
            NAMES[7 - seats + seat].to_string()
        } else if seat == 2 {
            "UTG".to_string()
        } else if seat + 5 > seats {
            NAMES[seat + 7 - seats].to_string()
        } else {
            format!("UTG+{}", seat - 2)
        }
    }
}

impl std::fmt::Display for SeatName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(seat: Position, seats: usize) -> String {
        SeatName::new(seat, seats).to_string()
    }

    #[test]
    fn heads_up() {
        assert_eq!(name(0, 2), "BTN");
        assert_eq!(name(1, 2), "BB");
    }

    #[test]
    fn short_handed() {
        assert_eq!(name(0, 3), "SB");
        assert_eq!(name(1, 3), "BB");
        assert_eq!(name(2, 3), "BTN");
        assert_eq!(name(2, 4), "CO");
        assert_eq!(name(3, 4), "BTN");
        assert_eq!(name(6, 7), "BTN");
        assert_eq!(name(2, 7), "UTG");
    }

    #[test]
    fn full_ring() {
        assert_eq!(name(2, 9), "UTG");
        assert_eq!(name(3, 9), "UTG+1");
        assert_eq!(name(5, 9), "LJ");
        assert_eq!(name(6, 9), "HJ");
        assert_eq!(name(7, 9), "CO");
        assert_eq!(name(8, 9), "BTN");
    }

    #[test]
    fn clamped_inputs() {
        assert_eq!(name(9, 2), "BB");
        assert_eq!(name(0, 1), "BTN");
        assert_eq!(name(0, 99), "SB");
    }
}
