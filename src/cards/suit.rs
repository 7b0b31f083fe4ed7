use serde::Deserialize;
use serde::Serialize;

/// Card suit. The ordering is arbitrary but consistent; suits never decide
/// a hand comparison.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Suit; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
    /// Unicode glyph, for prettier observers.
    pub const fn glyph(&self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => unreachable!("invalid suit u8"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection: every card of the suit in a 52-bit card set.
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        match s {
            Suit::Club => 0x0001111111111111,
            Suit::Diamond => 0x0002222222222222,
            Suit::Heart => 0x0004444444444444,
            Suit::Spade => 0x0008888888888888,
        }
    }
}

impl TryFrom<&str> for Suit {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "c" => Ok(Suit::Club),
            "d" => Ok(Suit::Diamond),
            "h" => Ok(Suit::Heart),
            "s" => Ok(Suit::Spade),
            _ => Err("invalid suit str"),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert!(suit == Suit::from(u8::from(suit)));
        }
    }

    #[test]
    fn suit_masks_partition_the_deck() {
        let union = Suit::all().iter().fold(0u64, |a, &s| a | u64::from(s));
        assert!(union == 0x000FFFFFFFFFFFFF);
    }

    #[test]
    fn glyphs() {
        assert!(Suit::Spade.glyph() == '♠');
        assert!(Suit::Heart.glyph() == '♥');
    }
}
