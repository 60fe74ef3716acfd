use crate::Error;

#[derive(
    Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Suit {
    #[default]
    Spade = 0,
    Heart = 1,
    Diamond = 2,
    Club = 3,
}

impl Suit {
    pub const fn all() -> [Suit; 4] {
        [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Spade,
            1 => Suit::Heart,
            2 => Suit::Diamond,
            3 => Suit::Club,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// token character isomorphism
///
/// the fourth character of a card token is the block of its
/// playing-card codepoint: A spades, B hearts, C diamonds, D clubs
impl TryFrom<char> for Suit {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Suit::Spade),
            'B' => Ok(Suit::Heart),
            'C' => Ok(Suit::Diamond),
            'D' => Ok(Suit::Club),
            _ => Err(Error::malformed(format!("invalid suit character {:?}", c))),
        }
    }
}
impl From<Suit> for char {
    fn from(s: Suit) -> char {
        match s {
            Suit::Spade => 'A',
            Suit::Heart => 'B',
            Suit::Diamond => 'C',
            Suit::Club => 'D',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Spade => "s",
                Suit::Heart => "h",
                Suit::Diamond => "d",
                Suit::Club => "c",
            }
        )
    }
}
