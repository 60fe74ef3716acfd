use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`, so the four suits of a rank are adjacent and each
/// rank owns one nibble of a [`Deck`] bitset.
///
/// # Tokens
///
/// Serialized tables spell each card as the hex tail of its Unicode
/// playing-card codepoint, e.g. `1F0A1` for the ace of spades. Only the
/// fourth (suit) and fifth (rank) characters carry information; anything
/// after the fifth is ignored.
///
/// [`Deck`]: super::deck::Deck
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    pub fn hard(&self) -> u8 {
        self.rank().hard()
    }
    pub fn is_ace(&self) -> bool {
        self.rank().is_ace()
    }
    /// The five-character token this card is serialized as.
    pub fn token(&self) -> String {
        format!("1F0{}{}", char::from(self.suit()), char::from(self.rank()))
    }
    /// Parses a comma-delimited list of tokens, skipping empty fields.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(Self::try_from)
            .collect()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "invalid card u8: {}", n);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// token isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<char>>();
        match chars.as_slice() {
            [_, _, _, suit, rank, ..] => {
                let suit = Suit::try_from(*suit)?;
                let rank = Rank::try_from(*rank)?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(Error::malformed(format!("card token {:?} is shorter than 5 characters", s))),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for n in 0..52u8 {
            let card = Card::from(n);
            assert!(card == Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_token() {
        for n in 0..52u8 {
            let card = Card::from(n);
            assert_eq!(Card::try_from(card.token().as_str()), Ok(card));
        }
    }

    #[test]
    fn token_positions() {
        let card = Card::try_from("1f0ae").unwrap();
        assert_eq!(card.suit(), Suit::Spade);
        assert_eq!(card.rank(), Rank::King);
        assert_eq!(Card::try_from("1F0D1").unwrap(), Card::from((Rank::Ace, Suit::Club)));
        assert_eq!(Card::try_from("1F0CA").unwrap().hard(), 10);
    }

    #[test]
    fn trailing_characters_are_ignored() {
        assert_eq!(Card::try_from("1F0A1X"), Ok(Card::from((Rank::Ace, Suit::Spade))));
        assert_eq!(Card::try_from("1F0C6A").unwrap().token(), "1F0C6");
    }

    #[test]
    fn malformed_tokens() {
        assert!(Card::try_from("1F0A").is_err());
        assert!(Card::try_from("1F0AC").is_err());
        assert!(Card::try_from("1F0E1").is_err());
        assert!(Card::parse("1F0A1,,1F0XX").is_err());
    }

    #[test]
    fn parse_skips_empty_fields() {
        let cards = Card::parse(",1F0A1, 1F0B5,").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::from((Rank::Ace, Suit::Spade)),
                Card::from((Rank::Five, Suit::Heart)),
            ]
        );
    }
}
