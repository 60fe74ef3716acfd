use super::hand::Hand;
use crate::cards::Card;
use crate::Error;

/// The dealer's hand. It never chooses; see [`Table::hit_dealer`].
///
/// [`Table::hit_dealer`]: crate::table::Table::hit_dealer
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DealerHand {
    cards: Vec<Card>,
    done: bool,
}

impl From<Vec<Card>> for DealerHand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards, done: false }
    }
}

impl From<Card> for DealerHand {
    fn from(card: Card) -> Self {
        Self::from(vec![card])
    }
}

impl TryFrom<&str> for DealerHand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self::from)
    }
}

impl Hand for DealerHand {
    fn cards(&self) -> &[Card] {
        &self.cards
    }
    fn is_final(&self) -> bool {
        self.done
    }
    fn finalize(&mut self) {
        self.done = true;
    }
    fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl std::fmt::Display for DealerHand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        super::hand::display(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_upcard() {
        let hand = DealerHand::try_from("1F0C6").unwrap();
        assert_eq!(hand.size(), 1);
        assert_eq!(hand.hard(), 6);
        assert!(!hand.is_final());
        assert_eq!(hand.to_string(), "[6d]");
    }

    #[test]
    fn finality_sticks_across_clones() {
        let mut hand = DealerHand::try_from("1F0A1,1F0B6").unwrap();
        hand.finalize();
        assert!(hand.clone().is_final());
        assert_eq!(hand.best(), 17);
        assert!(hand.is_soft());
    }
}
