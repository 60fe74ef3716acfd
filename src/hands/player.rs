use super::decision::Decision;
use super::hand::Hand;
use crate::cards::Card;
use crate::Error;
use crate::Utility;
use crate::DOUBLE_LIMIT;

/// A hand owned by a seat, carrying its own wager.
///
/// # Fields
///
/// - `cards` — dealt in order; split hands keep their first card
/// - `done` — no further decisions will be taken
/// - `bet` — multiple of the base bet (1, or 2 after doubling)
/// - `surrendered` — half the bet was forfeited
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerHand {
    cards: Vec<Card>,
    done: bool,
    bet: u8,
    surrendered: bool,
}

impl From<Vec<Card>> for PlayerHand {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards,
            done: false,
            bet: 1,
            surrendered: false,
        }
    }
}

impl From<(Card, Card)> for PlayerHand {
    fn from((a, b): (Card, Card)) -> Self {
        Self::from(vec![a, b])
    }
}

impl TryFrom<&str> for PlayerHand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self::from)
    }
}

impl Hand for PlayerHand {
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

impl PlayerHand {
    pub fn bet(&self) -> Utility {
        Utility::from(self.bet)
    }
    pub fn multiple(&self) -> u8 {
        self.bet
    }
    pub fn surrendered(&self) -> bool {
        self.surrendered
    }
    pub fn double_bet(&mut self) {
        self.bet *= 2;
    }
    pub fn surrender(&mut self) {
        self.surrendered = true;
    }
    /// Legal decisions, in tie-break order.
    ///
    /// Past two cards only hitting and standing remain. On two cards,
    /// doubling needs a hard total of at most eleven and splitting needs a
    /// pair. Fewer than two cards has no defined decision set.
    pub fn decisions(&self) -> Result<Vec<Decision>, Error> {
        match self.cards.as_slice() {
            [] | [_] => Err(Error::illegal(format!(
                "no decisions for a {}-card hand",
                self.size()
            ))),
            [_, _] => Ok(Decision::all()
                .into_iter()
                .filter(|d| *d != Decision::Double || self.hard() <= DOUBLE_LIMIT)
                .filter(|d| *d != Decision::Split || self.is_pair())
                .collect()),
            _ => Ok(vec![Decision::Hit, Decision::Stand]),
        }
    }
}

impl std::fmt::Display for PlayerHand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        super::hand::display(self, f)?;
        if self.bet > 1 {
            write!(f, "x{}", self.bet)?;
        }
        if self.surrendered {
            write!(f, " (surrendered)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::cards::Suit;

    fn hand(ranks: &[Rank]) -> PlayerHand {
        PlayerHand::from(
            ranks
                .iter()
                .zip(Suit::all().into_iter().cycle())
                .map(|(r, s)| Card::from((*r, s)))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn ace_king_is_blackjack() {
        let hand = hand(&[Rank::Ace, Rank::King]);
        assert_eq!(hand.hard(), 11);
        assert_eq!(hand.soft(), 21);
        assert_eq!(hand.best(), 21);
        assert!(hand.is_blackjack());
        assert!(hand.is_soft());
        assert!(!hand.is_bust());
    }

    #[test]
    fn three_kings_bust() {
        let hand = hand(&[Rank::King, Rank::King, Rank::King]);
        assert_eq!(hand.hard(), 30);
        assert!(hand.is_bust());
        assert!(!hand.is_soft());
        assert!(!hand.is_blackjack());
    }

    #[test]
    fn best_prefers_legal_soft() {
        assert_eq!(hand(&[Rank::Ace, Rank::Six]).best(), 17);
        assert_eq!(hand(&[Rank::Ace, Rank::Six, Rank::Nine]).best(), 16);
        assert!(!hand(&[Rank::Ace, Rank::Six, Rank::Nine]).is_soft());
        assert_eq!(hand(&[Rank::Ace, Rank::Ace]).best(), 12);
    }

    #[test]
    fn twenty_one_in_three_is_not_blackjack() {
        let hand = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        assert_eq!(hand.best(), 21);
        assert!(!hand.is_blackjack());
    }

    #[test]
    fn pairs_need_two_equal_ranks() {
        assert!(hand(&[Rank::Eight, Rank::Eight]).is_pair());
        assert!(!hand(&[Rank::Ten, Rank::King]).is_pair());
        assert!(!hand(&[Rank::Eight, Rank::Eight, Rank::Two]).is_pair());
    }

    #[test]
    fn three_cards_only_hit_or_stand() {
        let decisions = hand(&[Rank::Two, Rank::Two, Rank::Two]).decisions().unwrap();
        assert_eq!(decisions, vec![Decision::Hit, Decision::Stand]);
    }

    #[test]
    fn unequal_ranks_never_split() {
        let decisions = hand(&[Rank::Ten, Rank::King]).decisions().unwrap();
        assert!(!decisions.contains(&Decision::Split));
        assert!(decisions.contains(&Decision::Surrender));
    }

    #[test]
    fn double_boundary_at_eleven() {
        let eleven = hand(&[Rank::Five, Rank::Six]).decisions().unwrap();
        let twelve = hand(&[Rank::Five, Rank::Seven]).decisions().unwrap();
        assert!(eleven.contains(&Decision::Double));
        assert!(!twelve.contains(&Decision::Double));
    }

    #[test]
    fn pair_of_aces_offers_everything() {
        let decisions = hand(&[Rank::Ace, Rank::Ace]).decisions().unwrap();
        assert_eq!(decisions, Decision::all().to_vec());
    }

    #[test]
    fn single_card_has_no_decisions() {
        assert!(matches!(
            hand(&[Rank::Ace]).decisions(),
            Err(Error::IllegalState(_))
        ));
    }

    #[test]
    fn doubling_and_surrender() {
        let mut hand = hand(&[Rank::Five, Rank::Six]);
        assert_eq!(hand.bet(), 1.0);
        hand.double_bet();
        assert_eq!(hand.bet(), 2.0);
        hand.surrender();
        assert!(hand.surrendered());
    }
}
