use crate::cards::Card;
use crate::BLACKJACK;
use crate::SOFT_BONUS;

/// Valuation shared by player and dealer hands.
///
/// Implementors only expose their cards and a finality flag; every blackjack
/// total and predicate is derived from those. Finality is monotonic: once a
/// hand is final it stays final.
pub trait Hand {
    fn cards(&self) -> &[Card];
    fn is_final(&self) -> bool;
    fn finalize(&mut self);
    fn push(&mut self, card: Card);

    fn size(&self) -> usize {
        self.cards().len()
    }
    fn has_ace(&self) -> bool {
        self.cards().iter().any(Card::is_ace)
    }
    /// Total with every ace counted as one. Saturates, so arbitrarily long
    /// hands still read as bust.
    fn hard(&self) -> u8 {
        self.cards()
            .iter()
            .map(Card::hard)
            .fold(0, u8::saturating_add)
    }
    /// Total with one ace counted as eleven, whether or not that busts.
    fn soft(&self) -> u8 {
        self.hard()
            .saturating_add(if self.has_ace() { SOFT_BONUS } else { 0 })
    }
    /// Higher of hard and soft that does not bust, else the lower.
    fn best(&self) -> u8 {
        let hard = self.hard();
        let soft = self.soft();
        match hard.max(soft) {
            best if best <= BLACKJACK => best,
            _ => hard.min(soft),
        }
    }
    fn is_soft(&self) -> bool {
        self.has_ace() && self.soft() <= BLACKJACK
    }
    fn is_bust(&self) -> bool {
        self.hard() > BLACKJACK
    }
    fn is_blackjack(&self) -> bool {
        self.size() == 2 && self.soft() == BLACKJACK
    }
    fn is_pair(&self) -> bool {
        match self.cards() {
            [a, b] => a.rank() == b.rank(),
            _ => false,
        }
    }
}

/// Renders the cards of any hand.
pub(crate) fn display(hand: &impl Hand, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "[")?;
    for (i, card) in hand.cards().iter().enumerate() {
        match i {
            0 => write!(f, "{}", card)?,
            _ => write!(f, " {}", card)?,
        }
    }
    write!(f, "]")
}
