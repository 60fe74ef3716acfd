use super::table::Table;
use crate::hands::*;
use crate::Error;
use crate::Utility;
use crate::BLACKJACK_PAYOUT;
use crate::SURRENDER_LOSS;

/// Settlement of one player hand against a final dealer hand, in units of
/// the base bet. Rules are checked in precedence order.
pub fn settle(hand: &PlayerHand, dealer: &DealerHand) -> Utility {
    let bet = hand.bet();
    match () {
        _ if hand.surrendered() => -bet * SURRENDER_LOSS,
        _ if hand.is_blackjack() && dealer.is_blackjack() => 0.,
        _ if hand.is_blackjack() => bet * BLACKJACK_PAYOUT,
        _ if dealer.is_blackjack() => -bet,
        _ if hand.is_bust() => -bet,
        _ if dealer.is_bust() => bet,
        _ => match hand.best().cmp(&dealer.best()) {
            std::cmp::Ordering::Greater => bet,
            std::cmp::Ordering::Less => -bet,
            std::cmp::Ordering::Equal => 0.,
        },
    }
}

impl Table {
    /// Net result of every hand in the seat against the dealer.
    pub fn earnings(&self, seat: usize) -> Result<Utility, Error> {
        let earnings = self
            .seat(seat)?
            .iter()
            .map(|hand| settle(hand, self.dealer()))
            .sum::<Utility>();
        log::trace!("seat {} earns {:+}", seat, earnings);
        Ok(earnings)
    }
}
