use super::table::Table;
use crate::cards::Deck;
use crate::hands::*;
use crate::strategy::Strategy;
use crate::Error;
use crate::Utility;
use crate::HERO;

/// Whole-round drivers built on the single-step transitions.
impl Table {
    /// A fresh random round: one dealer upcard and a two-card hero hand,
    /// drawn from a full deck.
    pub fn deal() -> Result<Self, Error> {
        let mut deck = Deck::new();
        let upcard = deck.draw()?;
        let first = deck.draw()?;
        let second = deck.draw()?;
        Ok(Self::new(
            deck,
            DealerHand::from(upcard),
            vec![vec![PlayerHand::from((first, second))]],
        ))
    }

    /// Draws for the dealer until its stopping rule finalizes the hand.
    pub fn play_dealer(&mut self) -> Result<(), Error> {
        while !self.dealer().is_final() {
            let card = self.draw()?;
            self.hit_dealer(card);
        }
        log::trace!("dealer settles on {}", self.dealer());
        Ok(())
    }

    /// Applies one decision to a hand, drawing whatever cards it needs.
    pub fn apply(&mut self, seat: usize, index: usize, decision: Decision) -> Result<(), Error> {
        log::trace!("{} {}", decision, self.hand(seat, index)?);
        match decision {
            Decision::Hit => {
                let card = self.draw()?;
                self.hit(seat, index, card)
            }
            Decision::Stand => self.stand(seat, index),
            Decision::Double => {
                let card = self.draw()?;
                self.double(seat, index, card)
            }
            Decision::Split => {
                let left = self.draw()?;
                let right = self.draw()?;
                self.split(seat, index, left, right).map(|_| ())
            }
            Decision::Surrender => self.surrender(seat, index),
        }
    }

    /// Asks the strategy about the seat's first open hand until none remain.
    ///
    /// Split children are inserted at the front of the seat, so the left
    /// child is always finished before the right one.
    pub fn play_seat(&mut self, seat: usize, strategy: &impl Strategy) -> Result<(), Error> {
        while let Some(index) = self.active(seat) {
            let decision = strategy.decide(self, seat, index)?;
            let legal = self.hand(seat, index)?.decisions()?;
            if !legal.contains(&decision) {
                return Err(Error::illegal(format!(
                    "{} is not legal for {}",
                    decision,
                    self.hand(seat, index)?
                )));
            }
            self.apply(seat, index, decision)?;
        }
        Ok(())
    }

    /// Plays a complete round for the seat and returns its earnings.
    pub fn play(&mut self, seat: usize, strategy: &impl Strategy) -> Result<Utility, Error> {
        self.play_seat(seat, strategy)?;
        self.play_dealer()?;
        self.earnings(seat)
    }
}
