use super::table::Table;
use crate::cards::*;
use crate::hands::*;
use crate::Error;

impl Table {
    /// Builds a table from one comma-delimited line of card tokens.
    ///
    /// The first token is the dealer's upcard, the next `others` pairs are
    /// the other seats in line order, and every remaining token belongs to
    /// the hero. The hero becomes seat 0 and the other seats follow in
    /// reverse line order. A leading empty field is allowed.
    ///
    /// The deck is whatever the table does not show. A hero hand that is
    /// already bust starts out final.
    pub fn parse(line: &str, others: usize) -> Result<Self, Error> {
        let cards = Card::parse(line)?;
        let needed = 1 + 2 * others + 2;
        if cards.len() < needed {
            return Err(Error::malformed(format!(
                "expected at least {} cards for {} other seats, found {}",
                needed,
                others,
                cards.len()
            )));
        }
        let mut deck = Deck::new();
        for card in cards.iter() {
            if !deck.remove(*card) {
                return Err(Error::malformed(format!("duplicate card {}", card)));
            }
        }
        let (upcard, rest) = cards.split_at(1);
        let (seated, hero) = rest.split_at(2 * others);
        let mut hero = PlayerHand::from(hero.to_vec());
        if hero.is_bust() {
            hero.finalize();
        }
        let seats = std::iter::once(vec![hero])
            .chain(
                seated
                    .chunks(2)
                    .rev()
                    .map(|pair| vec![PlayerHand::from(pair.to_vec())]),
            )
            .collect::<Vec<_>>();
        Ok(Self::new(deck, DealerHand::from(upcard[0]), seats))
    }
}
